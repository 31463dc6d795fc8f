use anyhow::{Context, Result};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::path::PathBuf;
use strata::{ChaChaSource, WorldGenerator};
use tools::config_file::resolve_world_config;
use tools::init_tracing;
use tools::invariants::check_world;
use tracing::info;

/// Generate many worlds and check their invariants
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    worlds: u32,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = resolve_world_config(args.config.as_deref())?;
    let generator = WorldGenerator::new(config)?;
    let mut seeds = ChaCha8Rng::seed_from_u64(args.seed);

    println!("Fuzzing {} worlds from seed {}...", args.worlds, args.seed);
    for index in 0..args.worlds {
        let world_seed = seeds.next_u64();
        let world = generator
            .generate(&mut ChaChaSource::seeded(world_seed))
            .with_context(|| format!("world #{index} (seed {world_seed}) failed to generate"))?;
        check_world(&world, generator.config())
            .with_context(|| format!("world #{index} (seed {world_seed}) broke an invariant"))?;
        let fingerprint = world.fingerprint_hex();
        info!(index, world_seed, %fingerprint, "world ok");
    }

    println!("All {} worlds passed.", args.worlds);
    Ok(())
}
