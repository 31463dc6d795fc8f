use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use strata::{ChaChaSource, Level, WorldGenerator};
use tools::config_file::resolve_world_config;
use tools::init_tracing;

/// Generate a world and print it
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file overriding the default world config
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print only this depth (0 is the surface)
    #[arg(short, long)]
    level: Option<usize>,
    /// Print the world summary as JSON instead of ASCII maps
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = resolve_world_config(args.config.as_deref())?;
    let generator = WorldGenerator::new(config)?;
    let world = generator
        .generate(&mut ChaChaSource::seeded(args.seed))
        .with_context(|| format!("world generation failed for seed {}", args.seed))?;

    if args.json {
        let summary = serde_json::to_string_pretty(&world.summary())
            .context("failed to serialize world summary")?;
        println!("{summary}");
        return Ok(());
    }

    let levels: Vec<&Level> = match args.level {
        Some(depth) => match world.level(depth) {
            Some(level) => vec![level],
            None => bail!("depth {depth} out of range, world has {} levels", world.level_count()),
        },
        None => world.levels().iter().collect(),
    };

    for level in levels {
        let stairs = level.stairs_down;
        println!("Z:{} {:?} stairs=({}, {})", level.depth, level.kind, stairs.x, stairs.y);
        print!("{}", level.grid.render_ascii());
        println!();
    }
    println!("Seed: {}", args.seed);
    println!("Levels: {}", world.level_count());
    println!("Fingerprint: {}", world.fingerprint_hex());

    Ok(())
}
