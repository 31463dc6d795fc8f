//! Procedural level generation split into carving, analysis and assembly steps.

mod carve;
mod cave;
mod generator;
mod region;
mod relief;
mod rooms;
mod surface;

pub use carve::{carve_corridor, carve_room, carve_vertical_shaft};
pub use cave::generate_cave_level;
pub use generator::WorldGenerator;
pub use region::{Region, largest_connected_region};
pub use relief::{apply_wall_relief, relief_for};
pub use rooms::{PlacementWindow, RoomRect, RoomSizes, chain_rooms, place_rooms};
pub use surface::{SURFACE_DEPTH, generate_surface_level};

use crate::config::WorldConfig;
use crate::error::GenerationError;
use crate::rng::ChaChaSource;
use crate::world::World;

/// Builds a full world from a seed on a fresh ChaCha stream.
pub fn generate_world(seed: u64, config: &WorldConfig) -> Result<World, GenerationError> {
    WorldGenerator::new(config.clone())?.generate(&mut ChaChaSource::seeded(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ChaChaSource;

    #[test]
    fn generate_world_matches_world_generator_output() {
        let config = WorldConfig::default();
        let from_helper = generate_world(123, &config).expect("helper generates");
        let from_generator = WorldGenerator::new(config)
            .and_then(|generator| generator.generate(&mut ChaChaSource::seeded(123)))
            .expect("generator generates");

        assert_eq!(from_helper, from_generator);
    }
}
