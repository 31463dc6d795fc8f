//! World assembly: one surface level followed by independent cave levels.

use tracing::{info, warn};

use crate::config::WorldConfig;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::world::{Level, World};

use super::cave::generate_cave_level;
use super::surface::{SURFACE_DEPTH, generate_surface_level};

pub struct WorldGenerator {
    config: WorldConfig,
}

impl WorldGenerator {
    pub fn new(config: WorldConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> Result<World, GenerationError> {
        let mut levels = Vec::with_capacity(self.config.z_levels);
        levels.push(self.with_retries(SURFACE_DEPTH, rng, |config, rng| {
            generate_surface_level(config, rng)
        })?);
        for depth in 1..self.config.z_levels {
            levels.push(self.with_retries(depth, rng, |config, rng| {
                generate_cave_level(config, depth, rng)
            })?);
        }

        let world = World::from_levels(levels);
        let fingerprint = world.fingerprint_hex();
        info!(levels = world.level_count(), %fingerprint, "world generated");
        Ok(world)
    }

    /// Reruns a level generator on fresh draws while it reports an empty region.
    fn with_retries<R, F>(
        &self,
        depth: usize,
        rng: &mut R,
        mut generate_level: F,
    ) -> Result<Level, GenerationError>
    where
        R: RandomSource,
        F: FnMut(&WorldConfig, &mut R) -> Result<Level, GenerationError>,
    {
        let attempts = self.config.generation_attempts;
        for attempt in 1..=attempts {
            match generate_level(&self.config, rng) {
                Err(GenerationError::EmptyRegion { .. }) => {
                    warn!(depth, attempt, attempts, "level has no walkable region, retrying");
                }
                result => return result,
            }
        }
        Err(GenerationError::AttemptsExhausted { depth, attempts })
    }
}
