pub mod config;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod rng;
pub mod tiles;
pub mod types;
pub mod visibility;
pub mod world;

pub use config::{FOV_RADIUS, MAP_H, MAP_W, SURFACE_LIMIT, WorldConfig, Z_LEVELS};
pub use error::GenerationError;
pub use grid::Grid;
pub use mapgen::{WorldGenerator, generate_world};
pub use rng::{ChaChaSource, RandomSource};
pub use tiles::{Rgb, TileKind};
pub use types::{LevelKind, Pos};
pub use visibility::{Visibility, compute_visibility};
pub use world::{Level, LevelSummary, World, WorldSummary};
