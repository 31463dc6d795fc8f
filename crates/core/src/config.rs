//! World dimensions, level counts and generation tuning.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const MAP_W: usize = 80;
pub const MAP_H: usize = 45;
pub const Z_LEVELS: usize = 3;
pub const SURFACE_LIMIT: usize = MAP_H / 3;
pub const FOV_RADIUS: u32 = 8;
pub const DEFAULT_GENERATION_ATTEMPTS: u32 = 8;

const SURFACE_ROOMS: usize = 25;
const CAVE_ROOMS: usize = 30;
const TREE_CHANCE: f64 = 0.08;
const WATER_CHANCE: f64 = 0.04;
const MAX_SHAFTS: usize = 2;

/// Largest accepted map side; keeps every cell index inside `i32` coordinates.
pub const MAX_MAP_SIDE: usize = 4096;
pub const MAX_Z_LEVELS: usize = 64;
/// Cap on rooms per level and shafts per surface.
pub const MAX_PLACEMENTS: usize = 4096;

/// Rooms keep this many cells of rock between themselves and the map edge.
pub(crate) const ROOM_EDGE_INSET: usize = 2;
/// Surface-level rooms start this many rows below the surface stratum.
pub(crate) const CAVE_ROOF_DEPTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpan {
    pub min: usize,
    pub max: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub map_width: usize,
    pub map_height: usize,
    pub z_levels: usize,
    pub fov_radius: u32,
    pub surface_rooms: usize,
    pub cave_rooms: usize,
    pub room_width: RoomSpan,
    pub room_height: RoomSpan,
    pub tree_chance: f64,
    pub water_chance: f64,
    pub max_shafts: usize,
    pub generation_attempts: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_W,
            map_height: MAP_H,
            z_levels: Z_LEVELS,
            fov_radius: FOV_RADIUS,
            surface_rooms: SURFACE_ROOMS,
            cave_rooms: CAVE_ROOMS,
            room_width: RoomSpan { min: 4, max: 10 },
            room_height: RoomSpan { min: 4, max: 8 },
            tree_chance: TREE_CHANCE,
            water_chance: WATER_CHANCE,
            max_shafts: MAX_SHAFTS,
            generation_attempts: DEFAULT_GENERATION_ATTEMPTS,
        }
    }
}

impl WorldConfig {
    /// First row of the underground stratum.
    pub fn surface_limit(&self) -> usize {
        self.map_height / 3
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.z_levels == 0 {
            return Err(invalid("z_levels", "must be at least 1"));
        }
        if self.z_levels > MAX_Z_LEVELS {
            return Err(invalid("z_levels", format!("must be at most {MAX_Z_LEVELS}")));
        }
        if self.generation_attempts == 0 {
            return Err(invalid("generation_attempts", "must be at least 1"));
        }
        check_side("map_width", self.map_width)?;
        check_side("map_height", self.map_height)?;
        if self.map_width.checked_mul(self.map_height).is_none() {
            return Err(invalid("map_height", "map area overflows"));
        }
        check_count("surface_rooms", self.surface_rooms)?;
        check_count("cave_rooms", self.cave_rooms)?;
        check_count("max_shafts", self.max_shafts)?;
        if self.max_shafts == 0 {
            return Err(invalid("max_shafts", "must be at least 1"));
        }
        check_span("room_width", self.room_width)?;
        check_span("room_height", self.room_height)?;
        check_chance("tree_chance", self.tree_chance)?;
        check_chance("water_chance", self.water_chance)?;
        if self.tree_chance + self.water_chance > 1.0 {
            return Err(invalid("water_chance", "plus tree_chance must not exceed 1"));
        }

        let needed_width = self
            .room_width
            .max
            .checked_add(2 * ROOM_EDGE_INSET + 1)
            .filter(|&needed| needed <= self.map_width);
        if needed_width.is_none() {
            return Err(invalid("map_width", "too narrow for the widest room"));
        }
        let needed_height = self
            .room_height
            .max
            .checked_add(self.surface_limit() + CAVE_ROOF_DEPTH + ROOM_EDGE_INSET + 1)
            .filter(|&needed| needed <= self.map_height);
        if needed_height.is_none() {
            return Err(invalid("map_height", "must leave room below the surface stratum"));
        }
        Ok(())
    }
}

fn check_span(field: &'static str, span: RoomSpan) -> Result<(), GenerationError> {
    if span.min == 0 {
        return Err(invalid(field, "minimum must be positive"));
    }
    if span.min > span.max {
        return Err(invalid(field, format!("minimum {} exceeds maximum {}", span.min, span.max)));
    }
    Ok(())
}

fn check_side(field: &'static str, side: usize) -> Result<(), GenerationError> {
    if side > MAX_MAP_SIDE {
        return Err(invalid(field, format!("{side} exceeds {MAX_MAP_SIDE}")));
    }
    Ok(())
}

fn check_count(field: &'static str, count: usize) -> Result<(), GenerationError> {
    if count > MAX_PLACEMENTS {
        return Err(invalid(field, format!("{count} exceeds {MAX_PLACEMENTS}")));
    }
    Ok(())
}

fn check_chance(field: &'static str, chance: f64) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(invalid(field, format!("{chance} is outside [0, 1]")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> GenerationError {
    GenerationError::InvalidConfig { field, reason: reason.into() }
}
