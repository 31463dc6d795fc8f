pub mod app_loop;
pub mod last_world_file;
pub mod seed;

pub const APP_NAME: &str = "Strata";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Status line shown under the map, e.g. `Z:0`.
pub fn depth_label(depth: usize) -> String {
    format!("Z:{depth}")
}
