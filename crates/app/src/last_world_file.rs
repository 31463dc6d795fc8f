use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strata::World;

use crate::APP_NAME;

pub const LAST_WORLD_FORMAT_VERSION: u32 = 1;

/// The seed and fingerprint of the most recently viewed world.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LastWorldFile {
    pub format_version: u32,
    pub seed: u64,
    pub fingerprint_hex: String,
    pub level_count: usize,
}

impl LastWorldFile {
    pub fn for_world(seed: u64, world: &World) -> Self {
        Self {
            format_version: LAST_WORLD_FORMAT_VERSION,
            seed,
            fingerprint_hex: world.fingerprint_hex(),
            level_count: world.level_count(),
        }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().join("last_world.json"))
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
