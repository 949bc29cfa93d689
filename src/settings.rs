use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::read_optional;
use crate::Error;

pub const SETTINGS_FILE: &str = "restoreland.json";
pub const STATE_PATH_VAR: &str = "RESTORELAND_STATE_PATH";
pub const SCENE_PATH_VAR: &str = "RESTORELAND_SCENE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Saved state document to restore from.
    pub state_path: PathBuf,
    /// Scene document the binary restores onto. It stands in for the live host scene,
    /// so unlike the state document it must exist; the binary fails with an I/O error
    /// when it is missing.
    pub scene_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("assembled_state.json"),
            scene_path: PathBuf::from("scene.json"),
        }
    }
}

impl Settings {
    /// Defaults, then `restoreland.json` in the working directory, then the environment.
    pub fn load_global() -> Result<Self, Error> {
        let mut settings = Self::load(Path::new(SETTINGS_FILE))?;
        settings.apply_overrides(|name| std::env::var_os(name).map(PathBuf::from));
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        match read_optional(path)? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Ok(Self::default()),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<PathBuf>) {
        if let Some(path) = var(STATE_PATH_VAR) {
            self.state_path = path;
        }

        if let Some(path) = var(SCENE_PATH_VAR) {
            self.scene_path = path;
        }
    }
}
