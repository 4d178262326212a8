//! Game settings and preferences
//!
//! Persisted as `settings.json` next to the working directory. A missing
//! file means defaults; a malformed one is reported and replaced by
//! defaults. Fields absent from the file keep their default values.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MATCH_SECONDS;
use crate::sim::Objective;

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Reasons settings could not be read or written
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "settings i/o error: {e}"),
            Self::Malformed(e) => write!(f, "malformed settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Match ===
    /// Survival time needed to win
    pub max_seconds: f32,
    /// Fixed RNG seed (random per launch when absent)
    pub seed: Option<u64>,
    /// Objective the headless demo plays
    pub objective: Objective,

    // === Files ===
    pub assets_dir: PathBuf,
    pub ranking_path: PathBuf,

    // === Extras mini-game ===
    /// Working directory of the Extras program
    pub extras_dir: PathBuf,
    /// Program to run, resolved inside `extras_dir`
    pub extras_program: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_seconds: DEFAULT_MATCH_SECONDS,
            seed: None,
            objective: Objective::Time,

            assets_dir: PathBuf::from("assets"),
            ranking_path: PathBuf::from("ranking.json"),

            extras_dir: PathBuf::from("extra"),
            extras_program: "./extra".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings, failing on unreadable or malformed input
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(SettingsError::Io)?;
        let mut settings: Settings = serde_json::from_str(&json).map_err(SettingsError::Malformed)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(SettingsError::Malformed)?;
        fs::write(path, json).map_err(SettingsError::Io)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Clamp values a hand-edited file could get wrong
    fn sanitize(&mut self) {
        if !(self.max_seconds.is_finite() && self.max_seconds > 0.0) {
            log::warn!("Invalid max_seconds {}, using default", self.max_seconds);
            self.max_seconds = DEFAULT_MATCH_SECONDS;
        }
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
    }
}
