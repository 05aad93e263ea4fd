use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All tunable movement parameters, loaded from tuning.ron.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub dt: f32,
    pub pixels_per_unit: f32,
    /// Player speed in world units per second.
    pub move_speed: f32,
    /// Stick magnitude below which input reads as zero.
    pub stick_deadzone_min: f32,
    /// Stick magnitude at or above which input reads as full.
    pub stick_deadzone_max: f32,
    pub player_radius: f32,
    pub indicator_len_px: f32,
    pub indicator_thickness_px: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            pixels_per_unit: 32.0,
            move_speed: 5.0,
            stick_deadzone_min: 0.125,
            stick_deadzone_max: 0.925,
            player_radius: 0.5,
            indicator_len_px: 20.0,
            indicator_thickness_px: 4.0,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("top_down_mover")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    /// Parse a RON document. Fields left out take their defaults.
    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::parse(&contents) {
                    Ok(tuning) => return tuning,
                    Err(e) => {
                        warn!("Failed to parse tuning.ron: {e}, using defaults");
                        return Self::default();
                    }
                },
                Err(e) => {
                    warn!("Failed to read tuning.ron: {e}, using defaults");
                    return Self::default();
                }
            }
        }
        let tuning = Self::default();
        tuning.save();
        tuning
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let pretty = ron::ser::PrettyConfig::default();
        match ron::ser::to_string_pretty(self, pretty) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    warn!("Failed to write tuning.ron: {e}");
                }
            }
            Err(e) => {
                warn!("Failed to serialize tuning: {e}");
            }
        }
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded (move_speed={:.2})", self.move_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let tuning = Tuning::parse("(move_speed: 7.5)").unwrap();
        assert_eq!(tuning.move_speed, 7.5);
        assert_eq!(tuning.stick_deadzone_min, 0.125);
        assert_eq!(tuning.stick_deadzone_max, 0.925);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Tuning::parse("(move_speed: \"fast\")").is_err());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = ron::ser::to_string_pretty(&Tuning::default(), Default::default()).unwrap();
        let tuning = Tuning::parse(&text).unwrap();
        assert_eq!(tuning.move_speed, 5.0);
        assert_eq!(tuning.dt, 1.0 / 60.0);
    }
}
