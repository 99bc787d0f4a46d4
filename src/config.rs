use std::fs::File;

use serde::{Deserialize, Serialize};

/// Combination policy for a single soil plot. Decided once when the config
/// is parsed, hot logic never compares the raw mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilizerMode {
    #[serde(rename = "multi-fertilizer-stack")]
    MultiStack,
    #[serde(rename = "multi-fertilizer-single-level")]
    MultiSingleLevel,
    #[serde(rename = "single-fertilizer-replace")]
    SingleReplace,
    #[serde(rename = "single-fertilizer-stack")]
    SingleStack,
    #[serde(rename = "Vanilla")]
    Vanilla,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FertilizerConfig {
    pub fertilizer_mode: FertilizerMode,
    pub enable_always_fertilizer: bool,
    pub enable_keep_fertilizer_across_season: bool,
    pub speed_remain_after_harvest: bool,
    pub fertilizer_speed_boost: [f32; 3],
    pub fertilizer_quality_boost: [i32; 3],
    pub fertilizer_water_retention_boost: [f32; 3],
}

impl Default for FertilizerConfig {
    fn default() -> Self {
        Self {
            fertilizer_mode: FertilizerMode::MultiStack,
            enable_always_fertilizer: true,
            enable_keep_fertilizer_across_season: true,
            speed_remain_after_harvest: false,
            fertilizer_speed_boost: [0.1, 0.25, 0.33],
            fertilizer_quality_boost: [1, 2, 3],
            fertilizer_water_retention_boost: [0.33, 0.66, 1.0],
        }
    }
}

impl FertilizerConfig {
    pub fn load(path: &str) -> Result<FertilizerConfig, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
