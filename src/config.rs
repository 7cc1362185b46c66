use crate::command::TRANSITION_DURATION;
use crate::error::InspectError;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Scales offered for sheet export
pub const EXPORT_SCALE_MAX: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChrConfig {
    pub scale: u32,
    pub export_prefix: String,
}

impl Default for ChrConfig {
    fn default() -> Self {
        ChrConfig {
            scale: 2,
            export_prefix: "chr".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Seconds from success until a command is ready again
    pub transition_secs: f64,
}

impl Default for CommandConfig {
    fn default() -> Self {
        CommandConfig {
            transition_secs: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub verbose_info: bool,
    /// List every instruction, without collapsing repeats
    pub verbose_listing: bool,
}

/// Inspector settings, read from TOML with every field optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub chr: ChrConfig,
    pub commands: CommandConfig,
    pub listing: ListingConfig,
}

impl InspectorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, InspectError> {
        let config: InspectorConfig =
            toml::from_str(text).map_err(|e| InspectError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, InspectError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn validate(&self) -> Result<(), InspectError> {
        if self.chr.scale == 0 || self.chr.scale > EXPORT_SCALE_MAX {
            return Err(InspectError::Config(format!(
                "chr.scale must be between 1 and {}, got {}",
                EXPORT_SCALE_MAX, self.chr.scale
            )));
        }
        let secs = self.commands.transition_secs;
        if secs < 0.0 || Duration::try_from_secs_f64(secs).is_err() {
            return Err(InspectError::Config(format!(
                "commands.transition_secs must be a non-negative number of seconds, got {}",
                secs
            )));
        }
        Ok(())
    }

    /// Command transition time. Values that were never validated fall back
    /// to the default.
    pub fn transition(&self) -> Duration {
        Duration::try_from_secs_f64(self.commands.transition_secs).unwrap_or_else(|_| {
            warn!(
                "commands.transition_secs {} out of range, using {:?}",
                self.commands.transition_secs, TRANSITION_DURATION
            );
            TRANSITION_DURATION
        })
    }
}
