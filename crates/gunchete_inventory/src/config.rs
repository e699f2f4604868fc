//! # Inventory Configuration
//!
//! Per-character limits, loaded once at startup:
//!
//! ```toml
//! [backpack]
//! max_slots = 20
//! max_weight = 50.0
//!
//! [loadout]
//! presets = 2
//! ```
//!
//! Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{InventoryError, InventoryResult};
use crate::loadout::DEFAULT_PRESETS;

/// Backpack limits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackpackConfig {
    /// Number of stacks.
    pub max_slots: usize,
    /// Carried weight limit.
    pub max_weight: f64,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            max_slots: 20,
            max_weight: 50.0,
        }
    }
}

/// Loadout limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutConfig {
    /// Number of weapon presets.
    pub presets: usize,
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        Self {
            presets: DEFAULT_PRESETS,
        }
    }
}

/// Everything needed to build a new character's kit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Backpack limits.
    pub backpack: BackpackConfig,
    /// Loadout limits.
    pub loadout: LoadoutConfig,
}

impl InventoryConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document is malformed or a limit is out of range.
    pub fn from_toml_str(text: &str) -> InventoryResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| InventoryError::InvalidConfig(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or is invalid.
    pub fn load(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            InventoryError::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            max_slots = config.backpack.max_slots,
            max_weight = config.backpack.max_weight,
            presets = config.loadout.presets,
            "inventory config loaded"
        );
        Ok(config)
    }

    /// Checks every limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first bad limit.
    pub fn validate(&self) -> InventoryResult<()> {
        if self.backpack.max_slots == 0 {
            return Err(InventoryError::InvalidConfig(
                "backpack.max_slots must be > 0".to_string(),
            ));
        }
        if !self.backpack.max_weight.is_finite() || self.backpack.max_weight <= 0.0 {
            return Err(InventoryError::InvalidConfig(
                "backpack.max_weight must be a finite value > 0".to_string(),
            ));
        }
        if self.loadout.presets == 0 {
            return Err(InventoryError::InvalidConfig(
                "loadout.presets must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
