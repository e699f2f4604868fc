//! # Explosive Definitions

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Area affected by a detonation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    /// Everyone in the room.
    Room,
    /// Targets within a burst radius.
    Burst,
}

/// When an explosive detonates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuseType {
    /// On use.
    Immediate,
    /// After a delay.
    Delayed,
}

/// Static properties of an explosive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplosiveDef {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Damage dice expression.
    pub damage_dice: String,
    /// Damage type.
    pub damage_type: String,
    /// Area of effect.
    pub area_type: AreaType,
    /// Saving throw, e.g. `reflex`.
    pub save_type: String,
    /// Saving throw difficulty, > 0.
    pub save_dc: u32,
    /// Detonation timing.
    pub fuse: FuseType,
    /// Free-form traits.
    #[serde(default)]
    pub traits: Vec<String>,
}

impl ExplosiveDef {
    /// Checks every field rule and reports all violations at once.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` listing each failed rule.
    pub fn validate(&self) -> ContentResult<()> {
        let mut reasons = Vec::new();
        if self.id.is_empty() {
            reasons.push("id must not be empty".to_string());
        }
        if self.name.is_empty() {
            reasons.push("name must not be empty".to_string());
        }
        if self.damage_dice.is_empty() {
            reasons.push("damage_dice must not be empty".to_string());
        }
        if self.damage_type.is_empty() {
            reasons.push("damage_type must not be empty".to_string());
        }
        if self.save_type.is_empty() {
            reasons.push("save_type must not be empty".to_string());
        }
        if self.save_dc == 0 {
            reasons.push("save_dc must be > 0".to_string());
        }
        ContentError::check("explosive", &self.id, reasons)
    }
}
