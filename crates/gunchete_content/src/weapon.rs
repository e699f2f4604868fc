//! # Weapon Definitions

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Firing mode of a ranged weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiringMode {
    /// One round per action.
    Single,
    /// A short burst per action.
    Burst,
    /// Continuous fire.
    Automatic,
}

/// How many hands a weapon occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Fits either hand.
    #[default]
    OneHanded,
    /// Occupies both hands.
    TwoHanded,
    /// Off-hand defensive item.
    Shield,
}

/// Static properties of a weapon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponDef {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Damage dice expression, e.g. `2d6`.
    pub damage_dice: String,
    /// Damage type, e.g. `piercing`.
    pub damage_type: String,
    /// Range increment in feet; 0 means melee.
    #[serde(default)]
    pub range_increment: u32,
    /// Actions needed to reload; 0 for non-firearms.
    #[serde(default)]
    pub reload_actions: u32,
    /// Rounds per magazine; 0 for non-firearms.
    #[serde(default)]
    pub magazine_capacity: u32,
    /// Supported firing modes. Non-empty means firearm.
    #[serde(default)]
    pub firing_modes: Vec<FiringMode>,
    /// Hand occupancy.
    #[serde(default)]
    pub kind: WeaponKind,
    /// Free-form traits.
    #[serde(default)]
    pub traits: Vec<String>,
}

impl WeaponDef {
    /// Creates a one-handed melee weapon.
    #[must_use]
    pub fn melee(id: impl Into<String>, name: impl Into<String>, damage_dice: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage_dice: damage_dice.into(),
            damage_type: "slashing".to_string(),
            range_increment: 0,
            reload_actions: 0,
            magazine_capacity: 0,
            firing_modes: Vec::new(),
            kind: WeaponKind::OneHanded,
            traits: Vec::new(),
        }
    }

    /// Creates a firearm with the given magazine capacity and single fire.
    #[must_use]
    pub fn firearm(
        id: impl Into<String>,
        name: impl Into<String>,
        damage_dice: impl Into<String>,
        magazine_capacity: u32,
    ) -> Self {
        Self {
            damage_type: "piercing".to_string(),
            range_increment: 30,
            reload_actions: 1,
            magazine_capacity,
            firing_modes: vec![FiringMode::Single],
            ..Self::melee(id, name, damage_dice)
        }
    }

    /// Sets the hand occupancy.
    #[must_use]
    pub fn with_kind(mut self, kind: WeaponKind) -> Self {
        self.kind = kind;
        self
    }

    /// Melee weapons have no range increment.
    #[inline]
    #[must_use]
    pub fn is_melee(&self) -> bool {
        self.range_increment == 0
    }

    /// Firearms have at least one firing mode.
    #[inline]
    #[must_use]
    pub fn is_firearm(&self) -> bool {
        !self.firing_modes.is_empty()
    }

    /// Whether burst fire is available.
    #[must_use]
    pub fn supports_burst(&self) -> bool {
        self.firing_modes.contains(&FiringMode::Burst)
    }

    /// Whether automatic fire is available.
    #[must_use]
    pub fn supports_automatic(&self) -> bool {
        self.firing_modes.contains(&FiringMode::Automatic)
    }

    /// Fits in one hand.
    #[inline]
    #[must_use]
    pub fn is_one_handed(&self) -> bool {
        self.kind == WeaponKind::OneHanded
    }

    /// Occupies both hands.
    #[inline]
    #[must_use]
    pub fn is_two_handed(&self) -> bool {
        self.kind == WeaponKind::TwoHanded
    }

    /// Is a shield.
    #[inline]
    #[must_use]
    pub fn is_shield(&self) -> bool {
        self.kind == WeaponKind::Shield
    }

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
        if self.is_firearm() && self.magazine_capacity == 0 {
            reasons.push("firearm magazine_capacity must be > 0".to_string());
        }
        ContentError::check("weapon", &self.id, reasons)
    }
}
