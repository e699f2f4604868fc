//! # Item Definitions
//!
//! The static description of anything that can sit in a backpack.

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Wielded in a hand; requires `weapon_ref`.
    Weapon,
    /// Thrown or placed; requires `explosive_ref`.
    Explosive,
    /// Used up on use.
    Consumable,
    /// No mechanical use.
    Junk,
    /// Worn in an armor slot; requires `armor_ref`.
    Armor,
    /// Worn in an accessory slot.
    Accessory,
}

impl ItemKind {
    /// The snake_case identifier used in content files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Explosive => "explosive",
            Self::Consumable => "consumable",
            Self::Junk => "junk",
            Self::Armor => "armor",
            Self::Accessory => "accessory",
        }
    }
}

/// Static properties of an inventory item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Item category.
    pub kind: ItemKind,
    /// Weight of one unit.
    #[serde(default)]
    pub weight: f64,
    /// Weapon definition id, for weapons.
    #[serde(default)]
    pub weapon_ref: Option<String>,
    /// Armor definition id, for armor.
    #[serde(default)]
    pub armor_ref: Option<String>,
    /// Explosive definition id, for explosives.
    #[serde(default)]
    pub explosive_ref: Option<String>,
    /// Whether identical units share one backpack slot.
    #[serde(default)]
    pub stackable: bool,
    /// Maximum units per stack.
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Trade value in rounds.
    #[serde(default)]
    pub value: u32,
}

const fn default_max_stack() -> u32 {
    1
}

impl ItemDef {
    /// Creates a minimal non-stackable definition.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            weight,
            weapon_ref: None,
            armor_ref: None,
            explosive_ref: None,
            stackable: false,
            max_stack: 1,
            value: 0,
        }
    }

    /// Makes the item stackable up to `max_stack` units.
    #[must_use]
    pub fn stackable(mut self, max_stack: u32) -> Self {
        self.stackable = true;
        self.max_stack = max_stack;
        self
    }

    /// Sets the weapon reference.
    #[must_use]
    pub fn with_weapon_ref(mut self, weapon_id: impl Into<String>) -> Self {
        self.weapon_ref = Some(weapon_id.into());
        self
    }

    /// Sets the armor reference.
    #[must_use]
    pub fn with_armor_ref(mut self, armor_id: impl Into<String>) -> Self {
        self.armor_ref = Some(armor_id.into());
        self
    }

    /// Sets the explosive reference.
    #[must_use]
    pub fn with_explosive_ref(mut self, explosive_id: impl Into<String>) -> Self {
        self.explosive_ref = Some(explosive_id.into());
        self
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
        if self.max_stack < 1 {
            reasons.push("max_stack must be >= 1".to_string());
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            reasons.push("weight must be a finite value >= 0".to_string());
        }
        if self.kind == ItemKind::Weapon && is_blank(self.weapon_ref.as_deref()) {
            reasons.push("weapon_ref is required when kind is weapon".to_string());
        }
        if self.kind == ItemKind::Explosive && is_blank(self.explosive_ref.as_deref()) {
            reasons.push("explosive_ref is required when kind is explosive".to_string());
        }
        if self.kind == ItemKind::Armor && is_blank(self.armor_ref.as_deref()) {
            reasons.push("armor_ref is required when kind is armor".to_string());
        }
        ContentError::check("item", &self.id, reasons)
    }
}

fn is_blank(reference: Option<&str>) -> bool {
    reference.map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_junk() {
        let def = ItemDef::new("scrap", "Scrap Metal", ItemKind::Junk, 0.5);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_collects_every_reason() {
        let mut def = ItemDef::new("", "", ItemKind::Weapon, -1.0);
        def.max_stack = 0;

        match def.validate() {
            Err(ContentError::Validation { kind, reasons, .. }) => {
                assert_eq!(kind, "item");
                assert_eq!(reasons.len(), 5, "unexpected reasons: {reasons:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_requires_reference() {
        let armor = ItemDef::new("vest", "Vest", ItemKind::Armor, 4.0);
        assert!(armor.validate().is_err());
        assert!(armor.with_armor_ref("vest_armor").validate().is_ok());

        let bomb = ItemDef::new("pipe", "Pipe Bomb", ItemKind::Explosive, 1.0).with_explosive_ref("");
        assert!(bomb.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let def: ItemDef = toml::from_str(
            r#"
            id = "ammo_9mm"
            name = "9mm Rounds"
            kind = "consumable"
            weight = 0.01
            stackable = true
            max_stack = 100
            "#,
        )
        .unwrap();

        assert_eq!(def.kind, ItemKind::Consumable);
        assert_eq!(def.max_stack, 100);
        assert!(def.weapon_ref.is_none());
        assert!(def.validate().is_ok());
    }
}
