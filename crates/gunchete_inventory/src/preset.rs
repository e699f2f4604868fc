//! # Weapon Presets
//!
//! One main-hand/off-hand pairing. The hand rules:
//!
//! 1. A two-handed main-hand weapon clears the off hand
//! 2. The off hand takes only one-handed weapons and shields
//! 3. The off hand is blocked while the main hand is two-handed
//!
//! Equipping a firearm gives it a fresh, fully loaded [`Magazine`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use gunchete_content::WeaponDef;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult, OffHandConflict};
use crate::magazine::Magazine;

/// A weapon hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Primary hand.
    Main,
    /// Secondary hand.
    Off,
}

impl Hand {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Main Hand",
            Self::Off => "Off Hand",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Hand {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "main_hand" => Ok(Self::Main),
            "off" | "off_hand" => Ok(Self::Off),
            other => Err(gunchete_content::ContentError::UnknownSlot(other.to_string()).into()),
        }
    }
}

/// A weapon in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedWeapon {
    /// The weapon definition.
    pub def: Arc<WeaponDef>,
    /// Present iff the weapon is a firearm.
    pub magazine: Option<Magazine>,
}

impl EquippedWeapon {
    /// Wraps a definition, loading a full magazine for firearms.
    #[must_use]
    pub fn new(def: Arc<WeaponDef>) -> Self {
        let magazine = (def.is_firearm() && def.magazine_capacity > 0)
            .then(|| Magazine::new(def.id.clone(), def.magazine_capacity));
        Self { def, magazine }
    }
}

/// Weapons pushed out of a preset by a main-hand equip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Displaced {
    /// The replaced main-hand weapon.
    pub main_hand: Option<EquippedWeapon>,
    /// The off-hand weapon cleared by a two-handed equip.
    pub off_hand: Option<EquippedWeapon>,
}

impl Displaced {
    /// True if nothing was displaced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_hand.is_none() && self.off_hand.is_none()
    }

    /// Iterates over every displaced weapon.
    pub fn into_weapons(self) -> impl Iterator<Item = EquippedWeapon> {
        self.main_hand.into_iter().chain(self.off_hand)
    }
}

/// A main-hand/off-hand weapon pairing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeaponPreset {
    main_hand: Option<EquippedWeapon>,
    off_hand: Option<EquippedWeapon>,
}

impl WeaponPreset {
    /// Creates an empty preset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The main-hand weapon.
    #[must_use]
    pub fn main_hand(&self) -> Option<&EquippedWeapon> {
        self.main_hand.as_ref()
    }

    /// The off-hand weapon.
    #[must_use]
    pub fn off_hand(&self) -> Option<&EquippedWeapon> {
        self.off_hand.as_ref()
    }

    /// Mutable main-hand weapon, e.g. to fire or reload.
    pub fn main_hand_mut(&mut self) -> Option<&mut EquippedWeapon> {
        self.main_hand.as_mut()
    }

    /// Mutable off-hand weapon.
    pub fn off_hand_mut(&mut self) -> Option<&mut EquippedWeapon> {
        self.off_hand.as_mut()
    }

    /// Puts a weapon in the main hand.
    ///
    /// A two-handed weapon also clears the off hand. Replaced weapons are
    /// returned for the caller to dispose of.
    ///
    /// # Errors
    ///
    /// Returns `Content(Validation)` if the definition is malformed.
    pub fn equip_main_hand(&mut self, def: Arc<WeaponDef>) -> InventoryResult<Displaced> {
        def.validate()?;

        let off_hand = if def.is_two_handed() {
            self.off_hand.take()
        } else {
            None
        };
        debug!(weapon = %def.id, two_handed = def.is_two_handed(), "equip main hand");
        let main_hand = self.main_hand.replace(EquippedWeapon::new(def));

        Ok(Displaced { main_hand, off_hand })
    }

    /// Checks whether a weapon may go in the off hand right now.
    ///
    /// # Errors
    ///
    /// Returns `OffHandBlocked` naming the conflict.
    pub fn check_off_hand(&self, def: &WeaponDef) -> InventoryResult<()> {
        if def.is_two_handed() {
            return Err(InventoryError::OffHandBlocked(OffHandConflict::TwoHandedWeapon));
        }
        if self.main_hand.as_ref().is_some_and(|w| w.def.is_two_handed()) {
            return Err(InventoryError::OffHandBlocked(OffHandConflict::MainHandTwoHanded));
        }
        Ok(())
    }

    /// Puts a one-handed weapon or shield in the off hand.
    ///
    /// # Errors
    ///
    /// Returns `Content(Validation)` for a malformed definition or
    /// `OffHandBlocked` if the hand rules forbid it.
    pub fn equip_off_hand(&mut self, def: Arc<WeaponDef>) -> InventoryResult<Option<EquippedWeapon>> {
        def.validate()?;
        self.check_off_hand(&def)?;
        debug!(weapon = %def.id, "equip off hand");
        Ok(self.off_hand.replace(EquippedWeapon::new(def)))
    }

    /// Empties the main hand.
    pub fn unequip_main_hand(&mut self) -> Option<EquippedWeapon> {
        self.main_hand.take()
    }

    /// Empties the off hand.
    pub fn unequip_off_hand(&mut self) -> Option<EquippedWeapon> {
        self.off_hand.take()
    }

    /// Empties one hand.
    pub fn unequip(&mut self, hand: Hand) -> Option<EquippedWeapon> {
        match hand {
            Hand::Main => self.unequip_main_hand(),
            Hand::Off => self.unequip_off_hand(),
        }
    }

    /// True if both hands are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_hand.is_none() && self.off_hand.is_none()
    }
}
