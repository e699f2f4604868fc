//! # Equipment Slots
//!
//! Closed slot universes. Each enum doubles as an index into the fixed-size
//! slot arrays held by `Equipment`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A body-armor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    /// Head.
    Head,
    /// Torso.
    Torso,
    /// Left arm.
    LeftArm,
    /// Right arm.
    RightArm,
    /// Both hands.
    Hands,
    /// Left leg.
    LeftLeg,
    /// Right leg.
    RightLeg,
    /// Feet.
    Feet,
}

impl ArmorSlot {
    /// Number of armor slots.
    pub const COUNT: usize = 8;

    /// All armor slots in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Head,
        Self::Torso,
        Self::LeftArm,
        Self::RightArm,
        Self::Hands,
        Self::LeftLeg,
        Self::RightLeg,
        Self::Feet,
    ];

    /// Position of this slot in `ALL`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The snake_case identifier used in content files and commands.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Torso => "torso",
            Self::LeftArm => "left_arm",
            Self::RightArm => "right_arm",
            Self::Hands => "hands",
            Self::LeftLeg => "left_leg",
            Self::RightLeg => "right_leg",
            Self::Feet => "feet",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Torso => "Torso",
            Self::LeftArm => "Left Arm",
            Self::RightArm => "Right Arm",
            Self::Hands => "Hands",
            Self::LeftLeg => "Left Leg",
            Self::RightLeg => "Right Leg",
            Self::Feet => "Feet",
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ArmorSlot {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| ContentError::UnknownSlot(s.to_string()))
    }
}

/// An accessory slot: one neck slot and five ring slots per hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessorySlot {
    /// Neck.
    #[serde(rename = "neck")]
    Neck,
    /// Left hand, ring 1.
    #[serde(rename = "left_ring_1")]
    LeftRing1,
    /// Left hand, ring 2.
    #[serde(rename = "left_ring_2")]
    LeftRing2,
    /// Left hand, ring 3.
    #[serde(rename = "left_ring_3")]
    LeftRing3,
    /// Left hand, ring 4.
    #[serde(rename = "left_ring_4")]
    LeftRing4,
    /// Left hand, ring 5.
    #[serde(rename = "left_ring_5")]
    LeftRing5,
    /// Right hand, ring 1.
    #[serde(rename = "right_ring_1")]
    RightRing1,
    /// Right hand, ring 2.
    #[serde(rename = "right_ring_2")]
    RightRing2,
    /// Right hand, ring 3.
    #[serde(rename = "right_ring_3")]
    RightRing3,
    /// Right hand, ring 4.
    #[serde(rename = "right_ring_4")]
    RightRing4,
    /// Right hand, ring 5.
    #[serde(rename = "right_ring_5")]
    RightRing5,
}

impl AccessorySlot {
    /// Number of accessory slots.
    pub const COUNT: usize = 11;

    /// All accessory slots in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Neck,
        Self::LeftRing1,
        Self::LeftRing2,
        Self::LeftRing3,
        Self::LeftRing4,
        Self::LeftRing5,
        Self::RightRing1,
        Self::RightRing2,
        Self::RightRing3,
        Self::RightRing4,
        Self::RightRing5,
    ];

    /// Position of this slot in `ALL`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The snake_case identifier used in content files and commands.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::LeftRing1 => "left_ring_1",
            Self::LeftRing2 => "left_ring_2",
            Self::LeftRing3 => "left_ring_3",
            Self::LeftRing4 => "left_ring_4",
            Self::LeftRing5 => "left_ring_5",
            Self::RightRing1 => "right_ring_1",
            Self::RightRing2 => "right_ring_2",
            Self::RightRing3 => "right_ring_3",
            Self::RightRing4 => "right_ring_4",
            Self::RightRing5 => "right_ring_5",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neck => "Neck",
            Self::LeftRing1 => "Left Hand Ring 1",
            Self::LeftRing2 => "Left Hand Ring 2",
            Self::LeftRing3 => "Left Hand Ring 3",
            Self::LeftRing4 => "Left Hand Ring 4",
            Self::LeftRing5 => "Left Hand Ring 5",
            Self::RightRing1 => "Right Hand Ring 1",
            Self::RightRing2 => "Right Hand Ring 2",
            Self::RightRing3 => "Right Hand Ring 3",
            Self::RightRing4 => "Right Hand Ring 4",
            Self::RightRing5 => "Right Hand Ring 5",
        }
    }
}

impl fmt::Display for AccessorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AccessorySlot {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| ContentError::UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, slot) in ArmorSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
        for (i, slot) in AccessorySlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_parse_slot_ids() {
        assert_eq!("left_arm".parse::<ArmorSlot>(), Ok(ArmorSlot::LeftArm));
        assert_eq!("right_ring_5".parse::<AccessorySlot>(), Ok(AccessorySlot::RightRing5));
        assert_eq!(
            "tail".parse::<ArmorSlot>(),
            Err(ContentError::UnknownSlot("tail".to_string()))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ArmorSlot::RightLeg.label(), "Right Leg");
        assert_eq!(AccessorySlot::LeftRing3.label(), "Left Hand Ring 3");
    }
}
