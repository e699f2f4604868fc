//! # Equipment
//!
//! Worn armor and accessories. Slots are fixed arrays indexed by the slot
//! enums, so every slot always exists and is either empty or occupied.
//! Equipment is shared by all weapon presets.

use gunchete_content::{AccessorySlot, ArmorSlot, Registry};

/// A reference to an item occupying a slot.
///
/// For armor slots `item_def_id` is the armor definition id; for accessory
/// slots it is the item definition id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlottedItem {
    /// Definition id (see type docs).
    pub item_def_id: String,
    /// Name shown to the player.
    pub display_name: String,
}

impl SlottedItem {
    /// Creates a slotted item.
    #[must_use]
    pub fn new(item_def_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            item_def_id: item_def_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Defensive stats aggregated over every worn armor piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefenseStats {
    /// Sum of armor class bonuses.
    pub ac_bonus: i32,
    /// Dexterity modifier after the strictest dex cap.
    pub effective_dex: i32,
    /// Sum of check penalties.
    pub check_penalty: i32,
    /// Sum of speed penalties.
    pub speed_penalty: i32,
    /// Highest strength requirement.
    pub strength_req: i32,
}

/// A character's armor and accessory slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equipment {
    armor: [Option<SlottedItem>; ArmorSlot::COUNT],
    accessories: [Option<SlottedItem>; AccessorySlot::COUNT],
}

impl Equipment {
    /// Creates equipment with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What is worn in an armor slot.
    #[must_use]
    pub fn armor(&self, slot: ArmorSlot) -> Option<&SlottedItem> {
        self.armor[slot.index()].as_ref()
    }

    /// Fills an armor slot, returning the previous occupant.
    pub fn set_armor(&mut self, slot: ArmorSlot, item: SlottedItem) -> Option<SlottedItem> {
        self.armor[slot.index()].replace(item)
    }

    /// Empties an armor slot, returning the previous occupant.
    pub fn clear_armor(&mut self, slot: ArmorSlot) -> Option<SlottedItem> {
        self.armor[slot.index()].take()
    }

    /// What is worn in an accessory slot.
    #[must_use]
    pub fn accessory(&self, slot: AccessorySlot) -> Option<&SlottedItem> {
        self.accessories[slot.index()].as_ref()
    }

    /// Fills an accessory slot, returning the previous occupant.
    pub fn set_accessory(&mut self, slot: AccessorySlot, item: SlottedItem) -> Option<SlottedItem> {
        self.accessories[slot.index()].replace(item)
    }

    /// Empties an accessory slot, returning the previous occupant.
    pub fn clear_accessory(&mut self, slot: AccessorySlot) -> Option<SlottedItem> {
        self.accessories[slot.index()].take()
    }

    /// Occupied armor slots in slot order.
    pub fn equipped_armor(&self) -> impl Iterator<Item = (ArmorSlot, &SlottedItem)> {
        ArmorSlot::ALL
            .into_iter()
            .filter_map(|slot| self.armor(slot).map(|item| (slot, item)))
    }

    /// Occupied accessory slots in slot order.
    pub fn equipped_accessories(&self) -> impl Iterator<Item = (AccessorySlot, &SlottedItem)> {
        AccessorySlot::ALL
            .into_iter()
            .filter_map(|slot| self.accessory(slot).map(|item| (slot, item)))
    }

    /// Aggregates defenses over worn armor.
    ///
    /// Pieces whose armor definition is not registered are skipped. With no
    /// dex cap in effect `effective_dex` equals `dex_mod`.
    #[must_use]
    pub fn computed_defenses(&self, registry: &Registry, dex_mod: i32) -> DefenseStats {
        let mut stats = DefenseStats {
            effective_dex: dex_mod,
            ..DefenseStats::default()
        };

        for def in self
            .equipped_armor()
            .filter_map(|(_, item)| registry.armor(&item.item_def_id))
        {
            stats.ac_bonus += def.ac_bonus;
            stats.check_penalty += def.check_penalty;
            stats.speed_penalty += def.speed_penalty;
            stats.strength_req = stats.strength_req.max(def.strength_req);
            if let Some(cap) = def.dex_cap {
                stats.effective_dex = stats.effective_dex.min(cap);
            }
        }
        stats
    }
}
