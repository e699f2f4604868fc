//! # Player Kit
//!
//! Everything one character carries: a backpack, worn equipment, weapon
//! presets and a round balance. Transfers between these containers (and the
//! room floor) are all-or-nothing.
//!
//! ## Transaction Model
//!
//! 1. Resolve definitions and check every rule that can be checked up front
//! 2. Snapshot the containers the transfer touches
//! 3. Mutate; on any failure restore the snapshot and return the error
//!
//! A kit is owned by one player session and is not synchronized; the session
//! serializes commands.

use std::sync::Arc;

use gunchete_content::{
    AccessorySlot, ArmorDef, ArmorSlot, ItemDef, ItemKind, Registry, StartingLoadout, WeaponDef,
};
use tracing::{debug, warn};

use crate::backpack::{Backpack, ItemInstance};
use crate::config::InventoryConfig;
use crate::currency::RoundsBreakdown;
use crate::equipment::{Equipment, SlottedItem};
use crate::error::{InventoryError, InventoryResult};
use crate::floor::FloorManager;
use crate::loadout::LoadoutSet;
use crate::preset::{Displaced, EquippedWeapon, Hand, WeaponPreset};

/// One character's inventory state.
#[derive(Clone, Debug)]
pub struct PlayerKit {
    /// Carried items.
    pub backpack: Backpack,
    /// Worn armor and accessories.
    pub equipment: Equipment,
    /// Weapon presets.
    pub loadout: LoadoutSet,
    /// Round balance.
    pub currency: u32,
}

impl PlayerKit {
    /// Builds an empty kit with the configured limits.
    #[must_use]
    pub fn new(config: &InventoryConfig) -> Self {
        Self {
            backpack: Backpack::new(config.backpack.max_slots, config.backpack.max_weight),
            equipment: Equipment::new(),
            loadout: LoadoutSet::with_presets(config.loadout.presets),
            currency: 0,
        }
    }

    /// The round balance split into crates, clips and rounds.
    #[must_use]
    pub const fn currency_breakdown(&self) -> RoundsBreakdown {
        RoundsBreakdown::from_total(self.currency)
    }

    /// Wears one unit of an armor item from the backpack.
    ///
    /// Whatever was in the slot goes back into the backpack and is returned.
    ///
    /// # Errors
    ///
    /// Returns `NotInBackpack`, `UnknownItem`, `WrongItemKind`,
    /// `MissingDefinition` or `SlotMismatch` before anything changes, or the
    /// backpack error that stopped the old piece coming back (after rollback).
    pub fn wear_armor(
        &mut self,
        item_id: &str,
        slot: ArmorSlot,
        registry: &Registry,
    ) -> InventoryResult<Option<SlottedItem>> {
        let instance = self.first_instance(item_id)?;
        let item = resolve_item(item_id, ItemKind::Armor, registry)?;
        let armor = resolve_armor(&item, registry)?;
        if armor.slot != slot {
            return Err(InventoryError::SlotMismatch {
                item_id: item_id.to_string(),
                required: armor.slot,
                requested: slot,
            });
        }

        let prior_item_id = match self.equipment.armor(slot) {
            Some(prior) => Some(
                registry
                    .item_by_armor_ref(&prior.item_def_id)
                    .map(|def| def.id.clone())
                    .ok_or_else(|| InventoryError::MissingDefinition {
                        kind: "item",
                        id: prior.item_def_id.clone(),
                    })?,
            ),
            None => None,
        };

        let snapshot = self.backpack.snapshot();
        self.backpack.remove(&instance.instance_id, 1)?;
        if let Some(prior_item_id) = prior_item_id {
            if let Err(e) = self.backpack.add(&prior_item_id, 1, registry) {
                warn!(item = item_id, slot = slot.id(), error = %e, "wear rolled back");
                self.backpack.restore(&snapshot);
                return Err(e);
            }
        }

        debug!(item = item_id, slot = slot.id(), "wear armor");
        Ok(self
            .equipment
            .set_armor(slot, SlottedItem::new(armor.id.clone(), armor.name.clone())))
    }

    /// Takes off the armor in `slot` and puts it in the backpack.
    ///
    /// # Errors
    ///
    /// Returns `SlotEmpty`, or the backpack error; the slot is untouched on error.
    pub fn remove_armor(&mut self, slot: ArmorSlot, registry: &Registry) -> InventoryResult<SlottedItem> {
        let worn = self
            .equipment
            .armor(slot)
            .ok_or_else(|| InventoryError::SlotEmpty(slot.label().to_string()))?;

        let item_id = registry
            .item_by_armor_ref(&worn.item_def_id)
            .map_or_else(|| worn.item_def_id.clone(), |def| def.id.clone());
        self.backpack.add(&item_id, 1, registry)?;

        debug!(item = %item_id, slot = slot.id(), "remove armor");
        self.equipment
            .clear_armor(slot)
            .ok_or_else(|| InventoryError::SlotEmpty(slot.label().to_string()))
    }

    /// Wears one unit of an accessory from the backpack.
    ///
    /// # Errors
    ///
    /// As [`PlayerKit::wear_armor`], without the slot restriction.
    pub fn wear_accessory(
        &mut self,
        item_id: &str,
        slot: AccessorySlot,
        registry: &Registry,
    ) -> InventoryResult<Option<SlottedItem>> {
        let instance = self.first_instance(item_id)?;
        let item = resolve_item(item_id, ItemKind::Accessory, registry)?;

        let snapshot = self.backpack.snapshot();
        self.backpack.remove(&instance.instance_id, 1)?;
        if let Some(prior) = self.equipment.accessory(slot) {
            if let Err(e) = self.backpack.add(&prior.item_def_id, 1, registry) {
                warn!(item = item_id, slot = slot.id(), error = %e, "wear rolled back");
                self.backpack.restore(&snapshot);
                return Err(e);
            }
        }

        debug!(item = item_id, slot = slot.id(), "wear accessory");
        Ok(self
            .equipment
            .set_accessory(slot, SlottedItem::new(item.id.clone(), item.name.clone())))
    }

    /// Takes off the accessory in `slot` and puts it in the backpack.
    ///
    /// # Errors
    ///
    /// Returns `SlotEmpty`, or the backpack error; the slot is untouched on error.
    pub fn remove_accessory(
        &mut self,
        slot: AccessorySlot,
        registry: &Registry,
    ) -> InventoryResult<SlottedItem> {
        let worn = self
            .equipment
            .accessory(slot)
            .ok_or_else(|| InventoryError::SlotEmpty(slot.label().to_string()))?;
        self.backpack.add(&worn.item_def_id, 1, registry)?;

        debug!(slot = slot.id(), "remove accessory");
        self.equipment
            .clear_accessory(slot)
            .ok_or_else(|| InventoryError::SlotEmpty(slot.label().to_string()))
    }

    /// Moves one unit of a weapon item from the backpack into a hand of the
    /// active preset.
    ///
    /// Displaced weapons are returned, not stowed; pass them to
    /// [`PlayerKit::stow_weapon`] or drop them.
    ///
    /// # Errors
    ///
    /// Returns `NotInBackpack`, `UnknownItem`, `WrongItemKind`,
    /// `MissingDefinition`, `Content(Validation)` or `OffHandBlocked`. Hand
    /// rules are checked before the backpack is touched.
    pub fn equip_weapon(&mut self, item_id: &str, hand: Hand, registry: &Registry) -> InventoryResult<Displaced> {
        let instance = self.first_instance(item_id)?;
        let item = resolve_item(item_id, ItemKind::Weapon, registry)?;
        let weapon = resolve_weapon(&item, registry)?;

        weapon.validate()?;
        if hand == Hand::Off {
            self.active_preset()?.check_off_hand(&weapon)?;
        }

        let snapshot = self.backpack.snapshot();
        self.backpack.remove(&instance.instance_id, 1)?;

        let equipped = self.active_preset_mut().and_then(|preset| match hand {
            Hand::Main => preset.equip_main_hand(weapon),
            Hand::Off => preset.equip_off_hand(weapon).map(|off_hand| Displaced {
                main_hand: None,
                off_hand,
            }),
        });

        if equipped.is_err() {
            warn!(item = item_id, hand = %hand, "equip rolled back");
            self.backpack.restore(&snapshot);
        }
        equipped
    }

    /// Empties a hand of the active preset.
    pub fn unequip_weapon(&mut self, hand: Hand) -> Option<EquippedWeapon> {
        self.loadout.active_preset_mut()?.unequip(hand)
    }

    /// Puts a weapon back into the backpack as one unit of its item.
    ///
    /// # Errors
    ///
    /// Returns `MissingDefinition` if no item wraps the weapon, or the backpack error.
    pub fn stow_weapon(&mut self, weapon: &EquippedWeapon, registry: &Registry) -> InventoryResult<ItemInstance> {
        let item = registry
            .item_by_weapon_ref(&weapon.def.id)
            .ok_or_else(|| InventoryError::MissingDefinition {
                kind: "item",
                id: weapon.def.id.clone(),
            })?;
        self.backpack.add(&item.id, 1, registry)
    }

    /// Moves a whole backpack instance onto a room's floor.
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotFound`.
    pub fn drop_item(&mut self, instance_id: &str, room_id: &str, floor: &FloorManager) -> InventoryResult<ItemInstance> {
        let item = self.backpack.take(instance_id)?;
        floor.drop_item(room_id, item.clone());
        Ok(item)
    }

    /// Moves an item from a room's floor into the backpack.
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotFound` or the backpack error. The floor is
    /// unchanged on error.
    pub fn pick_up(
        &mut self,
        instance_id: &str,
        room_id: &str,
        floor: &FloorManager,
        registry: &Registry,
    ) -> InventoryResult<ItemInstance> {
        let not_found = || InventoryError::InstanceNotFound(instance_id.to_string());

        let item = floor.find(room_id, instance_id).ok_or_else(not_found)?;
        self.backpack.can_add(&item.item_def_id, item.quantity, registry)?;

        let (index, item) = floor.take_at(room_id, instance_id).ok_or_else(not_found)?;
        match self.backpack.add(&item.item_def_id, item.quantity, registry) {
            Ok(added) => Ok(added),
            Err(e) => {
                warn!(room = room_id, instance = instance_id, error = %e, "pickup rolled back");
                floor.put_back(room_id, index, item);
                Err(e)
            }
        }
    }

    /// Grants a starting kit: currency, consumables, a main-hand weapon and
    /// worn armor.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the kit is left exactly as it was.
    pub fn apply_starting_loadout(&mut self, start: &StartingLoadout, registry: &Registry) -> InventoryResult<()> {
        let before = self.clone();
        let result = self.grant(start, registry);
        if let Err(e) = &result {
            warn!(error = %e, "starting loadout rolled back");
            *self = before;
        }
        result
    }

    fn grant(&mut self, start: &StartingLoadout, registry: &Registry) -> InventoryResult<()> {
        self.currency = self.currency.saturating_add(start.currency);

        for grant in &start.consumables {
            self.backpack.add(&grant.item_id, grant.quantity, registry)?;
        }

        if let Some(weapon_item) = &start.weapon {
            self.backpack.add(weapon_item, 1, registry)?;
            let displaced = self.equip_weapon(weapon_item, Hand::Main, registry)?;
            for weapon in displaced.into_weapons() {
                self.stow_weapon(&weapon, registry)?;
            }
        }

        for (slot, armor_item) in &start.armor {
            self.backpack.add(armor_item, 1, registry)?;
            self.wear_armor(armor_item, *slot, registry)?;
        }

        debug!(currency = self.currency, slots = self.backpack.used_slots(), "starting loadout applied");
        Ok(())
    }

    fn first_instance(&self, item_id: &str) -> InventoryResult<ItemInstance> {
        self.backpack
            .find_by_item_def_id(item_id)
            .into_iter()
            .next()
            .ok_or_else(|| InventoryError::NotInBackpack(item_id.to_string()))
    }

    fn active_preset(&self) -> InventoryResult<&WeaponPreset> {
        self.loadout.active_preset().ok_or(InventoryError::IndexOutOfRange {
            index: self.loadout.active(),
            len: self.loadout.len(),
        })
    }

    fn active_preset_mut(&mut self) -> InventoryResult<&mut WeaponPreset> {
        let (index, len) = (self.loadout.active(), self.loadout.len());
        self.loadout
            .active_preset_mut()
            .ok_or(InventoryError::IndexOutOfRange { index, len })
    }
}

impl Default for PlayerKit {
    fn default() -> Self {
        Self::new(&InventoryConfig::default())
    }
}

fn resolve_item(item_id: &str, expected: ItemKind, registry: &Registry) -> InventoryResult<Arc<ItemDef>> {
    let item = registry
        .item(item_id)
        .ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;
    if item.kind != expected {
        return Err(InventoryError::WrongItemKind {
            item_id: item_id.to_string(),
            expected,
        });
    }
    Ok(item)
}

fn resolve_armor(item: &ItemDef, registry: &Registry) -> InventoryResult<Arc<ArmorDef>> {
    let armor_id = item.armor_ref.as_deref().unwrap_or_default();
    registry
        .armor(armor_id)
        .ok_or_else(|| InventoryError::MissingDefinition {
            kind: "armor",
            id: armor_id.to_string(),
        })
}

fn resolve_weapon(item: &ItemDef, registry: &Registry) -> InventoryResult<Arc<WeaponDef>> {
    let weapon_id = item.weapon_ref.as_deref().unwrap_or_default();
    registry
        .weapon(weapon_id)
        .ok_or_else(|| InventoryError::MissingDefinition {
            kind: "weapon",
            id: weapon_id.to_string(),
        })
}
