//! # Definition Registry
//!
//! Every definition the server knows about, indexed by id. Definitions are
//! validated on registration and shared as `Arc`s afterwards; the registry is
//! read-only once content loading finishes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::armor::ArmorDef;
use crate::error::{ContentError, ContentResult};
use crate::explosive::ExplosiveDef;
use crate::item::ItemDef;
use crate::weapon::WeaponDef;

/// All loaded content definitions indexed by id.
#[derive(Debug, Default)]
pub struct Registry {
    items: HashMap<String, Arc<ItemDef>>,
    weapons: HashMap<String, Arc<WeaponDef>>,
    armors: HashMap<String, Arc<ArmorDef>>,
    explosives: HashMap<String, Arc<ExplosiveDef>>,
    /// Armor def id -> first item registered with that `armor_ref`.
    items_by_armor: HashMap<String, String>,
    /// Weapon def id -> first item registered with that `weapon_ref`.
    items_by_weapon: HashMap<String, String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers an item definition.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed def, `DuplicateId` if the id is taken.
    pub fn register_item(&mut self, def: ItemDef) -> ContentResult<()> {
        def.validate()?;
        if self.items.contains_key(&def.id) {
            return Err(ContentError::DuplicateId {
                kind: "item",
                id: def.id,
            });
        }

        if let Some(armor_id) = &def.armor_ref {
            self.items_by_armor
                .entry(armor_id.clone())
                .or_insert_with(|| def.id.clone());
        }
        if let Some(weapon_id) = &def.weapon_ref {
            self.items_by_weapon
                .entry(weapon_id.clone())
                .or_insert_with(|| def.id.clone());
        }

        self.items.insert(def.id.clone(), Arc::new(def));
        Ok(())
    }

    /// Validates and registers a weapon definition.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed def, `DuplicateId` if the id is taken.
    pub fn register_weapon(&mut self, def: WeaponDef) -> ContentResult<()> {
        def.validate()?;
        if self.weapons.contains_key(&def.id) {
            return Err(ContentError::DuplicateId {
                kind: "weapon",
                id: def.id,
            });
        }
        self.weapons.insert(def.id.clone(), Arc::new(def));
        Ok(())
    }

    /// Validates and registers an armor definition.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed def, `DuplicateId` if the id is taken.
    pub fn register_armor(&mut self, def: ArmorDef) -> ContentResult<()> {
        def.validate()?;
        if self.armors.contains_key(&def.id) {
            return Err(ContentError::DuplicateId {
                kind: "armor",
                id: def.id,
            });
        }
        self.armors.insert(def.id.clone(), Arc::new(def));
        Ok(())
    }

    /// Validates and registers an explosive definition.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed def, `DuplicateId` if the id is taken.
    pub fn register_explosive(&mut self, def: ExplosiveDef) -> ContentResult<()> {
        def.validate()?;
        if self.explosives.contains_key(&def.id) {
            return Err(ContentError::DuplicateId {
                kind: "explosive",
                id: def.id,
            });
        }
        self.explosives.insert(def.id.clone(), Arc::new(def));
        Ok(())
    }

    /// Looks up an item definition.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<Arc<ItemDef>> {
        self.items.get(id).cloned()
    }

    /// Looks up a weapon definition.
    #[must_use]
    pub fn weapon(&self, id: &str) -> Option<Arc<WeaponDef>> {
        self.weapons.get(id).cloned()
    }

    /// Looks up an armor definition.
    #[must_use]
    pub fn armor(&self, id: &str) -> Option<Arc<ArmorDef>> {
        self.armors.get(id).cloned()
    }

    /// Looks up an explosive definition.
    #[must_use]
    pub fn explosive(&self, id: &str) -> Option<Arc<ExplosiveDef>> {
        self.explosives.get(id).cloned()
    }

    /// Finds the item whose `armor_ref` is `armor_id`.
    #[must_use]
    pub fn item_by_armor_ref(&self, armor_id: &str) -> Option<Arc<ItemDef>> {
        self.items_by_armor
            .get(armor_id)
            .and_then(|item_id| self.item(item_id))
    }

    /// Finds the item whose `weapon_ref` is `weapon_id`.
    #[must_use]
    pub fn item_by_weapon_ref(&self, weapon_id: &str) -> Option<Arc<ItemDef>> {
        self.items_by_weapon
            .get(weapon_id)
            .and_then(|item_id| self.item(item_id))
    }

    /// All weapons, sorted by id.
    #[must_use]
    pub fn all_weapons(&self) -> Vec<Arc<WeaponDef>> {
        let mut out: Vec<_> = self.weapons.values().cloned().collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// All armor pieces, sorted by id.
    #[must_use]
    pub fn all_armors(&self) -> Vec<Arc<ArmorDef>> {
        let mut out: Vec<_> = self.armors.values().cloned().collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Number of registered item definitions.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks that every item reference points at a registered definition.
    ///
    /// # Errors
    ///
    /// Returns the first `DanglingReference` found, in item id order.
    pub fn verify_references(&self) -> ContentResult<()> {
        let mut ids: Vec<&String> = self.items.keys().collect();
        ids.sort();

        for id in ids {
            let item = &self.items[id];
            let dangling = [
                ("weapon", item.weapon_ref.as_deref().filter(|r| !self.weapons.contains_key(*r))),
                ("armor", item.armor_ref.as_deref().filter(|r| !self.armors.contains_key(*r))),
                (
                    "explosive",
                    item.explosive_ref.as_deref().filter(|r| !self.explosives.contains_key(*r)),
                ),
            ];
            if let Some((kind, reference)) = dangling
                .into_iter()
                .find_map(|(kind, reference)| reference.map(|r| (kind, r)))
            {
                return Err(ContentError::DanglingReference {
                    item_id: item.id.clone(),
                    kind,
                    reference: reference.to_string(),
                });
            }
        }
        Ok(())
    }
}
