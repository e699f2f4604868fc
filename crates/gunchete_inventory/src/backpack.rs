//! # Backpack
//!
//! A slot- and weight-bounded item container.
//!
//! ## Stacking
//!
//! Stackable units first top up the FIRST under-full stack of the same item,
//! and only that one. Whatever is left opens new stacks of up to `max_stack`
//! units each. Non-stackable units take one slot per unit.
//!
//! ## Atomicity
//!
//! Every check runs against a plan before anything is touched. A failed call
//! leaves the backpack exactly as it was: same instances, same order, same
//! quantities.

use gunchete_content::{ItemDef, Registry};
use tracing::debug;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};

/// A concrete stack of units owned by a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemInstance {
    /// Unique instance id (UUID v4).
    pub instance_id: String,
    /// The item definition id.
    pub item_def_id: String,
    /// Units in this stack.
    pub quantity: u32,
}

impl ItemInstance {
    /// Creates an instance with a fresh id.
    #[must_use]
    pub fn new(item_def_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            item_def_id: item_def_id.into(),
            quantity,
        }
    }
}

/// What an add will do, computed before any mutation.
#[derive(Debug)]
struct AddPlan {
    /// Index of the stack to top up and how many units it takes.
    merge: Option<(usize, u32)>,
    /// Quantities of the stacks to open.
    new_stacks: Vec<u32>,
}

/// A character's carried items.
#[derive(Clone, Debug)]
pub struct Backpack {
    max_slots: usize,
    max_weight: f64,
    items: Vec<ItemInstance>,
}

impl Backpack {
    /// Creates an empty backpack.
    ///
    /// # Arguments
    ///
    /// * `max_slots` - Number of stacks the backpack can hold
    /// * `max_weight` - Total carried weight limit
    #[must_use]
    pub fn new(max_slots: usize, max_weight: f64) -> Self {
        Self {
            max_slots,
            max_weight,
            items: Vec::new(),
        }
    }

    /// Slot limit.
    #[inline]
    #[must_use]
    pub const fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Weight limit.
    #[inline]
    #[must_use]
    pub const fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Number of occupied slots.
    #[inline]
    #[must_use]
    pub fn used_slots(&self) -> usize {
        self.items.len()
    }

    /// Free slots.
    #[inline]
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.max_slots.saturating_sub(self.items.len())
    }

    /// Total carried weight. Items whose definition is missing weigh nothing.
    #[must_use]
    pub fn total_weight(&self, registry: &Registry) -> f64 {
        self.items
            .iter()
            .filter_map(|inst| {
                registry
                    .item(&inst.item_def_id)
                    .map(|def| def.weight * f64::from(inst.quantity))
            })
            .sum()
    }

    /// Copy of every instance, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<ItemInstance> {
        self.items.clone()
    }

    /// Copy of one instance.
    #[must_use]
    pub fn get(&self, instance_id: &str) -> Option<ItemInstance> {
        self.items
            .iter()
            .find(|inst| inst.instance_id == instance_id)
            .cloned()
    }

    /// Copies of every instance of an item definition.
    #[must_use]
    pub fn find_by_item_def_id(&self, item_def_id: &str) -> Vec<ItemInstance> {
        self.items
            .iter()
            .filter(|inst| inst.item_def_id == item_def_id)
            .cloned()
            .collect()
    }

    /// Total units of an item definition across all stacks.
    #[must_use]
    pub fn count_item(&self, item_def_id: &str) -> u32 {
        self.items
            .iter()
            .filter(|inst| inst.item_def_id == item_def_id)
            .map(|inst| inst.quantity)
            .sum()
    }

    /// Checks whether `quantity` units of `item_id` would fit, without adding them.
    ///
    /// # Errors
    ///
    /// Returns the same error `add` would.
    pub fn can_add(&self, item_id: &str, quantity: u32, registry: &Registry) -> InventoryResult<()> {
        let def = Self::resolve(item_id, quantity, registry)?;
        self.plan_add(&def, quantity, registry).map(|_| ())
    }

    /// Adds `quantity` units of `item_id`.
    ///
    /// Returns a copy of the last instance touched: the last stack opened, or
    /// the merge target when no stack was opened.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity`, `UnknownItem`, `WeightExceeded` or
    /// `SlotsExceeded`. The backpack is unchanged on error.
    pub fn add(
        &mut self,
        item_id: &str,
        quantity: u32,
        registry: &Registry,
    ) -> InventoryResult<ItemInstance> {
        let def = Self::resolve(item_id, quantity, registry)?;
        let plan = self.plan_add(&def, quantity, registry)?;

        let mut touched = None;
        if let Some((index, units)) = plan.merge {
            let target = &mut self.items[index];
            target.quantity += units;
            touched = Some(index);
        }
        for units in plan.new_stacks {
            self.items.push(ItemInstance::new(def.id.clone(), units));
            touched = Some(self.items.len() - 1);
        }

        debug!(item = item_id, quantity, slots = self.items.len(), "backpack add");

        // A valid plan always touches at least one instance
        touched
            .map(|index| self.items[index].clone())
            .ok_or(InventoryError::InvalidQuantity(quantity))
    }

    /// Removes `quantity` units from one instance. Removing all of them
    /// deletes the instance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity`, `InstanceNotFound` or `InsufficientQuantity`.
    pub fn remove(&mut self, instance_id: &str, quantity: u32) -> InventoryResult<()> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let index = self.position(instance_id)?;
        let inst = &mut self.items[index];

        if quantity > inst.quantity {
            return Err(InventoryError::InsufficientQuantity {
                instance_id: instance_id.to_string(),
                requested: quantity,
                available: inst.quantity,
            });
        }

        if quantity == inst.quantity {
            self.items.remove(index);
        } else {
            inst.quantity -= quantity;
        }
        debug!(instance = instance_id, quantity, "backpack remove");
        Ok(())
    }

    /// Removes a whole instance and returns it with its identity intact.
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotFound`.
    pub fn take(&mut self, instance_id: &str) -> InventoryResult<ItemInstance> {
        let index = self.position(instance_id)?;
        Ok(self.items.remove(index))
    }

    /// Captures the full contents for rollback.
    #[must_use]
    pub fn snapshot(&self) -> BackpackSnapshot {
        BackpackSnapshot {
            items: self.items.clone(),
        }
    }

    /// Restores contents captured by [`Backpack::snapshot`].
    pub fn restore(&mut self, snapshot: &BackpackSnapshot) {
        self.items.clone_from(&snapshot.items);
    }

    fn position(&self, instance_id: &str) -> InventoryResult<usize> {
        self.items
            .iter()
            .position(|inst| inst.instance_id == instance_id)
            .ok_or_else(|| InventoryError::InstanceNotFound(instance_id.to_string()))
    }

    fn resolve(
        item_id: &str,
        quantity: u32,
        registry: &Registry,
    ) -> InventoryResult<std::sync::Arc<ItemDef>> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        registry
            .item(item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))
    }

    fn plan_add(&self, def: &ItemDef, quantity: u32, registry: &Registry) -> InventoryResult<AddPlan> {
        let current = self.total_weight(registry);
        let added = def.weight * f64::from(quantity);
        if current + added > self.max_weight {
            return Err(InventoryError::WeightExceeded {
                current,
                added,
                max: self.max_weight,
            });
        }

        let mut plan = AddPlan {
            merge: None,
            new_stacks: Vec::new(),
        };

        let max_stack = if def.stackable { def.max_stack.max(1) } else { 1 };
        let mut leftover = quantity;
        if def.stackable {
            if let Some(index) = self
                .items
                .iter()
                .position(|inst| inst.item_def_id == def.id && inst.quantity < max_stack)
            {
                let merged = (max_stack - self.items[index].quantity).min(leftover);
                plan.merge = Some((index, merged));
                leftover -= merged;
            }
        }

        let needed = usize::try_from(leftover.div_ceil(max_stack)).unwrap_or(usize::MAX);
        let available = self.free_slots();
        if needed > available {
            return Err(InventoryError::SlotsExceeded { needed, available });
        }

        while leftover > 0 {
            let units = leftover.min(max_stack);
            plan.new_stacks.push(units);
            leftover -= units;
        }
        Ok(plan)
    }
}

/// Backpack contents captured for transactional rollback.
#[derive(Clone, Debug)]
pub struct BackpackSnapshot {
    items: Vec<ItemInstance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunchete_content::ItemKind;

    fn create_test_registry() -> Registry {
        let mut reg = Registry::new();
        reg.register_item(ItemDef::new("ammo", "Ammo", ItemKind::Consumable, 0.1).stackable(50))
            .unwrap();
        reg.register_item(ItemDef::new("brick", "Brick", ItemKind::Junk, 10.0))
            .unwrap();
        reg.register_item(ItemDef::new("scrap", "Scrap", ItemKind::Junk, 1.0))
            .unwrap();
        reg
    }

    #[test]
    fn test_stack_merge_scenario() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(20, 100.0);

        let first = pack.add("ammo", 10, &reg).unwrap();
        assert_eq!(pack.used_slots(), 1);
        assert!((pack.total_weight(&reg) - 1.0).abs() < 1e-9);

        let merged = pack.add("ammo", 5, &reg).unwrap();
        assert_eq!(merged.instance_id, first.instance_id);
        assert_eq!(merged.quantity, 15);
        assert_eq!(pack.used_slots(), 1);
    }

    #[test]
    fn test_merge_overflow_opens_new_stack() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(20, 100.0);

        let first = pack.add("ammo", 45, &reg).unwrap();
        let last = pack.add("ammo", 10, &reg).unwrap();

        let items = pack.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].instance_id, first.instance_id);
        assert_eq!(items[0].quantity, 50);
        assert_eq!(items[1].quantity, 5);
        assert_eq!(last.instance_id, items[1].instance_id);
        assert_eq!(pack.count_item("ammo"), 55);
    }

    #[test]
    fn test_merge_only_into_first_underfull_stack() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(20, 100.0);

        // Two partial stacks: 50+10, then remove to leave 40 and 10
        pack.add("ammo", 60, &reg).unwrap();
        let first_id = pack.items()[0].instance_id.clone();
        pack.remove(&first_id, 10).unwrap();

        pack.add("ammo", 15, &reg).unwrap();
        let quantities: Vec<u32> = pack.items().iter().map(|i| i.quantity).collect();
        // First stack topped up to 50, leftover 5 opens a new stack, second stack untouched
        assert_eq!(quantities, vec![50, 10, 5]);
        assert_eq!(pack.count_item("ammo"), 65);
    }

    #[test]
    fn test_large_add_splits_into_stacks() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(20, 100.0);

        pack.add("ammo", 120, &reg).unwrap();
        let quantities: Vec<u32> = pack.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![50, 50, 20]);
    }

    #[test]
    fn test_non_stackable_one_slot_each() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(3, 100.0);

        pack.add("scrap", 3, &reg).unwrap();
        assert_eq!(pack.used_slots(), 3);
        assert!(pack.items().iter().all(|i| i.quantity == 1));

        let result = pack.add("scrap", 1, &reg);
        assert_eq!(result, Err(InventoryError::SlotsExceeded { needed: 1, available: 0 }));
    }

    #[test]
    fn test_slot_overflow_is_atomic() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(2, 100.0);
        pack.add("ammo", 40, &reg).unwrap();
        let before = pack.items();

        // 10 merge + 100 leftover needs 2 new slots, only 1 free
        let result = pack.add("ammo", 110, &reg);
        assert_eq!(result, Err(InventoryError::SlotsExceeded { needed: 2, available: 1 }));
        assert_eq!(pack.items(), before);
    }

    #[test]
    fn test_weight_checked_first() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(1, 25.0);
        pack.add("brick", 1, &reg).unwrap();

        // Both slots and weight would fail; weight is reported
        let result = pack.add("brick", 2, &reg);
        assert!(matches!(result, Err(InventoryError::WeightExceeded { .. })));
        assert_eq!(pack.used_slots(), 1);
    }

    #[test]
    fn test_exact_weight_fits() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        pack.add("brick", 2, &reg).unwrap();
        assert!(pack.can_add("scrap", 1, &reg).is_err());
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        assert_eq!(pack.add("ammo", 0, &reg), Err(InventoryError::InvalidQuantity(0)));
        assert_eq!(
            pack.add("unobtainium", 1, &reg),
            Err(InventoryError::UnknownItem("unobtainium".to_string()))
        );
        assert_eq!(pack.used_slots(), 0);
    }

    #[test]
    fn test_remove_partial_and_exact() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        let inst = pack.add("ammo", 10, &reg).unwrap();

        pack.remove(&inst.instance_id, 4).unwrap();
        assert_eq!(pack.get(&inst.instance_id).unwrap().quantity, 6);

        assert_eq!(
            pack.remove(&inst.instance_id, 7),
            Err(InventoryError::InsufficientQuantity {
                instance_id: inst.instance_id.clone(),
                requested: 7,
                available: 6,
            })
        );
        assert_eq!(pack.remove(&inst.instance_id, 0), Err(InventoryError::InvalidQuantity(0)));

        pack.remove(&inst.instance_id, 6).unwrap();
        assert!(pack.get(&inst.instance_id).is_none());
        assert_eq!(pack.used_slots(), 0);

        assert!(matches!(
            pack.remove(&inst.instance_id, 1),
            Err(InventoryError::InstanceNotFound(_))
        ));
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        pack.add("ammo", 20, &reg).unwrap();
        let slots = pack.used_slots();
        let weight = pack.total_weight(&reg);

        let inst = pack.add("ammo", 7, &reg).unwrap();
        pack.remove(&inst.instance_id, 7).unwrap();

        assert_eq!(pack.used_slots(), slots);
        assert!((pack.total_weight(&reg) - weight).abs() < 1e-9);
    }

    #[test]
    fn test_take_keeps_identity() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        let inst = pack.add("ammo", 12, &reg).unwrap();

        let taken = pack.take(&inst.instance_id).unwrap();
        assert_eq!(taken, inst);
        assert_eq!(pack.used_slots(), 0);
    }

    #[test]
    fn test_snapshot_restore() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        pack.add("ammo", 12, &reg).unwrap();
        let snapshot = pack.snapshot();
        let before = pack.items();

        pack.add("scrap", 2, &reg).unwrap();
        assert_eq!(pack.used_slots(), 3);

        pack.restore(&snapshot);
        assert_eq!(pack.items(), before);
    }

    #[test]
    fn test_find_by_item_def_id() {
        let reg = create_test_registry();
        let mut pack = Backpack::new(5, 20.0);
        pack.add("scrap", 2, &reg).unwrap();
        pack.add("ammo", 1, &reg).unwrap();

        assert_eq!(pack.find_by_item_def_id("scrap").len(), 2);
        assert_eq!(pack.find_by_item_def_id("ammo").len(), 1);
        assert!(pack.find_by_item_def_id("brick").is_empty());
    }
}
