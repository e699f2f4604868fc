//! # Floor Manager
//!
//! Items lying on the floor of each room. This is the only inventory state
//! shared between player sessions: share one manager via `Arc` and call it
//! from any thread. One lock guards the whole table.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::backpack::ItemInstance;

/// Per-room floor contents, in drop order.
#[derive(Debug, Default)]
pub struct FloorManager {
    rooms: RwLock<HashMap<String, Vec<ItemInstance>>>,
}

impl FloorManager {
    /// Creates a manager with empty floors everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts an item on a room's floor.
    pub fn drop_item(&self, room_id: &str, item: ItemInstance) {
        debug!(room = room_id, instance = %item.instance_id, "floor drop");
        self.rooms
            .write()
            .entry(room_id.to_string())
            .or_default()
            .push(item);
    }

    /// Removes one item from a room's floor.
    ///
    /// Returns `None` and changes nothing if the item is not there.
    pub fn pickup(&self, room_id: &str, instance_id: &str) -> Option<ItemInstance> {
        self.take_at(room_id, instance_id).map(|(_, item)| item)
    }

    /// Removes and returns everything on a room's floor.
    pub fn pickup_all(&self, room_id: &str) -> Vec<ItemInstance> {
        self.rooms.write().remove(room_id).unwrap_or_default()
    }

    /// Copy of a room's floor.
    #[must_use]
    pub fn items_in_room(&self, room_id: &str) -> Vec<ItemInstance> {
        self.rooms.read().get(room_id).cloned().unwrap_or_default()
    }

    /// Copy of one item on a room's floor.
    #[must_use]
    pub fn find(&self, room_id: &str, instance_id: &str) -> Option<ItemInstance> {
        self.rooms
            .read()
            .get(room_id)?
            .iter()
            .find(|item| item.instance_id == instance_id)
            .cloned()
    }

    /// Number of rooms with at least one item on the floor.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.read().len()
    }

    /// Removes an item and reports where it was, so a failed transfer can
    /// put it back in place.
    pub(crate) fn take_at(&self, room_id: &str, instance_id: &str) -> Option<(usize, ItemInstance)> {
        let mut rooms = self.rooms.write();
        let items = rooms.get_mut(room_id)?;
        let index = items.iter().position(|item| item.instance_id == instance_id)?;
        let item = items.remove(index);
        if items.is_empty() {
            rooms.remove(room_id);
        }
        debug!(room = room_id, instance = instance_id, "floor pickup");
        Some((index, item))
    }

    /// Reinserts an item at its old position (or the end if the floor shrank).
    pub(crate) fn put_back(&self, room_id: &str, index: usize, item: ItemInstance) {
        let mut rooms = self.rooms.write();
        let items = rooms.entry(room_id.to_string()).or_default();
        let index = index.min(items.len());
        items.insert(index, item);
    }
}
