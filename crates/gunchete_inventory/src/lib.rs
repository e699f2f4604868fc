//! # GUNCHETE Inventory
//!
//! What a character carries, wears and wields, and the rules that govern it.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing** - A failed operation leaves every container exactly as it was
//! 2. **Closed slot universes** - Armor and accessory slots are enums indexing fixed arrays
//! 3. **Displaced, not destroyed** - Equipping returns whatever it pushed out of a hand
//! 4. **External configuration** - Capacity limits live in TOML files
//!
//! ## Thread Safety
//!
//! Per-player state (`PlayerKit` and its parts) takes `&mut self` and is owned
//! by one session. `FloorManager` is the only shared component; wrap it in
//! an `Arc` and use it from any thread.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gunchete_inventory::{FloorManager, Hand, InventoryConfig, PlayerKit};
//!
//! let config = InventoryConfig::load("config/inventory.toml")?;
//! let mut kit = PlayerKit::new(&config);
//!
//! kit.backpack.add("rifle_item", 1, &registry)?;
//! let displaced = kit.equip_weapon("rifle_item", Hand::Main, &registry)?;
//! for weapon in displaced.into_weapons() {
//!     kit.stow_weapon(&weapon, &registry)?;
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod backpack;
pub mod config;
pub mod currency;
pub mod equipment;
pub mod error;
pub mod floor;
pub mod kit;
pub mod loadout;
pub mod magazine;
pub mod preset;

pub use backpack::{Backpack, BackpackSnapshot, ItemInstance};
pub use config::{BackpackConfig, InventoryConfig, LoadoutConfig};
pub use currency::{RoundsBreakdown, ROUNDS_PER_CLIP, ROUNDS_PER_CRATE};
pub use equipment::{DefenseStats, Equipment, SlottedItem};
pub use error::{ErrorKind, InventoryError, InventoryResult, OffHandConflict};
pub use floor::FloorManager;
pub use kit::PlayerKit;
pub use loadout::{LoadoutSet, SwapOutcome, DEFAULT_PRESETS};
pub use magazine::Magazine;
pub use preset::{Displaced, EquippedWeapon, Hand, WeaponPreset};
