//! # GUNCHETE Content
//!
//! Static game definitions for the GUNCHETE server: items, weapons, armor and
//! explosives, the slot universes they are worn in, and the registry that
//! serves them to the rest of the server.
//!
//! ## Design Principles
//!
//! 1. **Validated at the door** - A definition that reaches the registry has passed `validate`
//! 2. **Immutable after load** - Definitions are shared as `Arc` and never mutated
//! 3. **External configuration** - All content lives in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use gunchete_content::{load_starting_loadout, Registry, Team};
//!
//! let registry = Registry::load_dir("content")?;
//! let kit = load_starting_loadout("content/loadouts", "brawler", Some(Team::Machete), None)?;
//! let vest = registry.item_by_armor_ref("kevlar_vest");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod armor;
pub mod error;
pub mod explosive;
pub mod item;
pub mod loader;
pub mod registry;
pub mod slot;
pub mod starting;
pub mod weapon;

pub use armor::{ArmorDef, CrossTeamEffect};
pub use error::{ContentError, ContentResult};
pub use explosive::{AreaType, ExplosiveDef, FuseType};
pub use item::{ItemDef, ItemKind};
pub use registry::Registry;
pub use slot::{AccessorySlot, ArmorSlot};
pub use starting::{
    load_starting_loadout, ConsumableGrant, LoadoutBlock, StartingLoadout, StartingLoadoutOverride,
    Team,
};
pub use weapon::{FiringMode, WeaponDef, WeaponKind};
