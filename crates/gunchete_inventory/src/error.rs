//! # Inventory Error Types
//!
//! All errors that can occur in the inventory system. Every variant belongs to
//! one [`ErrorKind`] so command handlers can pick a response without matching
//! on each variant.

use gunchete_content::{ArmorSlot, ContentError, ItemKind};
use thiserror::Error;

/// Why an off-hand equip was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffHandConflict {
    /// The off-hand weapon itself needs both hands.
    TwoHandedWeapon,
    /// The main hand holds a two-handed weapon.
    MainHandTwoHanded,
}

/// Coarse error classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A definition or configuration is malformed.
    Validation,
    /// Slot or weight overflow.
    Capacity,
    /// Unknown id, instance, or empty slot.
    NotFound,
    /// The request breaks a game rule in the current state.
    StateConflict,
    /// The caller supplied a bad value.
    InvalidArgument,
}

/// Errors that can occur in the inventory system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// A content definition was rejected.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The item id is not registered.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// No item instance with this id is present.
    #[error("item instance not found: {0}")]
    InstanceNotFound(String),

    /// Quantity must be at least one.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Tried to remove more units than the instance holds.
    #[error("insufficient quantity in {instance_id}: requested {requested}, have {available}")]
    InsufficientQuantity {
        /// The instance.
        instance_id: String,
        /// Units requested.
        requested: u32,
        /// Units held.
        available: u32,
    },

    /// The add would exceed the weight limit.
    #[error("too heavy: carrying {current:.2}, adding {added:.2}, limit {max:.2}")]
    WeightExceeded {
        /// Weight carried before the call.
        current: f64,
        /// Weight the call would add.
        added: f64,
        /// Weight limit.
        max: f64,
    },

    /// The add needs more free slots than remain.
    #[error("not enough slots: need {needed}, have {available}")]
    SlotsExceeded {
        /// Slots the call needs.
        needed: usize,
        /// Free slots.
        available: usize,
    },

    /// The magazine holds fewer rounds than requested.
    #[error("insufficient ammo: requested {requested}, loaded {loaded}")]
    InsufficientAmmo {
        /// Rounds requested.
        requested: u32,
        /// Rounds loaded.
        loaded: u32,
    },

    /// The off hand cannot take this weapon right now.
    #[error("off hand blocked: {0:?}")]
    OffHandBlocked(OffHandConflict),

    /// A preset index outside the loadout.
    #[error("preset index {index} out of range (have {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of presets.
        len: usize,
    },

    /// The loadout was already swapped this round.
    #[error("loadout already swapped this round")]
    AlreadySwapped,

    /// The item is the wrong kind for this operation.
    #[error("{item_id} is not {}", .expected.id())]
    WrongItemKind {
        /// The offending item.
        item_id: String,
        /// The kind the operation needs.
        expected: ItemKind,
    },

    /// Armor worn in a slot it does not fit.
    #[error("{item_id} is worn on {}, not {}", .required.label(), .requested.label())]
    SlotMismatch {
        /// The armor item.
        item_id: String,
        /// Slot the armor fits.
        required: ArmorSlot,
        /// Slot that was requested.
        requested: ArmorSlot,
    },

    /// Nothing is equipped in the named slot.
    #[error("nothing equipped on {0}")]
    SlotEmpty(String),

    /// An item points at a definition the registry does not have.
    #[error("missing {kind} definition: {id}")]
    MissingDefinition {
        /// Definition family.
        kind: &'static str,
        /// The missing id.
        id: String,
    },

    /// The backpack holds no unit of this item.
    #[error("{0} is not in the backpack")]
    NotInBackpack(String),
}

impl InventoryError {
    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Content(ContentError::UnknownSlot(_) | ContentError::UnknownTeam(_))
            | Self::InvalidQuantity(_)
            | Self::InsufficientQuantity { .. }
            | Self::IndexOutOfRange { .. }
            | Self::WrongItemKind { .. }
            | Self::SlotMismatch { .. } => ErrorKind::InvalidArgument,
            Self::Content(_) | Self::InvalidConfig(_) => ErrorKind::Validation,
            Self::UnknownItem(_)
            | Self::InstanceNotFound(_)
            | Self::SlotEmpty(_)
            | Self::MissingDefinition { .. }
            | Self::NotInBackpack(_) => ErrorKind::NotFound,
            Self::WeightExceeded { .. } | Self::SlotsExceeded { .. } => ErrorKind::Capacity,
            Self::InsufficientAmmo { .. } | Self::OffHandBlocked(_) | Self::AlreadySwapped => {
                ErrorKind::StateConflict
            }
        }
    }
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
