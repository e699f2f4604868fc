//! # Loadout Sets
//!
//! An ordered set of [`WeaponPreset`]s with one active preset. Switching to a
//! different preset is allowed once per combat round; `reset_round` restores
//! the budget.

use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::preset::WeaponPreset;

/// Number of presets a new character gets.
pub const DEFAULT_PRESETS: usize = 2;

/// What a successful swap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The requested preset was already active; the round budget is untouched.
    AlreadyActive,
    /// The active preset changed.
    Switched {
        /// Previously active index.
        from: usize,
        /// Newly active index.
        to: usize,
    },
}

/// A character's weapon presets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadoutSet {
    presets: Vec<WeaponPreset>,
    active: usize,
    swapped_this_round: bool,
}

impl LoadoutSet {
    /// Creates a set with [`DEFAULT_PRESETS`] empty presets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_presets(DEFAULT_PRESETS)
    }

    /// Creates a set with `count` empty presets.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    pub fn with_presets(count: usize) -> Self {
        assert!(count > 0, "a loadout needs at least one preset");
        Self {
            presets: vec![WeaponPreset::new(); count],
            active: 0,
            swapped_this_round: false,
        }
    }

    /// Index of the active preset.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Whether a swap has been spent this round.
    #[inline]
    #[must_use]
    pub const fn swapped_this_round(&self) -> bool {
        self.swapped_this_round
    }

    /// Number of presets.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false; a loadout has at least one preset.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// All presets in order.
    #[must_use]
    pub fn presets(&self) -> &[WeaponPreset] {
        &self.presets
    }

    /// One preset by index.
    #[must_use]
    pub fn preset(&self, index: usize) -> Option<&WeaponPreset> {
        self.presets.get(index)
    }

    /// One preset by index, mutably.
    pub fn preset_mut(&mut self, index: usize) -> Option<&mut WeaponPreset> {
        self.presets.get_mut(index)
    }

    /// The active preset.
    #[must_use]
    pub fn active_preset(&self) -> Option<&WeaponPreset> {
        self.presets.get(self.active)
    }

    /// The active preset, mutably.
    pub fn active_preset_mut(&mut self) -> Option<&mut WeaponPreset> {
        self.presets.get_mut(self.active)
    }

    /// Makes preset `index` active.
    ///
    /// Swapping to the already-active preset succeeds without spending the
    /// round budget.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` or `AlreadySwapped`. Nothing changes on error.
    pub fn swap(&mut self, index: usize) -> InventoryResult<SwapOutcome> {
        let len = self.presets.len();
        if index >= len {
            return Err(InventoryError::IndexOutOfRange { index, len });
        }
        if self.swapped_this_round {
            return Err(InventoryError::AlreadySwapped);
        }
        if index == self.active {
            return Ok(SwapOutcome::AlreadyActive);
        }

        let from = self.active;
        self.active = index;
        self.swapped_this_round = true;
        debug!(from, to = index, "loadout swap");
        Ok(SwapOutcome::Switched { from, to: index })
    }

    /// Restores the swap budget at the start of a round.
    pub fn reset_round(&mut self) {
        self.swapped_this_round = false;
    }
}

impl Default for LoadoutSet {
    fn default() -> Self {
        Self::new()
    }
}
