//! # Magazine
//!
//! Ammunition loaded into an equipped firearm.

use tracing::debug;

use crate::error::{InventoryError, InventoryResult};

/// Rounds loaded in a firearm. `loaded` never exceeds `capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Magazine {
    weapon_id: String,
    loaded: u32,
    capacity: u32,
}

impl Magazine {
    /// Creates a full magazine.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(weapon_id: impl Into<String>, capacity: u32) -> Self {
        assert!(capacity > 0, "magazine capacity must be > 0");
        Self {
            weapon_id: weapon_id.into(),
            loaded: capacity,
            capacity,
        }
    }

    /// Weapon this magazine belongs to.
    #[inline]
    #[must_use]
    pub fn weapon_id(&self) -> &str {
        &self.weapon_id
    }

    /// Rounds currently loaded.
    #[inline]
    #[must_use]
    pub const fn loaded(&self) -> u32 {
        self.loaded
    }

    /// Maximum rounds.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// True when no rounds remain.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.loaded == 0
    }

    /// Fires `rounds` rounds.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientAmmo` if fewer than `rounds` are loaded; nothing is consumed.
    ///
    /// # Panics
    ///
    /// Panics if `rounds` is zero.
    pub fn consume(&mut self, rounds: u32) -> InventoryResult<()> {
        assert!(rounds > 0, "must consume at least one round");
        if self.loaded < rounds {
            return Err(InventoryError::InsufficientAmmo {
                requested: rounds,
                loaded: self.loaded,
            });
        }
        self.loaded -= rounds;
        Ok(())
    }

    /// Refills to capacity.
    pub fn reload(&mut self) {
        debug!(weapon = %self.weapon_id, from = self.loaded, to = self.capacity, "reload");
        self.loaded = self.capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_is_full() {
        let mag = Magazine::new("pistol", 15);
        assert_eq!(mag.loaded(), 15);
        assert_eq!(mag.capacity(), 15);
        assert_eq!(mag.weapon_id(), "pistol");
        assert!(!mag.is_empty());
    }

    #[test]
    fn test_consume_and_reload() {
        let mut mag = Magazine::new("pistol", 5);
        mag.consume(3).unwrap();
        assert_eq!(mag.loaded(), 2);

        let result = mag.consume(3);
        assert_eq!(
            result,
            Err(InventoryError::InsufficientAmmo {
                requested: 3,
                loaded: 2
            })
        );
        assert_eq!(mag.loaded(), 2);

        mag.consume(2).unwrap();
        assert!(mag.is_empty());

        mag.reload();
        assert_eq!(mag.loaded(), 5);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn test_zero_capacity_panics() {
        let _ = Magazine::new("broken", 0);
    }

    #[test]
    #[should_panic(expected = "at least one round")]
    fn test_consume_zero_panics() {
        let mut mag = Magazine::new("pistol", 5);
        let _ = mag.consume(0);
    }

    #[test]
    fn test_loaded_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut mag = Magazine::new("smg", 30);

        for _ in 0..1_000 {
            if rng.gen_bool(0.1) {
                mag.reload();
            } else {
                let _ = mag.consume(rng.gen_range(1..=10));
            }
            assert!(mag.loaded() <= mag.capacity());
        }
    }
}
