//! # Ammunition Currency
//!
//! Rounds are the base unit of money. Larger amounts are shown in clips and
//! crates.

use std::fmt;

/// Rounds in one clip.
pub const ROUNDS_PER_CLIP: u32 = 25;

/// Rounds in one crate (20 clips).
pub const ROUNDS_PER_CRATE: u32 = 500;

/// A round total split into display tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundsBreakdown {
    /// Whole crates.
    pub crates: u32,
    /// Whole clips left after crates, below 20.
    pub clips: u32,
    /// Loose rounds, below 25.
    pub rounds: u32,
}

impl RoundsBreakdown {
    /// Splits `total` rounds into crates, clips and loose rounds.
    #[must_use]
    pub const fn from_total(total: u32) -> Self {
        let remainder = total % ROUNDS_PER_CRATE;
        Self {
            crates: total / ROUNDS_PER_CRATE,
            clips: remainder / ROUNDS_PER_CLIP,
            rounds: remainder % ROUNDS_PER_CLIP,
        }
    }

    /// Recombines into a round total.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.crates * ROUNDS_PER_CRATE + self.clips * ROUNDS_PER_CLIP + self.rounds
    }
}

fn write_tier(f: &mut fmt::Formatter<'_>, count: u32, singular: &str) -> fmt::Result {
    let suffix = if count == 1 { "" } else { "s" };
    write!(f, "{count} {singular}{suffix}")
}

/// `2 Crates, 1 Clip, 3 Rounds`. Empty higher tiers are omitted; rounds always appear.
impl fmt::Display for RoundsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.crates > 0 {
            write_tier(f, self.crates, "Crate")?;
            f.write_str(", ")?;
        }
        if self.clips > 0 {
            write_tier(f, self.clips, "Clip")?;
            f.write_str(", ")?;
        }
        write_tier(f, self.rounds, "Round")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_total() {
        assert_eq!(
            RoundsBreakdown::from_total(1_078),
            RoundsBreakdown {
                crates: 2,
                clips: 3,
                rounds: 3
            }
        );
        assert_eq!(RoundsBreakdown::from_total(0), RoundsBreakdown::default());
    }

    #[test]
    fn test_round_trip_totals() {
        for total in [0, 1, 24, 25, 499, 500, 501, 12_345] {
            let breakdown = RoundsBreakdown::from_total(total);
            assert_eq!(breakdown.total(), total);
            assert!(breakdown.clips < 20);
            assert!(breakdown.rounds < ROUNDS_PER_CLIP);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundsBreakdown::from_total(0).to_string(), "0 Rounds");
        assert_eq!(RoundsBreakdown::from_total(1).to_string(), "1 Round");
        assert_eq!(RoundsBreakdown::from_total(26).to_string(), "1 Clip, 1 Round");
        assert_eq!(RoundsBreakdown::from_total(1_050).to_string(), "2 Crates, 2 Clips, 0 Rounds");
    }
}
