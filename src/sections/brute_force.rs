//! Brute force section - keyspace size and exhaustive-search time estimate.

use std::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use super::variety::ClassUnits;

/// Guesses per minute the estimate assumes.
pub const GUESSES_PER_MINUTE: u64 = 2_000_000_000;

/// Per-position alphabet size implied by the classes present.
///
/// Each class contributes once, however many units it has.
pub fn keyspace_size(units: &ClassUnits) -> u32 {
    units.present().map(|class| class.alphabet_size()).sum()
}

/// Minutes needed to try `keyspace ^ length` candidates, truncated to
/// two decimal places.
///
/// Kept as an integer count of hundredths of a minute so the value stays
/// exact for arbitrarily long passwords.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BruteForceEstimate {
    centiminutes: BigUint,
}

impl BruteForceEstimate {
    /// `0 ^ 0` is taken as 1, so the empty password costs 1 guess.
    pub fn new(keyspace: u32, length: usize) -> Self {
        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        let candidates = BigUint::from(keyspace).pow(exponent);
        let centiminutes = candidates * 100u32 / BigUint::from(GUESSES_PER_MINUTE);
        Self { centiminutes }
    }

    pub fn centiminutes(&self) -> &BigUint {
        &self.centiminutes
    }

    /// True when the estimate is strictly below `minutes` whole minutes.
    pub fn is_below(&self, minutes: u64) -> bool {
        self.centiminutes < BigUint::from(minutes) * 100u32
    }

    /// Score multiplier for the estimate's bracket.
    pub fn multiplier(&self) -> f64 {
        if self.is_below(100) {
            0.5
        } else if self.is_below(1_000) {
            1.0
        } else if self.is_below(10_000) {
            1.5
        } else if self.is_below(100_000) {
            2.0
        } else {
            3.0
        }
    }
}

impl fmt::Display for BruteForceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = &self.centiminutes / 100u32;
        let fraction = (&self.centiminutes % 100u32)
            .to_u32_digits()
            .first()
            .copied()
            .unwrap_or(0);
        write!(f, "{whole}.{fraction:02}")
    }
}

impl Serialize for BruteForceEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
