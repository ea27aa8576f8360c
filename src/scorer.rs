//! Strength scoring: class counts, weighted bonuses and the brute force
//! multiplier.

use serde::Serialize;

use crate::sections::{
    char_length, combination_bonus, count_class_units, excess_length, keyspace_size,
    BruteForceEstimate, ClassUnits, UnitCounting,
};
use crate::strength::StrengthCategory;

/// Cap on the flat bonus given for length beyond the floor.
const EXCESS_FLAT_CAP: i64 = 25;
const EXCESS_FLAT_STEP: i64 = 10;

/// Per-unit bonus weights.
///
/// Symbol units are scored with `special_symbol`. `symbol` is carried for
/// compatibility and does not enter the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringWeights {
    pub excess: i64,
    pub upper_case: i64,
    pub lower_case: i64,
    pub number: i64,
    pub symbol: i64,
    pub special_symbol: i64,
    pub counting: UnitCounting,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            excess: 1,
            upper_case: 3,
            lower_case: 3,
            number: 3,
            symbol: 4,
            special_symbol: 5,
            counting: UnitCounting::PerCharacter,
        }
    }
}

/// Everything the score is derived from, recomputed for every password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharacterClassCounts {
    pub uppers: u32,
    pub lowers: u32,
    pub numbers: u32,
    pub symbols: u32,
    pub excess: usize,
    pub combo: i64,
    pub length: usize,
}

impl CharacterClassCounts {
    pub fn analyze(pwd: &str, min_length: Option<usize>, counting: UnitCounting) -> Self {
        let units = count_class_units(pwd, counting);
        let length = char_length(pwd);
        Self {
            uppers: units.uppers,
            lowers: units.lowers,
            numbers: units.numbers,
            symbols: units.symbols,
            excess: excess_length(length, min_length),
            combo: combination_bonus(&units),
            length,
        }
    }

    pub fn units(&self) -> ClassUnits {
        ClassUnits {
            uppers: self.uppers,
            lowers: self.lowers,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }
}

/// Itemised score of one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub counts: CharacterClassCounts,
    pub excess_flat_bonus: i64,
    pub excess_bonus: i64,
    pub upper_bonus: i64,
    pub lower_bonus: i64,
    pub number_bonus: i64,
    pub symbol_bonus: i64,
    pub combo_bonus: i64,
    pub base_score: i64,
    pub keyspace_size: u32,
    pub brute_force_minutes: BruteForceEstimate,
    pub multiplier: f64,
    /// `base_score * multiplier`, floored at 0.
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn compute(counts: CharacterClassCounts, weights: &ScoringWeights) -> Self {
        let excess = i64::try_from(counts.excess).unwrap_or(i64::MAX);
        let excess_flat_bonus = excess.saturating_mul(EXCESS_FLAT_STEP).min(EXCESS_FLAT_CAP);
        let excess_bonus = excess.saturating_mul(weights.excess);
        let upper_bonus = i64::from(counts.uppers) * weights.upper_case;
        let lower_bonus = i64::from(counts.lowers) * weights.lower_case;
        let number_bonus = i64::from(counts.numbers) * weights.number;
        let symbol_bonus = i64::from(counts.symbols) * weights.special_symbol;
        let combo_bonus = counts.combo;

        let base_score = excess_flat_bonus
            + excess_bonus
            + upper_bonus
            + lower_bonus
            + number_bonus
            + symbol_bonus
            + combo_bonus;

        let keyspace_size = keyspace_size(&counts.units());
        let brute_force_minutes = BruteForceEstimate::new(keyspace_size, counts.length);
        let multiplier = brute_force_minutes.multiplier();
        let score = (base_score as f64 * multiplier).max(0.0);

        Self {
            counts,
            excess_flat_bonus,
            excess_bonus,
            upper_bonus,
            lower_bonus,
            number_bonus,
            symbol_bonus,
            combo_bonus,
            base_score,
            keyspace_size,
            brute_force_minutes,
            multiplier,
            score,
        }
    }

    pub fn category(&self) -> StrengthCategory {
        StrengthCategory::from_score(self.score)
    }
}
