//! Password strength evaluator - ties requirements, validation and scoring
//! together.

use secrecy::{ExposeSecret, SecretString};

use crate::requirements::{RequirementOptions, Requirements};
use crate::scorer::{CharacterClassCounts, ScoreBreakdown, ScoringWeights};
use crate::strength::StrengthCategory;
use crate::validator;

/// Validates and scores passwords under one set of requirements.
///
/// Scoring takes `&mut self` because the last counts and breakdown are kept
/// for inspection. Give each thread its own evaluator or put one behind a
/// `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct StrengthEvaluator {
    requirements: Requirements,
    weights: ScoringWeights,
    last_score: Option<CharacterClassCounts>,
    last_breakdown: Option<ScoreBreakdown>,
}

impl StrengthEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requirements(requirements: Requirements) -> Self {
        Self {
            requirements,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Merges `options` over the current requirements. Values are not
    /// validated.
    pub fn set_requirements(&mut self, options: &RequirementOptions) {
        self.requirements = self.requirements.merged(options);

        #[cfg(feature = "tracing")]
        tracing::debug!("requirements updated: {:?}", self.requirements);
    }

    /// Checks the password against the current requirements, stopping at the
    /// first broken rule.
    ///
    /// `_vague_blacklist` is accepted for interface compatibility and is not
    /// consulted.
    pub fn is_valid(&self, password: &SecretString, _vague_blacklist: &[&str]) -> bool {
        validator::is_valid(password.expose_secret(), &self.requirements)
    }

    /// Class counts, excess length and combination bonus of `password`.
    pub fn score(&mut self, password: &SecretString) -> CharacterClassCounts {
        let counts = CharacterClassCounts::analyze(
            password.expose_secret(),
            self.requirements.min_length,
            self.weights.counting,
        );
        self.last_score = Some(counts);
        counts
    }

    /// Full itemised score of `password`.
    pub fn breakdown(&mut self, password: &SecretString) -> ScoreBreakdown {
        let counts = self.score(password);
        let breakdown = ScoreBreakdown::compute(counts, &self.weights);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "scored password: base={} keyspace={} minutes={} multiplier={} score={}",
            breakdown.base_score,
            breakdown.keyspace_size,
            breakdown.brute_force_minutes,
            breakdown.multiplier,
            breakdown.score
        );

        self.last_breakdown = Some(breakdown.clone());
        breakdown
    }

    /// Weighted score, never below 0.
    pub fn strength_score(&mut self, password: &SecretString) -> f64 {
        self.breakdown(password).score
    }

    pub fn strength(&mut self, password: &SecretString) -> StrengthCategory {
        StrengthCategory::from_score(self.strength_score(password))
    }

    /// Counts from the most recent scoring call.
    pub fn last_score(&self) -> Option<&CharacterClassCounts> {
        self.last_score.as_ref()
    }

    /// Breakdown from the most recent [`breakdown`](Self::breakdown),
    /// [`strength_score`](Self::strength_score) or
    /// [`strength`](Self::strength) call.
    pub fn last_breakdown(&self) -> Option<&ScoreBreakdown> {
        self.last_breakdown.as_ref()
    }
}
