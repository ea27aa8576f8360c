//! Password composition rules and strength scoring
//!
//! This library validates passwords against configurable composition
//! requirements and scores their strength from character-class variety,
//! length and an exact brute-force time estimate.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_REQUIREMENTS_PATH`: Custom path to a JSON requirements file
//!   (default: `./assets/requirements.json`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{RequirementOptions, StrengthCategory, StrengthEvaluator};
//! use secrecy::SecretString;
//!
//! let mut evaluator = StrengthEvaluator::new();
//! evaluator.set_requirements(&RequirementOptions::default().special_symbol(false));
//!
//! let password = SecretString::new("AFasd22#$".to_string().into());
//!
//! assert!(evaluator.is_valid(&password, &[]));
//! assert_eq!(evaluator.strength_score(&password), 267.0);
//! assert_eq!(evaluator.strength(&password), StrengthCategory::Strong);
//! ```

mod evaluator;
mod requirements;
mod scorer;
mod sections;
mod strength;
mod validator;

// Public API
pub use evaluator::StrengthEvaluator;
pub use requirements::{
    load_requirements, load_requirements_from_path, requirements_path, RequirementOptions,
    Requirements, RequirementsError, DEFAULT_REQUIREMENTS_PATH, REQUIREMENTS_PATH_ENV,
};
pub use scorer::{CharacterClassCounts, ScoreBreakdown, ScoringWeights};
pub use sections::{BruteForceEstimate, UnitCounting};
pub use strength::{StrengthCategory, STRENGTH_THRESHOLDS};
