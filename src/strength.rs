//! Strength categories and the score thresholds that select them.

use std::fmt;

use serde::Serialize;

/// Coarse strength bucket. Discriminants are the public numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum StrengthCategory {
    Weak = 1,
    Average = 2,
    Strong = 3,
    Secure = 4,
}

/// Upper score bound of each category, ascending. `None` is unbounded.
pub const STRENGTH_THRESHOLDS: [(StrengthCategory, Option<f64>); 4] = [
    (StrengthCategory::Weak, Some(50.0)),
    (StrengthCategory::Average, Some(250.0)),
    (StrengthCategory::Strong, Some(300.0)),
    (StrengthCategory::Secure, None),
];

impl StrengthCategory {
    /// First category whose bound the score does not exceed.
    pub fn from_score(score: f64) -> Self {
        STRENGTH_THRESHOLDS
            .iter()
            .find(|(_, bound)| bound.is_none_or(|bound| score <= bound))
            .map(|(category, _)| *category)
            .unwrap_or(StrengthCategory::Secure)
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<StrengthCategory> for u8 {
    fn from(category: StrengthCategory) -> Self {
        category.value()
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthCategory::Weak => "weak",
            StrengthCategory::Average => "average",
            StrengthCategory::Strong => "strong",
            StrengthCategory::Secure => "secure",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_ascending() {
        let bounds: Vec<f64> = STRENGTH_THRESHOLDS.iter().filter_map(|(_, b)| *b).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(STRENGTH_THRESHOLDS.last().map(|(_, b)| *b), Some(None));
    }

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(StrengthCategory::from_score(0.0), StrengthCategory::Weak);
        assert_eq!(StrengthCategory::from_score(50.0), StrengthCategory::Weak);
        assert_eq!(StrengthCategory::from_score(50.5), StrengthCategory::Average);
        assert_eq!(StrengthCategory::from_score(250.0), StrengthCategory::Average);
        assert_eq!(StrengthCategory::from_score(250.5), StrengthCategory::Strong);
        assert_eq!(StrengthCategory::from_score(300.0), StrengthCategory::Strong);
        assert_eq!(StrengthCategory::from_score(300.5), StrengthCategory::Secure);
        assert_eq!(StrengthCategory::from_score(f64::MAX), StrengthCategory::Secure);
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(StrengthCategory::Weak.value(), 1);
        assert_eq!(StrengthCategory::Average.value(), 2);
        assert_eq!(u8::from(StrengthCategory::Strong), 3);
        assert_eq!(StrengthCategory::Secure as u8, 4);
    }
}
