use pwd_rules::{Requirements, StrengthCategory, StrengthEvaluator};
use proptest::prelude::*;
use secrecy::SecretString;

fn secret(pwd: &str) -> SecretString {
    SecretString::new(pwd.to_string().into())
}

// --- STRATEGIES ---

fn arb_password() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9!@#$%^&*()_+=-]{0,40}",
        "\\PC{0,24}",
    ]
}

/// Swaps the case of ASCII letters, leaving everything else untouched.
fn swap_case(pwd: &str) -> String {
    pwd.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_scoring_is_idempotent(pwd in arb_password()) {
        let mut evaluator = StrengthEvaluator::new();
        let pwd = secret(&pwd);

        let first = evaluator.breakdown(&pwd);
        let second = evaluator.breakdown(&pwd);

        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(evaluator.strength(&pwd), first.category());
    }

    #[test]
    fn prop_score_is_never_negative(pwd in arb_password()) {
        let mut evaluator = StrengthEvaluator::new();
        prop_assert!(evaluator.strength_score(&secret(&pwd)) >= 0.0);
    }

    #[test]
    fn prop_category_matches_thresholds(pwd in arb_password()) {
        let mut evaluator = StrengthEvaluator::new();
        let score = evaluator.strength_score(&secret(&pwd));

        let expected = if score <= 50.0 {
            StrengthCategory::Weak
        } else if score <= 250.0 {
            StrengthCategory::Average
        } else if score <= 300.0 {
            StrengthCategory::Strong
        } else {
            StrengthCategory::Secure
        };
        prop_assert_eq!(StrengthCategory::from_score(score), expected);
    }

    #[test]
    fn prop_case_swap_keeps_score(pwd in "[A-Za-z0-9#$%]{0,30}") {
        let mut evaluator = StrengthEvaluator::new();

        let original = evaluator.strength_score(&secret(&pwd));
        let swapped = evaluator.strength_score(&secret(&swap_case(&pwd)));

        prop_assert_eq!(original.to_bits(), swapped.to_bits());
    }

    #[test]
    fn prop_no_rules_accepts_everything(pwd in arb_password()) {
        let evaluator = StrengthEvaluator::with_requirements(Requirements::none());
        prop_assert!(evaluator.is_valid(&secret(&pwd), &[]));
    }

    #[test]
    fn prop_counts_bounded_by_length(pwd in arb_password()) {
        let mut evaluator = StrengthEvaluator::new();
        let counts = evaluator.score(&secret(&pwd));

        let units = counts.uppers + counts.lowers + counts.numbers + counts.symbols;
        prop_assert_eq!(units as usize, counts.length);
        prop_assert!((-10..=30).contains(&counts.combo));
    }
}
