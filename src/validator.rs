//! Rule validator - checks a password against [`Requirements`].

use crate::requirements::Requirements;
use crate::sections::{char_length, variety};

/// A single rule check. `true` means the rule is satisfied or disabled.
type RuleCheck = fn(&str, usize, &Requirements) -> bool;

fn min_length_rule(_pwd: &str, len: usize, req: &Requirements) -> bool {
    req.enforced_min_length().is_none_or(|min| len >= min)
}

fn max_length_rule(_pwd: &str, len: usize, req: &Requirements) -> bool {
    req.enforced_max_length().is_none_or(|max| len <= max)
}

fn upper_case_rule(pwd: &str, _len: usize, req: &Requirements) -> bool {
    !req.upper_case || variety::has_upper(pwd)
}

fn lower_case_rule(pwd: &str, _len: usize, req: &Requirements) -> bool {
    !req.lower_case || variety::has_lower(pwd)
}

fn number_rule(pwd: &str, _len: usize, req: &Requirements) -> bool {
    !req.number || variety::has_digit(pwd)
}

fn special_symbol_rule(pwd: &str, _len: usize, req: &Requirements) -> bool {
    !req.special_symbol || variety::has_symbol(pwd)
}

/// Rules in the order they are checked.
const RULES: [(&str, RuleCheck); 6] = [
    ("min_length", min_length_rule),
    ("max_length", max_length_rule),
    ("upper_case", upper_case_rule),
    ("lower_case", lower_case_rule),
    ("number", number_rule),
    ("special_symbol", special_symbol_rule),
];

/// Name of the first rule the password breaks, if any.
///
/// Checking stops at the first failure.
pub fn first_violation(pwd: &str, requirements: &Requirements) -> Option<&'static str> {
    let len = char_length(pwd);
    RULES
        .iter()
        .find(|(_, rule)| !rule(pwd, len, requirements))
        .map(|(name, _)| *name)
}

pub fn is_valid(pwd: &str, requirements: &Requirements) -> bool {
    let violation = first_violation(pwd, requirements);

    #[cfg(feature = "tracing")]
    {
        if let Some(rule) = violation {
            tracing::debug!("password rejected by rule: {}", rule);
        }
    }

    violation.is_none()
}
