//! Length section - character length and the excess-length bonus.

/// Characters below this are never rewarded, whatever the configured minimum.
pub const EXCESS_FLOOR: usize = 6;

/// Length in Unicode scalar values, never bytes.
pub fn char_length(pwd: &str) -> usize {
    pwd.chars().count()
}

/// Characters beyond `max(EXCESS_FLOOR, min_length)`.
pub fn excess_length(length: usize, min_length: Option<usize>) -> usize {
    let floor = EXCESS_FLOOR.max(min_length.unwrap_or(0));
    length.saturating_sub(floor)
}
