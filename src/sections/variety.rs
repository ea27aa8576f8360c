//! Character variety section - splits a password into ASCII character classes.

use serde::Serialize;

/// The four character classes the scorer knows about.
///
/// Anything outside `[A-Za-z0-9]` is a symbol, including whitespace and
/// non-ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            'A'..='Z' => CharClass::Upper,
            'a'..='z' => CharClass::Lower,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::Symbol,
        }
    }

    /// Number of distinct characters an attacker has to try per position
    /// when this class is in play.
    pub fn alphabet_size(self) -> u32 {
        match self {
            CharClass::Upper | CharClass::Lower => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 33,
        }
    }
}

/// How characters of one class are turned into scoring units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UnitCounting {
    /// Every character is one unit.
    #[default]
    PerCharacter,
    /// Every maximal contiguous run of one class is one unit.
    PerRun,
}

/// Units per class found in one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassUnits {
    pub uppers: u32,
    pub lowers: u32,
    pub numbers: u32,
    pub symbols: u32,
}

impl ClassUnits {
    pub fn get(&self, class: CharClass) -> u32 {
        match class {
            CharClass::Upper => self.uppers,
            CharClass::Lower => self.lowers,
            CharClass::Digit => self.numbers,
            CharClass::Symbol => self.symbols,
        }
    }

    fn bump(&mut self, class: CharClass) {
        let slot = match class {
            CharClass::Upper => &mut self.uppers,
            CharClass::Lower => &mut self.lowers,
            CharClass::Digit => &mut self.numbers,
            CharClass::Symbol => &mut self.symbols,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.get(class) > 0
    }

    /// Classes with at least one unit, in declaration order.
    pub fn present(&self) -> impl Iterator<Item = CharClass> + '_ {
        [
            CharClass::Upper,
            CharClass::Lower,
            CharClass::Digit,
            CharClass::Symbol,
        ]
        .into_iter()
        .filter(|&class| self.contains(class))
    }
}

/// Single pass over the password counting class units.
///
/// With [`UnitCounting::PerRun`] a unit is only added on a class transition,
/// so `"aaBB1"` yields one unit each for lower, upper and digit.
pub fn count_class_units(pwd: &str, counting: UnitCounting) -> ClassUnits {
    let mut units = ClassUnits::default();
    let mut previous: Option<CharClass> = None;

    for c in pwd.chars() {
        let class = CharClass::of(c);
        let starts_unit = match counting {
            UnitCounting::PerCharacter => true,
            UnitCounting::PerRun => previous != Some(class),
        };
        if starts_unit {
            units.bump(class);
        }
        previous = Some(class);
    }

    units
}

/// Reward for mixing classes: `(present - 1) * 10`, from -10 for an empty
/// password up to 30 when all four classes appear.
pub fn combination_bonus(units: &ClassUnits) -> i64 {
    (units.present().count() as i64 - 1) * 10
}

pub fn has_upper(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lower(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class_of() {
        assert_eq!(CharClass::of('Q'), CharClass::Upper);
        assert_eq!(CharClass::of('q'), CharClass::Lower);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('#'), CharClass::Symbol);
        assert_eq!(CharClass::of(' '), CharClass::Symbol);
        assert_eq!(CharClass::of('é'), CharClass::Symbol);
    }

    #[test]
    fn test_count_per_character() {
        let units = count_class_units("AFasd22#$", UnitCounting::PerCharacter);
        assert_eq!(
            units,
            ClassUnits {
                uppers: 2,
                lowers: 3,
                numbers: 2,
                symbols: 2
            }
        );
    }

    #[test]
    fn test_count_per_run() {
        let units = count_class_units("aaBB11##aa", UnitCounting::PerRun);
        assert_eq!(
            units,
            ClassUnits {
                uppers: 1,
                lowers: 2,
                numbers: 1,
                symbols: 1
            }
        );
    }

    #[test]
    fn test_count_empty_password() {
        for counting in [UnitCounting::PerCharacter, UnitCounting::PerRun] {
            let units = count_class_units("", counting);
            assert_eq!(units, ClassUnits::default());
            assert_eq!(combination_bonus(&units), -10);
        }
    }

    #[test]
    fn test_combination_bonus_range() {
        let one = count_class_units("asdf", UnitCounting::PerCharacter);
        assert_eq!(combination_bonus(&one), 0);

        let all = count_class_units("aA1!", UnitCounting::PerCharacter);
        assert_eq!(combination_bonus(&all), 30);
    }

    #[test]
    fn test_present_classes() {
        let units = count_class_units("a1", UnitCounting::PerRun);
        let present: Vec<_> = units.present().collect();
        assert_eq!(present, vec![CharClass::Lower, CharClass::Digit]);
    }

    #[test]
    fn test_class_predicates() {
        assert!(has_upper("asD"));
        assert!(!has_upper("asd1!"));
        assert!(has_lower("ASd"));
        assert!(!has_lower("ASD987"));
        assert!(has_digit("abc9"));
        assert!(!has_digit("ASDDasdf"));
        assert!(has_symbol("abc def"));
        assert!(!has_symbol("ASDDasdf"));
    }
}
