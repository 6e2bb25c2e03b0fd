//! Character acceptance and case normalization.
//!
//! A [`ValidationPolicy`] is resolved from the configured [`Condition`] and
//! [`LetterCase`]. It answers two questions for the event router:
//!
//! - is this input acceptable? ([`ValidationPolicy::accepts`])
//! - what does it look like once normalized? ([`ValidationPolicy::normalize`])
//!
//! Policies are plain values with no side effects, cheap to rebuild whenever
//! the configuration changes.
//!
//! # Conditions
//!
//! | Condition | Accepts |
//! |-----------|---------|
//! | [`Condition::Numbers`] | one or more ASCII digits |
//! | [`Condition::Letters`] | one or more ASCII letters |
//! | [`Condition::Alphanumeric`] | one or more ASCII letters or digits |
//! | [`Condition::Any`] | anything |
//! | [`Condition::Pattern`] | whatever the regular expression matches |
//!
//! The empty string is always acceptable: it stands for a deletion.
//!
//! # Example
//!
//! ```
//! use cellcode::widget::{Condition, LetterCase, ValidationPolicy};
//!
//! let policy = ValidationPolicy::resolve(&Condition::Alphanumeric, LetterCase::Upper);
//! assert!(policy.accepts("ab12"));
//! assert!(!policy.accepts("ab-12"));
//! assert_eq!(policy.normalize("ab12"), "AB12");
//! ```

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which characters a code may contain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "ConditionRepr", into = "ConditionRepr")]
pub enum Condition {
    /// ASCII digits only.
    Numbers,
    /// ASCII letters only.
    Letters,
    /// ASCII letters and digits.
    Alphanumeric,
    /// No restriction.
    #[default]
    Any,
    /// A custom regular expression, used verbatim as the acceptance test.
    ///
    /// The expression is matched with search semantics; anchor it with `^`
    /// and `$` to constrain the whole input.
    Pattern(Regex),
}

impl Condition {
    /// Compile a custom acceptance pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CodeInputError::InvalidPattern`](crate::CodeInputError::InvalidPattern)
    /// if the expression does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Condition::Pattern(Regex::new(pattern)?))
    }

    /// Resolve a condition keyword.
    ///
    /// `"numbers"`, `"letters"` and `"alphanumeric"` select their class;
    /// `"any"` and every unrecognized keyword select [`Condition::Any`].
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "numbers" => Condition::Numbers,
            "letters" => Condition::Letters,
            "alphanumeric" => Condition::Alphanumeric,
            _ => Condition::Any,
        }
    }

    /// The keyword for this condition, or `None` for a custom pattern.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Condition::Numbers => Some("numbers"),
            Condition::Letters => Some("letters"),
            Condition::Alphanumeric => Some("alphanumeric"),
            Condition::Any => Some("any"),
            Condition::Pattern(_) => None,
        }
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Condition::Pattern(a), Condition::Pattern(b)) => a.as_str() == b.as_str(),
            (a, b) => a.keyword() == b.keyword(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
            other => write!(f, "{}", other.keyword().unwrap_or("any")),
        }
    }
}

/// Serialized form of [`Condition`]: a keyword or `{ pattern = "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ConditionRepr {
    Keyword(String),
    Pattern { pattern: String },
}

impl TryFrom<ConditionRepr> for Condition {
    type Error = regex::Error;

    fn try_from(repr: ConditionRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            ConditionRepr::Keyword(keyword) => Ok(Condition::from_keyword(&keyword)),
            ConditionRepr::Pattern { pattern } => Ok(Condition::Pattern(Regex::new(&pattern)?)),
        }
    }
}

impl From<Condition> for ConditionRepr {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Pattern(regex) => ConditionRepr::Pattern {
                pattern: regex.as_str().to_string(),
            },
            other => ConditionRepr::Keyword(other.keyword().unwrap_or("any").to_string()),
        }
    }
}

/// Case conversion applied to accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LetterCase {
    /// Convert to uppercase.
    #[serde(rename = "upperCase", alias = "upper_case", alias = "upper")]
    Upper,
    /// Convert to lowercase.
    #[serde(rename = "lowerCase", alias = "lower_case", alias = "lower")]
    Lower,
    /// Leave case untouched.
    #[default]
    #[serde(rename = "any", alias = "unchanged")]
    Unchanged,
}

impl LetterCase {
    /// Apply the conversion to a whole string.
    pub fn apply(self, input: &str) -> String {
        match self {
            LetterCase::Upper => input.to_uppercase(),
            LetterCase::Lower => input.to_lowercase(),
            LetterCase::Unchanged => input.to_string(),
        }
    }

    /// Apply the conversion to one character.
    ///
    /// A cell holds exactly one character, so conversions that expand (such
    /// as `ß` to `SS`) keep only the first character of the result.
    pub fn apply_char(self, ch: char) -> char {
        match self {
            LetterCase::Upper => ch.to_uppercase().next().unwrap_or(ch),
            LetterCase::Lower => ch.to_lowercase().next().unwrap_or(ch),
            LetterCase::Unchanged => ch,
        }
    }
}

/// The acceptance half of a policy.
#[derive(Debug, Clone)]
enum Acceptance {
    Digits,
    Letters,
    Alphanumeric,
    Everything,
    Pattern(Regex),
}

impl Acceptance {
    fn accepts(&self, input: &str) -> bool {
        match self {
            Acceptance::Digits => input.chars().all(|c| c.is_ascii_digit()),
            Acceptance::Letters => input.chars().all(|c| c.is_ascii_alphabetic()),
            Acceptance::Alphanumeric => input.chars().all(|c| c.is_ascii_alphanumeric()),
            Acceptance::Everything => true,
            Acceptance::Pattern(regex) => regex.is_match(input),
        }
    }
}

/// Resolved acceptance test and normalizer.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    acceptance: Acceptance,
    case: LetterCase,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::resolve(&Condition::Any, LetterCase::Unchanged)
    }
}

impl ValidationPolicy {
    /// Resolve a policy from its configuration.
    pub fn resolve(condition: &Condition, case: LetterCase) -> Self {
        let acceptance = match condition {
            Condition::Numbers => Acceptance::Digits,
            Condition::Letters => Acceptance::Letters,
            Condition::Alphanumeric => Acceptance::Alphanumeric,
            Condition::Any => Acceptance::Everything,
            Condition::Pattern(regex) => Acceptance::Pattern(regex.clone()),
        };
        Self { acceptance, case }
    }

    /// The case conversion of this policy.
    pub fn case(&self) -> LetterCase {
        self.case
    }

    /// Test `input` as a whole against the acceptance test.
    ///
    /// The empty string is always accepted.
    pub fn accepts(&self, input: &str) -> bool {
        input.is_empty() || self.acceptance.accepts(input)
    }

    /// Test a single character against the acceptance test.
    pub fn accepts_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.accepts(ch.encode_utf8(&mut buf))
    }

    /// Apply the case conversion to `input`.
    pub fn normalize(&self, input: &str) -> String {
        self.case.apply(input)
    }

    /// Apply the case conversion to one character.
    pub fn normalize_char(&self, ch: char) -> char {
        self.case.apply_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        let policy = ValidationPolicy::resolve(&Condition::Numbers, LetterCase::Unchanged);
        assert!(policy.accepts("0"));
        assert!(policy.accepts("123456"));
        assert!(!policy.accepts("12a"));
        assert!(!policy.accepts("١")); // Arabic-Indic digit
        assert!(!policy.accepts_char('x'));
        assert!(policy.accepts_char('7'));
    }

    #[test]
    fn test_letters() {
        let policy = ValidationPolicy::resolve(&Condition::Letters, LetterCase::Unchanged);
        assert!(policy.accepts("abcXYZ"));
        assert!(!policy.accepts("abc1"));
        assert!(!policy.accepts_char('é'));
        assert!(!policy.accepts_char(' '));
    }

    #[test]
    fn test_alphanumeric() {
        let policy = ValidationPolicy::resolve(&Condition::Alphanumeric, LetterCase::Unchanged);
        assert!(policy.accepts("ab12CD"));
        assert!(!policy.accepts("ab 12"));
        assert!(!policy.accepts("ab-12"));
    }

    #[test]
    fn test_any() {
        let policy = ValidationPolicy::resolve(&Condition::Any, LetterCase::Unchanged);
        assert!(policy.accepts("anything at all!\n"));
        assert!(policy.accepts_char('%'));
    }

    #[test]
    fn test_empty_always_accepted() {
        let conditions = [
            Condition::Numbers,
            Condition::Letters,
            Condition::Alphanumeric,
            Condition::Any,
            Condition::pattern("^[A-F]+$").unwrap(),
        ];
        for condition in &conditions {
            let policy = ValidationPolicy::resolve(condition, LetterCase::Upper);
            assert!(policy.accepts(""), "{condition}");
        }
    }

    #[test]
    fn test_custom_pattern_used_verbatim() {
        let policy = ValidationPolicy::resolve(
            &Condition::pattern("^[A-F0-9]+$").unwrap(),
            LetterCase::Unchanged,
        );
        assert!(policy.accepts("BEEF01"));
        assert!(!policy.accepts("beef"));

        // Unanchored patterns search.
        let loose = ValidationPolicy::resolve(&Condition::pattern("[0-9]").unwrap(), LetterCase::Unchanged);
        assert!(loose.accepts("a1"));
        assert!(!loose.accepts("ab"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Condition::pattern("([a-z]").is_err());
    }

    #[test]
    fn test_unknown_keyword_is_any() {
        assert_eq!(Condition::from_keyword("hex"), Condition::Any);
        assert_eq!(Condition::from_keyword("numbers"), Condition::Numbers);
    }

    #[test]
    fn test_case_conversion() {
        let upper = ValidationPolicy::resolve(&Condition::Any, LetterCase::Upper);
        assert_eq!(upper.normalize("ab12cd"), "AB12CD");
        assert_eq!(upper.normalize_char('q'), 'Q');
        assert_eq!(upper.normalize_char('ß'), 'S');

        let lower = ValidationPolicy::resolve(&Condition::Any, LetterCase::Lower);
        assert_eq!(lower.normalize("AB12CD"), "ab12cd");

        let unchanged = ValidationPolicy::resolve(&Condition::Any, LetterCase::Unchanged);
        assert_eq!(unchanged.normalize("aB1"), "aB1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for case in [LetterCase::Upper, LetterCase::Lower, LetterCase::Unchanged] {
            let policy = ValidationPolicy::resolve(&Condition::Alphanumeric, case);
            for input in ["ab12cd", "XYZ789", "MiXeD0"] {
                let once = policy.normalize(input);
                assert!(policy.accepts(&once));
                assert_eq!(policy.normalize(&once), once);
            }
        }
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(Condition::Numbers.to_string(), "numbers");
        assert_eq!(Condition::pattern("^x$").unwrap().to_string(), "/^x$/");
    }
}
