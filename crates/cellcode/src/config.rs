//! Configuration of a code input.
//!
//! A [`CodeInputConfig`] can be built in code with the `with_*` builder
//! methods or loaded from TOML:
//!
//! ```
//! use cellcode::CodeInputConfig;
//! use cellcode::widget::{Condition, LetterCase};
//!
//! let config = CodeInputConfig::from_toml_str(
//!     r#"
//!     fields = 6
//!     condition = "alphanumeric"
//!     type_letter_case = "upperCase"
//!     placeholder = "------"
//!
//!     [input_attributes]
//!     inputmode = "text"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.fields, 6);
//! assert_eq!(config.condition, Condition::Alphanumeric);
//! assert_eq!(config.type_letter_case, LetterCase::Upper);
//! ```
//!
//! A custom pattern is written as a table:
//!
//! ```toml
//! condition = { pattern = "^[A-F0-9]+$" }
//! ```

use cellcode_core::logging::targets;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::widget::view::Attributes;
use crate::widget::{Condition, LetterCase, ValidationPolicy};

/// Default number of cells.
pub const DEFAULT_FIELDS: usize = 6;

/// Everything that shapes a code input, apart from its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeInputConfig {
    /// Number of cells. Zero renders nothing; negative counts in a
    /// configuration file are read as zero.
    #[serde(deserialize_with = "deserialize_field_count")]
    pub fields: usize,
    /// Which characters are accepted.
    pub condition: Condition,
    /// Case conversion applied to accepted characters.
    pub type_letter_case: LetterCase,
    /// Placeholder glyphs; the i-th grapheme is shown in cell i.
    pub placeholder: String,
    /// Extra classes for every cell, whitespace-separated.
    pub class_name_input: String,
    /// Extra classes for the wrapper, whitespace-separated.
    pub class_name_inputs_wrapper: String,
    /// Attributes forwarded to every cell.
    pub input_attributes: Attributes,
    /// Attributes forwarded to the wrapper.
    pub wrapper_attributes: Attributes,
}

impl Default for CodeInputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS)
    }
}

impl CodeInputConfig {
    /// A configuration with `fields` unrestricted cells.
    pub fn new(fields: usize) -> Self {
        Self {
            fields,
            condition: Condition::default(),
            type_letter_case: LetterCase::default(),
            placeholder: String::new(),
            class_name_input: String::new(),
            class_name_inputs_wrapper: String::new(),
            input_attributes: Attributes::new(),
            wrapper_attributes: Attributes::new(),
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CodeInputError::Config`](crate::CodeInputError::Config) for
    /// malformed documents, including custom patterns that do not compile.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::CONFIG,
            fields = config.fields,
            condition = %config.condition,
            "loaded code input configuration"
        );
        Ok(config)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Set the acceptance condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the case conversion.
    pub fn with_letter_case(mut self, case: LetterCase) -> Self {
        self.type_letter_case = case;
        self
    }

    /// Set the placeholder glyphs.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set extra classes for every cell.
    pub fn with_input_class(mut self, classes: impl Into<String>) -> Self {
        self.class_name_input = classes.into();
        self
    }

    /// Set extra classes for the wrapper.
    pub fn with_wrapper_class(mut self, classes: impl Into<String>) -> Self {
        self.class_name_inputs_wrapper = classes.into();
        self
    }

    /// Add an attribute forwarded to every cell.
    pub fn with_input_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_attributes.insert(name.into(), value.into());
        self
    }

    /// Add an attribute forwarded to the wrapper.
    pub fn with_wrapper_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.wrapper_attributes.insert(name.into(), value.into());
        self
    }

    /// Resolve the validation policy this configuration describes.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::resolve(&self.condition, self.type_letter_case)
    }
}

fn deserialize_field_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let count = i64::deserialize(deserializer)?;
    Ok(usize::try_from(count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeInputError;

    #[test]
    fn test_defaults() {
        let config = CodeInputConfig::default();
        assert_eq!(config.fields, DEFAULT_FIELDS);
        assert_eq!(config.condition, Condition::Any);
        assert_eq!(config.type_letter_case, LetterCase::Unchanged);
        assert!(config.placeholder.is_empty());
    }

    #[test]
    fn test_from_toml_missing_keys() {
        let config = CodeInputConfig::from_toml_str("fields = 4").unwrap();
        assert_eq!(config, CodeInputConfig::new(4));
    }

    #[test]
    fn test_from_toml_pattern() {
        let config = CodeInputConfig::from_toml_str(
            r#"
            fields = 8
            condition = { pattern = "^[A-F0-9]+$" }
            type_letter_case = "upper"
            "#,
        )
        .unwrap();
        assert_eq!(config.condition, Condition::pattern("^[A-F0-9]+$").unwrap());
        assert!(config.policy().accepts("BEEF"));
        assert!(!config.policy().accepts("XYZ"));
    }

    #[test]
    fn test_from_toml_invalid_pattern() {
        let err = CodeInputConfig::from_toml_str(r#"condition = { pattern = "([" }"#).unwrap_err();
        assert!(matches!(err, CodeInputError::Config(_)));
    }

    #[test]
    fn test_from_toml_unknown_condition_is_any() {
        let config = CodeInputConfig::from_toml_str(r#"condition = "hexadecimal""#).unwrap();
        assert_eq!(config.condition, Condition::Any);
    }

    #[test]
    fn test_from_toml_negative_fields() {
        let config = CodeInputConfig::from_toml_str("fields = -3").unwrap();
        assert_eq!(config.fields, 0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CodeInputConfig::new(5)
            .with_condition(Condition::pattern("^[0-9]+$").unwrap())
            .with_letter_case(LetterCase::Lower)
            .with_placeholder("*****")
            .with_input_attribute("autocomplete", "one-time-code");

        let text = config.to_toml_string().unwrap();
        assert_eq!(CodeInputConfig::from_toml_str(&text).unwrap(), config);
    }
}
