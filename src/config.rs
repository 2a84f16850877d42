//! Generator options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Smallest threshold that still shortens every abbreviated word
pub const MIN_THRESHOLD: usize = 3;

/// What a word's length is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// Extended grapheme clusters
    Graphemes,
}

/// How input text is divided before abbreviating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Each whitespace-separated word is abbreviated on its own
    #[default]
    Words,
    /// Whitespace is dropped and the whole input becomes one numeronym
    Phrase,
}

/// Case handling applied before counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Preserve,
    Lower,
}

/// Options for a [`Generator`](crate::Generator).
///
/// The default abbreviates every word of three or more characters, counts
/// Unicode scalar values and keeps the input's case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Words shorter than this are passed through unchanged
    pub min_len: usize,
    pub unit: Unit,
    pub scope: Scope,
    pub case: Case,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_len: MIN_THRESHOLD,
            unit: Unit::Chars,
            scope: Scope::Words,
            case: Case::Preserve,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a camelCase JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "parsed generator config");
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain enums and integers always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_len < MIN_THRESHOLD {
            return Err(ConfigError::MinLenTooSmall {
                min_len: self.min_len,
            });
        }
        Ok(())
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "chars" | "char" => Ok(Unit::Chars),
            "graphemes" | "grapheme" => Ok(Unit::Graphemes),
            _ => Err(ConfigError::UnknownOption {
                kind: "unit",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Scope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "words" | "word" => Ok(Scope::Words),
            "phrase" => Ok(Scope::Phrase),
            _ => Err(ConfigError::UnknownOption {
                kind: "scope",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Case {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "preserve" => Ok(Case::Preserve),
            "lower" | "lowercase" => Ok(Case::Lower),
            _ => Err(ConfigError::UnknownOption {
                kind: "case",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Chars => f.write_str("chars"),
            Unit::Graphemes => f.write_str("graphemes"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Words => f.write_str("words"),
            Scope::Phrase => f.write_str("phrase"),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Preserve => f.write_str("preserve"),
            Case::Lower => f.write_str("lower"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_len, 3);
        assert_eq!(config.unit, Unit::Chars);
        assert_eq!(config.scope, Scope::Words);
        assert_eq!(config.case, Case::Preserve);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GeneratorConfig::from_json(r#"{"unit":"graphemes","case":"lower"}"#).unwrap();
        assert_eq!(config.unit, Unit::Graphemes);
        assert_eq!(config.case, Case::Lower);
        assert_eq!(config.min_len, 3);
        assert_eq!(config.scope, Scope::Words);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_json_rejects_small_threshold() {
        let err = GeneratorConfig::from_json(r#"{"minLen":2}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MinLenTooSmall { min_len: 2 }));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = GeneratorConfig::from_json(r#"{"threshold":4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GeneratorConfig::new()
            .with_min_len(4)
            .with_scope(Scope::Phrase);
        let json = config.to_json();
        assert!(json.contains(r#""minLen":4"#));
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("Graphemes".parse::<Unit>().unwrap(), Unit::Graphemes);
        assert_eq!("phrase".parse::<Scope>().unwrap(), Scope::Phrase);
        assert_eq!("LOWER".parse::<Case>().unwrap(), Case::Lower);

        for unit in [Unit::Chars, Unit::Graphemes] {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
        for scope in [Scope::Words, Scope::Phrase] {
            assert_eq!(scope.to_string().parse::<Scope>().unwrap(), scope);
        }
        for case in [Case::Preserve, Case::Lower] {
            assert_eq!(case.to_string().parse::<Case>().unwrap(), case);
        }

        let err = "bytes".parse::<Unit>().unwrap_err();
        assert_eq!(err.to_string(), "unknown unit `bytes`");
    }
}
