//! Numeronym generation
//!
//! A numeronym keeps the first and last unit of a word and replaces the
//! interior with its length: "internationalization" becomes "i18n".

mod word;

use std::borrow::Cow;

pub(crate) use word::{abbreviate_into, words};

use crate::config::{Case, GeneratorConfig, Scope};
use crate::error::Result;

/// Stateless numeronym generator.
///
/// Holds only its immutable options, so a single instance can be shared
/// freely between threads and callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with validated options
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Turn `text` into numeronyms.
    ///
    /// Words are re-joined with a single space; whitespace-only input
    /// produces an empty string.
    pub fn generate(&self, text: &str) -> String {
        let text: Cow<'_, str> = match self.config.case {
            Case::Preserve => Cow::Borrowed(text),
            Case::Lower => Cow::Owned(text.to_lowercase()),
        };

        let mut out = String::with_capacity(text.len());
        match self.config.scope {
            Scope::Words => {
                for (i, word) in words(&text).enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    self.abbreviate_into(word, &mut out);
                }
            }
            Scope::Phrase => {
                let joined: String = words(&text).collect();
                self.abbreviate_into(&joined, &mut out);
            }
        }

        tracing::trace!(
            input_len = text.len(),
            output_len = out.len(),
            "generated numeronym"
        );
        out
    }

    /// Abbreviate a single word, ignoring scope and case options
    pub fn abbreviate(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        self.abbreviate_into(word, &mut out);
        out
    }

    fn abbreviate_into(&self, word: &str, out: &mut String) {
        abbreviate_into(word, self.config.unit, self.config.min_len, out);
    }
}
