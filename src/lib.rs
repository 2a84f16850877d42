//! Numeronym Generator: turns text into numeronyms as the user types
//!
//! A numeronym keeps a word's first and last character and replaces the
//! characters in between with their count:
//! - "internationalization" → "i18n"
//! - "hello world" → "h3o w3d"
//!
//! The core is a pure, stateless function. Hosts call it once per input
//! change and display the result; the crate ships WASM bindings for the
//! browser page and a small CLI.

pub mod config;
pub mod error;
pub mod host;
pub mod markup;
pub mod numeronym;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmGenerator;

// Re-export primary types
pub use config::{Case, GeneratorConfig, Scope, Unit};
pub use error::ConfigError;
pub use host::{on_input, Host, WriteHost};
pub use numeronym::Generator;

/// Generate numeronyms with the default options.
///
/// Every whitespace-separated word of three or more characters is
/// abbreviated; words are re-joined with single spaces.
pub fn generate(text: &str) -> String {
    Generator::new().generate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        assert_eq!(generate("internationalization"), "i18n");
        assert_eq!(generate("hello world"), "h3o w3d");
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate(""), "");
        assert_eq!(generate("   "), "");
    }

    #[test]
    fn test_wasm_wrapper_matches_core() {
        let wasm = WasmGenerator::new();
        assert_eq!(wasm.generate("accessibility"), "a11y");
        assert_eq!(wasm.render_html("<tag>"), "<p>&lt;3&gt;</p>");
        assert_eq!(wasm::generate_numeronym("go"), "go");
        assert_eq!(
            wasm.get_config(),
            r#"{"minLen":3,"unit":"chars","scope":"words","case":"preserve"}"#
        );
    }
}
