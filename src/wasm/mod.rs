//! WASM bindings for the generator

use wasm_bindgen::prelude::*;

use crate::markup;
use crate::{Generator, GeneratorConfig};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generate numeronyms with the default options
#[wasm_bindgen]
pub fn generate_numeronym(input: &str) -> String {
    Generator::new().generate(input)
}

/// WASM-exposed generator wrapper
#[wasm_bindgen]
pub struct WasmGenerator {
    generator: Generator,
}

#[wasm_bindgen]
impl WasmGenerator {
    /// Create a generator with the default options
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }

    /// Create a generator from a JSON options object,
    /// e.g. `{"unit": "graphemes", "minLen": 4}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmGenerator, JsValue> {
        let generator = GeneratorConfig::from_json(json)
            .and_then(Generator::with_config)
            .map_err(to_js_error)?;
        Ok(Self { generator })
    }

    /// Turn text into numeronyms
    pub fn generate(&self, text: &str) -> String {
        self.generator.generate(text)
    }

    /// Generate and wrap the result in an escaped `<p>` element
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, text: &str) -> String {
        markup::render_paragraph(&self.generator.generate(text))
    }

    /// Active options as JSON
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> String {
        self.generator.config().to_json()
    }
}

impl Default for WasmGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for insertion into markup
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: &str) -> String {
    markup::escape_html(text).into_owned()
}

fn to_js_error(err: crate::ConfigError) -> JsValue {
    tracing::debug!(error = %err, "rejected generator config");
    js_sys::Error::new(&err.to_string()).into()
}
