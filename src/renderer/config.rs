//! Configuration for the SVG composer

/// Stylesheet inlined when the caller does not provide one
pub const DEFAULT_INLINE_CSS: &str = r#"
text {
  font-weight: 300;
  font-size: 14px;
  fill: #777777;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol";
}
.sponsor-link {
  cursor: pointer;
}
.sponsor-tier-title {
  font-weight: 500;
  font-size: 20px;
}
"#;

/// Document-level options, fixed for the lifetime of a composer
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerConfig {
    /// Width of the output document
    pub width: f64,

    /// Raw CSS placed in the `<style>` block, not escaped or validated
    pub svg_inline_css: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            svg_inline_css: DEFAULT_INLINE_CSS.to_string(),
        }
    }
}

impl ComposerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the inline CSS
    pub fn with_inline_css(mut self, css: impl Into<String>) -> Self {
        self.svg_inline_css = css.into();
        self
    }
}
