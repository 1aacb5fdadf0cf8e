//! `export const NAME = [...] as const;` output.

use std::io::Write;

use crate::{FormatError, is_identifier};

/// Name of the exported constant when none is configured.
pub const DEFAULT_CONST_NAME: &str = "TICKERS";

/// Renders tickers as an exported readonly tuple of string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstArrayFormatter {
    /// Exported constant name.
    name: String,
    /// Spaces before each ticker line.
    indent: u8,
}

impl Default for ConstArrayFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstArrayFormatter {
    /// Creates a formatter for `TICKERS` with four-space indentation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_CONST_NAME.to_string(),
            indent: 4,
        }
    }

    /// Sets the exported constant name.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidIdentifier`] if `name` is not a valid
    /// JavaScript identifier.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, FormatError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(FormatError::InvalidIdentifier(name));
        }
        self.name = name;
        Ok(self)
    }

    /// Sets the indentation width in spaces.
    #[must_use]
    pub const fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Returns the exported constant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the declaration.
    ///
    /// The output has no trailing newline.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, ticks: &[S]) -> String {
        let pad = " ".repeat(usize::from(self.indent));
        let body = ticks
            .iter()
            .map(|tick| format!("{pad}{}", quote(tick.as_ref())))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("export const {} = [\n{body}\n] as const;", self.name)
    }

    /// Writes the declaration to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<S: AsRef<str>, W: Write>(
        &self,
        ticks: &[S],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writer.write_all(self.render(ticks).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Renders tickers as `export const TICKERS = [...] as const;`.
///
/// # Example
///
/// ```
/// use tickgen_format::format_tokens;
///
/// let text = format_tokens(&["A", "B"]);
/// assert_eq!(text, "export const TICKERS = [\n    \"A\",\n    \"B\"\n] as const;");
/// ```
#[must_use]
pub fn format_tokens<S: AsRef<str>>(ticks: &[S]) -> String {
    ConstArrayFormatter::new().render(ticks)
}

/// Quotes a ticker as a string literal valid in both JSON and JavaScript.
fn quote(tick: &str) -> String {
    serde_json::Value::String(tick.to_owned()).to_string()
}
