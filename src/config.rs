/// Options for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Emit the documentation comment attached to declarations.
    pub emit_documentation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { indent_width: 4, emit_documentation: true }
    }
}

impl Config {
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub fn without_documentation(mut self) -> Self {
        self.emit_documentation = false;
        self
    }
}
