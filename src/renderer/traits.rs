/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
    pub format: OutputFormat,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            depth: 0,
            format: OutputFormat::Html,
        }
    }

    pub fn text() -> Self {
        Self {
            depth: 0,
            format: OutputFormat::Text,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            format: self.format,
        }
    }

    pub fn indent(&self) -> String {
        match self.format {
            OutputFormat::Html => "  ".repeat(self.depth),
            OutputFormat::Text => String::new(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    /// Visible text only, one block per line
    Text,
}

/// Core rendering trait for all markup nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
