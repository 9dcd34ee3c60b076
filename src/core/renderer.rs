//! src/core/renderer.rs
//!
//! Cell renderer strategy
//!
//! A column delegates painting of its cells to a `ColumnRenderer`. The
//! grid widget decides when to paint; the renderer only decides what.

/// Paints the content of a cell given its value
pub trait ColumnRenderer {
    /// Returns the text shown in a cell
    ///
    /// `value` is `None` for a cell that was never edited. `placeholder`
    /// is the column's placeholder text.
    fn render_cell(&self, value: Option<&str>, placeholder: &str) -> String;
}

/// Renderer used when a column is built without an explicit one
///
/// Shows the value when there is one, the placeholder otherwise.
#[derive(Clone, Debug, Default)]
pub struct DefaultColumnRenderer;

impl DefaultColumnRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnRenderer for DefaultColumnRenderer {
    fn render_cell(&self, value: Option<&str>, placeholder: &str) -> String {
        match value {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => placeholder.to_string(),
        }
    }
}
