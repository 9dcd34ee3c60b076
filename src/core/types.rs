//! src/core/types.rs
//!
//! Finished artifacts handed to the grid widget
//!
//! This module defines the two values the builders produce:
//! - `HeaderMetaData`: one row of a (possibly multi-row) column header
//! - `GridColumn`: one editable column, ready to be registered on a grid
//!
//! Both are assembled by the builders in `crate::builders` and are not
//! meant to be configured field by field afterwards.

use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::core::factory::{CellElementFactory, HeaderElementFactory};
use crate::core::renderer::ColumnRenderer;

/// Description of a single header row of a column
///
/// Rows sharing the same `column_group` across adjacent columns are
/// merged by the grid into one spanning header cell.
///
/// Serialization skips the element factory; it is a live collaborator,
/// not data.
#[derive(Clone, Serialize)]
pub struct HeaderMetaData {
    column_id: Option<String>,
    title: Option<String>,
    column_group: String,
    #[serde(skip)]
    factory: Rc<dyn HeaderElementFactory>,
    read_only: bool,
    information_header: bool,
}

impl HeaderMetaData {
    pub fn new(
        column_id: Option<String>,
        title: Option<String>,
        column_group: String,
        factory: Rc<dyn HeaderElementFactory>,
        read_only: bool,
        information_header: bool,
    ) -> Self {
        Self {
            column_id,
            title,
            column_group,
            factory,
            read_only,
            information_header,
        }
    }

    /// Identifier of the data field this header row labels
    pub fn column_id(&self) -> Option<&str> {
        self.column_id.as_deref()
    }

    /// Display text of this header row
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Group key used to merge header cells across columns ("" = no group)
    pub fn column_group(&self) -> &str {
        &self.column_group
    }

    pub fn factory(&self) -> &Rc<dyn HeaderElementFactory> {
        &self.factory
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True for purely descriptive rows not bound to editable data
    pub fn is_information_header(&self) -> bool {
        self.information_header
    }
}

/// Compares the data fields and the identity of the shared factory
impl PartialEq for HeaderMetaData {
    fn eq(&self, other: &Self) -> bool {
        self.column_id == other.column_id
            && self.title == other.title
            && self.column_group == other.column_group
            && Rc::ptr_eq(&self.factory, &other.factory)
            && self.read_only == other.read_only
            && self.information_header == other.information_header
    }
}

impl fmt::Debug for HeaderMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderMetaData")
            .field("column_id", &self.column_id)
            .field("title", &self.title)
            .field("column_group", &self.column_group)
            .field("factory", &self.factory.kind())
            .field("read_only", &self.read_only)
            .field("information_header", &self.information_header)
            .finish()
    }
}

impl fmt::Display for HeaderMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [id: {}",
            self.title.as_deref().unwrap_or("<untitled>"),
            self.column_id.as_deref().unwrap_or("<none>")
        )?;

        if !self.column_group.is_empty() {
            write!(f, ", group: {}", self.column_group)?;
        }
        if self.read_only {
            write!(f, ", read-only")?;
        }
        if self.information_header {
            write!(f, ", info")?;
        }

        write!(f, "]")
    }
}

/// An editable grid column
///
/// Holds the header rows (top to bottom), the renderer painting its cells,
/// the cell element factory and the column-wide display settings.
pub struct GridColumn {
    header_meta_data: Vec<HeaderMetaData>,
    renderer: Rc<dyn ColumnRenderer>,
    width: f64,
    movable: bool,
    read_only: bool,
    factory: Rc<dyn CellElementFactory>,
    place_holder: String,
}

impl GridColumn {
    /// Creates a column
    ///
    /// Read-only state is not part of the constructor; a new column is
    /// editable until `set_read_only` says otherwise.
    pub fn new(
        header_meta_data: Vec<HeaderMetaData>,
        renderer: Rc<dyn ColumnRenderer>,
        width: f64,
        movable: bool,
        factory: Rc<dyn CellElementFactory>,
        place_holder: String,
    ) -> Self {
        Self {
            header_meta_data,
            renderer,
            width,
            movable,
            read_only: false,
            factory,
            place_holder,
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Header rows, top row first
    pub fn header_meta_data(&self) -> &[HeaderMetaData] {
        &self.header_meta_data
    }

    pub fn renderer(&self) -> &Rc<dyn ColumnRenderer> {
        &self.renderer
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn factory(&self) -> &Rc<dyn CellElementFactory> {
        &self.factory
    }

    pub fn place_holder(&self) -> &str {
        &self.place_holder
    }

    /// Paints a cell of this column through its renderer
    pub fn render_cell(&self, value: Option<&str>) -> String {
        self.renderer.render_cell(value, &self.place_holder)
    }
}

impl fmt::Debug for GridColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridColumn")
            .field("header_meta_data", &self.header_meta_data)
            .field("width", &self.width)
            .field("movable", &self.movable)
            .field("read_only", &self.read_only)
            .field("factory", &self.factory.kind())
            .field("place_holder", &self.place_holder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::factory::TextBoxElementFactory;
    use crate::core::renderer::DefaultColumnRenderer;

    fn header(title: &str, factory: &Rc<TextBoxElementFactory>) -> HeaderMetaData {
        HeaderMetaData::new(
            Some("age".to_string()),
            Some(title.to_string()),
            String::new(),
            factory.clone(),
            false,
            false,
        )
    }

    #[test]
    fn test_header_equality_requires_same_factory() {
        let factory = Rc::new(TextBoxElementFactory::for_headers());
        let other_factory = Rc::new(TextBoxElementFactory::for_headers());

        assert_eq!(header("Age", &factory), header("Age", &factory));
        assert_ne!(header("Age", &factory), header("Age", &other_factory));
    }

    #[test]
    fn test_header_display() {
        let factory = Rc::new(TextBoxElementFactory::for_headers());
        let meta = HeaderMetaData::new(
            Some("p".to_string()),
            None,
            "Person".to_string(),
            factory,
            true,
            true,
        );

        assert_eq!(
            format!("{}", meta),
            "<untitled> [id: p, group: Person, read-only, info]"
        );
    }

    #[test]
    fn test_header_serialization_skips_factory() {
        let factory = Rc::new(TextBoxElementFactory::for_headers());
        let json = serde_json::to_value(header("Age", &factory)).unwrap();

        assert_eq!(json["column_id"], "age");
        assert_eq!(json["title"], "Age");
        assert_eq!(json["column_group"], "");
        assert!(json.get("factory").is_none());
    }

    #[test]
    fn test_new_column_is_editable_until_set_read_only() {
        let factory = Rc::new(TextBoxElementFactory::for_cells());
        let mut column = GridColumn::new(
            Vec::new(),
            Rc::new(DefaultColumnRenderer::new()),
            100.0,
            true,
            factory,
            "Insert value".to_string(),
        );
        assert!(!column.is_read_only());

        column.set_read_only(true);
        assert!(column.is_read_only());
        assert_eq!(column.render_cell(None), "Insert value");
    }
}
