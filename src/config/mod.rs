//! Column configuration: defaults and declarative layouts.
//!
//! This module provides the configuration side of column building:
//!
//! - **Defaults**: `ColumnDefaults` holds the column-wide settings a
//!   `GridColumnBuilder` starts from
//! - **Layouts**: `GridLayout` describes whole column sets as JSON and
//!   replays them through the builders
//! - **Errors**: only loading a layout can fail; building never does
//!
//! # Example
//!
//! ```no_run
//! use grid_column_builders::config::GridLayout;
//! use grid_column_builders::core::TextBoxElementFactory;
//! use std::path::Path;
//! use std::rc::Rc;
//!
//! let layout = GridLayout::load(Path::new("/tmp/layout.json"))?;
//!
//! let cells: Rc<dyn grid_column_builders::core::CellElementFactory> =
//!     Rc::new(TextBoxElementFactory::for_cells());
//! let headers: Rc<dyn grid_column_builders::core::HeaderElementFactory> =
//!     Rc::new(TextBoxElementFactory::for_headers());
//!
//! let columns = layout.build_columns(&cells, &headers);
//! println!("Built {} columns", columns.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod defaults;
pub mod error;
pub mod layout;

pub use defaults::ColumnDefaults;
pub use error::LayoutError;
pub use layout::{ColumnLayout, GridLayout, HeaderLevelLayout};

#[cfg(test)]
mod tests;
