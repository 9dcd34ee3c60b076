// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grid Column Builders
//!
//! Assembles the description of editable data grid columns, including
//! multi-row headers where each row can belong to a spanning group
//! (e.g. "GIVEN > Person > Age" as three stacked header rows).
//!
//! # Features
//!
//! - **Header chains:** One builder level per header row, with nested
//!   levels starting as snapshots of their parent
//! - **Column builder:** Column-wide settings with defaults, any number
//!   of independent builds from the same builder
//! - **Declarative layouts:** Whole column sets described as JSON and
//!   replayed through the builders
//! - **Permissive:** Builders never validate or fail; malformed values
//!   are passed through to the grid
//!
//! # Architecture
//!
//! - **`core`:** Finished artifacts and collaborator contracts (element
//!   factories, renderers)
//! - **`builders`:** `HeaderBuilder` and `GridColumnBuilder`
//! - **`config`:** Column defaults and JSON layouts
//!
//! # Examples
//!
//! ## Building a grouped column
//!
//! ```
//! use grid_column_builders::builders::{GridColumnBuilder, HeaderBuilder};
//! use grid_column_builders::core::TextBoxElementFactory;
//! use std::rc::Rc;
//!
//! let mut header = HeaderBuilder::get(Rc::new(TextBoxElementFactory::for_headers()));
//! header.set_column_id("p").set_column_group("Person");
//! header.new_level().set_column_title("Age");
//!
//! let column = GridColumnBuilder::get(Rc::new(TextBoxElementFactory::for_cells()), header)
//!     .set_place_holder("Insert value")
//!     .build();
//!
//! assert_eq!(column.header_meta_data().len(), 2);
//! assert_eq!(column.render_cell(None), "Insert value");
//! ```
//!
//! ## Loading a layout
//!
//! ```no_run
//! use grid_column_builders::config::GridLayout;
//! use std::path::Path;
//!
//! let layout = GridLayout::load(Path::new("/tmp/layout.json"))?;
//! println!("Found {} columns", layout.columns.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builders;
pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::builders::{GridColumnBuilder, HeaderBuilder};
pub use crate::core::{GridColumn, HeaderMetaData};
