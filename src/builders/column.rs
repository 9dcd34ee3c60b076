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

//! Grid column builder
//!
//! Assembles a `GridColumn` from a header chain, a cell element factory
//! and column-wide settings with defaults.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::builders::header::HeaderBuilder;
use crate::config::ColumnDefaults;
use crate::core::{CellElementFactory, ColumnRenderer, DefaultColumnRenderer, GridColumn};

/// Builder for `GridColumn`
///
/// Defaults when not set (see `ColumnDefaults`):
/// - width: 150
/// - movable: `false`
/// - read-only: `true`
/// - placeholder: ""
/// - renderer: a new `DefaultColumnRenderer` per built column
///
/// The cell element factory and the root of the header chain are fixed at
/// creation. Setters accept any value without validation.
///
/// # Example
///
/// ```
/// use grid_column_builders::builders::{GridColumnBuilder, HeaderBuilder};
/// use grid_column_builders::core::TextBoxElementFactory;
/// use std::rc::Rc;
///
/// let mut header = HeaderBuilder::get(Rc::new(TextBoxElementFactory::for_headers()));
/// header.set_column_id("age").set_column_title("Age");
///
/// let column = GridColumnBuilder::get(Rc::new(TextBoxElementFactory::for_cells()), header)
///     .set_width(200.0)
///     .build();
///
/// assert_eq!(column.width(), 200.0);
/// assert!(column.is_read_only());
/// assert_eq!(column.header_meta_data()[0].title(), Some("Age"));
/// ```
#[derive(Clone)]
pub struct GridColumnBuilder {
    width: f64,
    movable: bool,
    read_only: bool,
    place_holder: String,
    header_builder: HeaderBuilder,
    renderer: Option<Rc<dyn ColumnRenderer>>,
    factory: Rc<dyn CellElementFactory>,
}

impl GridColumnBuilder {
    /// Creates a builder with the built-in defaults
    pub fn get(factory: Rc<dyn CellElementFactory>, header_builder: HeaderBuilder) -> Self {
        Self::with_defaults(factory, header_builder, &ColumnDefaults::default())
    }

    /// Creates a builder seeded from `defaults` instead of the built-in ones
    pub fn with_defaults(
        factory: Rc<dyn CellElementFactory>,
        header_builder: HeaderBuilder,
        defaults: &ColumnDefaults,
    ) -> Self {
        Self {
            width: defaults.width,
            movable: defaults.movable,
            read_only: defaults.read_only,
            place_holder: defaults.place_holder.clone(),
            header_builder,
            renderer: None,
            factory,
        }
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_movable(&mut self, movable: bool) -> &mut Self {
        self.movable = movable;
        self
    }

    pub fn set_read_only(&mut self, read_only: bool) -> &mut Self {
        self.read_only = read_only;
        self
    }

    pub fn set_place_holder(&mut self, place_holder: impl Into<String>) -> &mut Self {
        self.place_holder = place_holder.into();
        self
    }

    /// Sets the renderer shared by every column this builder produces
    pub fn set_column_renderer(&mut self, renderer: Rc<dyn ColumnRenderer>) -> &mut Self {
        self.renderer = Some(renderer);
        self
    }

    /// Root of the header chain
    pub fn header_builder(&self) -> &HeaderBuilder {
        &self.header_builder
    }

    /// Builds a new column
    ///
    /// Each call produces an independent column; the builder keeps its
    /// state and can be built again.
    pub fn build(&self) -> GridColumn {
        let header_meta_data = self.header_builder.build();
        let renderer = match &self.renderer {
            Some(renderer) => Rc::clone(renderer),
            None => Rc::new(DefaultColumnRenderer::new()) as Rc<dyn ColumnRenderer>,
        };

        let mut column = GridColumn::new(
            header_meta_data,
            renderer,
            self.width,
            self.movable,
            Rc::clone(&self.factory),
            self.place_holder.clone(),
        );
        column.set_read_only(self.read_only);

        debug!(
            column_id = ?self.header_builder.column_id(),
            width = self.width,
            movable = self.movable,
            read_only = self.read_only,
            header_rows = column.header_meta_data().len(),
            "built grid column"
        );

        column
    }
}

impl fmt::Debug for GridColumnBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridColumnBuilder")
            .field("width", &self.width)
            .field("movable", &self.movable)
            .field("read_only", &self.read_only)
            .field("place_holder", &self.place_holder)
            .field("header_builder", &self.header_builder)
            .field("custom_renderer", &self.renderer.is_some())
            .field("factory", &self.factory.kind())
            .finish()
    }
}
