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

//! Declarative grid layouts
//!
//! A `GridLayout` describes a set of columns as data (JSON) instead of
//! builder calls. Building a layout replays the equivalent calls on
//! `HeaderBuilder` and `GridColumnBuilder`, so a header level that omits
//! a field inherits it from the level above exactly like `new_level()`
//! does (the information header flag is never inherited).
//!
//! ```json
//! {
//!   "defaults": { "place_holder": "Insert value" },
//!   "columns": [
//!     {
//!       "width": 200,
//!       "headers": [
//!         { "id": "p", "title": "Person", "group": "GIVEN" },
//!         { "title": "Age" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use tracing::debug;

use crate::builders::{GridColumnBuilder, HeaderBuilder};
use crate::config::defaults::ColumnDefaults;
use crate::config::error::LayoutError;
use crate::core::{CellElementFactory, GridColumn, HeaderElementFactory};

/// A set of columns plus the defaults they start from
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GridLayout {
    #[serde(default)]
    pub defaults: ColumnDefaults,
    #[serde(default)]
    pub columns: Vec<ColumnLayout>,
}

/// Per-column overrides and header rows (top row first)
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ColumnLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_holder: Option<String>,
    #[serde(default)]
    pub headers: Vec<HeaderLevelLayout>,
}

/// One header row; `None` fields are left as the builder has them
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HeaderLevelLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default)]
    pub information_header: bool,
}

impl GridLayout {
    /// Parses a layout from JSON text
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Parse` for malformed JSON and
    /// `LayoutError::NoHeaders` for a column without header rows.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let layout: GridLayout = serde_json::from_str(json)?;

        if let Some(column) = layout.columns.iter().position(|c| c.headers.is_empty()) {
            return Err(LayoutError::NoHeaders { column });
        }

        Ok(layout)
    }

    /// Reads and parses a layout file
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if the file doesn't exist, plus
    /// every error `from_json_str` can return.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        if !path.exists() {
            return Err(LayoutError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let layout = Self::from_json_str(&content)?;

        debug!(
            path = %path.display(),
            columns = layout.columns.len(),
            "loaded grid layout"
        );

        Ok(layout)
    }

    /// Builds one `GridColumn` per column, in layout order
    ///
    /// Every column shares the given cell and header factories.
    pub fn build_columns(
        &self,
        cell_factory: &Rc<dyn CellElementFactory>,
        header_factory: &Rc<dyn HeaderElementFactory>,
    ) -> Vec<GridColumn> {
        self.columns
            .iter()
            .map(|column| {
                column
                    .column_builder(&self.defaults, cell_factory, header_factory)
                    .build()
            })
            .collect()
    }
}

impl ColumnLayout {
    /// Replays this column as builder calls
    pub fn column_builder(
        &self,
        defaults: &ColumnDefaults,
        cell_factory: &Rc<dyn CellElementFactory>,
        header_factory: &Rc<dyn HeaderElementFactory>,
    ) -> GridColumnBuilder {
        let mut builder = GridColumnBuilder::with_defaults(
            Rc::clone(cell_factory),
            self.header_builder(header_factory),
            defaults,
        );

        if let Some(width) = self.width {
            builder.set_width(width);
        }
        if let Some(movable) = self.movable {
            builder.set_movable(movable);
        }
        if let Some(read_only) = self.read_only {
            builder.set_read_only(read_only);
        }
        if let Some(place_holder) = &self.place_holder {
            builder.set_place_holder(place_holder.as_str());
        }

        builder
    }

    /// Replays the header rows as a `HeaderBuilder` chain
    pub fn header_builder(&self, factory: &Rc<dyn HeaderElementFactory>) -> HeaderBuilder {
        let mut root = HeaderBuilder::get(Rc::clone(factory));
        let mut levels = self.headers.iter();

        if let Some(first) = levels.next() {
            first.apply(&mut root);
        }

        let mut current = &mut root;
        for level in levels {
            current = current.new_level();
            level.apply(current);
        }

        root
    }
}

impl HeaderLevelLayout {
    fn apply(&self, builder: &mut HeaderBuilder) {
        if let Some(id) = &self.id {
            builder.set_column_id(id.as_str());
        }
        if let Some(title) = &self.title {
            builder.set_column_title(title.as_str());
        }
        if let Some(group) = &self.group {
            builder.set_column_group(group.as_str());
        }
        if let Some(read_only) = self.read_only {
            builder.set_read_only(read_only);
        }
        builder.set_information_header(self.information_header);
    }
}
