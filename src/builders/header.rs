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

//! Header builder
//!
//! Describes the header rows of one column as a chain of levels. The root
//! is the top row; each level owns at most one nested level, the row
//! directly beneath it. `build()` flattens the chain into the header
//! metadata list the grid renders top to bottom.
//!
//! # Example
//!
//! ```
//! use grid_column_builders::builders::HeaderBuilder;
//! use grid_column_builders::core::TextBoxElementFactory;
//! use std::rc::Rc;
//!
//! let mut root = HeaderBuilder::get(Rc::new(TextBoxElementFactory::for_headers()));
//! root.set_column_id("p").set_column_group("Person");
//! root.new_level().set_column_title("Age");
//!
//! let headers = root.build();
//! assert_eq!(headers.len(), 2);
//! assert_eq!(headers[1].title(), Some("Age"));
//! assert_eq!(headers[1].column_group(), "Person");
//! ```

use std::fmt;
use std::iter;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::{HeaderElementFactory, HeaderMetaData};

/// Builder for the header rows of a column
///
/// Defaults when not set:
/// - column id: none
/// - title: none
/// - group: "" (no group)
/// - read-only: `false`
/// - information header: `false`
///
/// Note the read-only default is the opposite of the column-level default
/// in `GridColumnBuilder`.
///
/// No setter validates its input. A builder is not consumed by `build()`
/// and can be changed and built again.
#[derive(Clone)]
pub struct HeaderBuilder {
    column_id: Option<String>,
    column_title: Option<String>,
    column_group: String,
    read_only: bool,
    information_header: bool,
    nested_level: Option<Box<HeaderBuilder>>,
    factory: Rc<dyn HeaderElementFactory>,
}

impl HeaderBuilder {
    /// Creates the builder for a single header row
    pub fn get(factory: Rc<dyn HeaderElementFactory>) -> Self {
        Self::new(factory)
    }

    pub fn new(factory: Rc<dyn HeaderElementFactory>) -> Self {
        Self {
            column_id: None,
            column_title: None,
            column_group: String::new(),
            read_only: false,
            information_header: false,
            nested_level: None,
            factory,
        }
    }

    /// Currently set column id
    ///
    /// Lets callers read back the id before deciding how to configure a
    /// nested level.
    pub fn column_id(&self) -> Option<&str> {
        self.column_id.as_deref()
    }

    pub fn column_title(&self) -> Option<&str> {
        self.column_title.as_deref()
    }

    pub fn column_group(&self) -> &str {
        &self.column_group
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_information_header(&self) -> bool {
        self.information_header
    }

    pub fn factory(&self) -> &Rc<dyn HeaderElementFactory> {
        &self.factory
    }

    pub fn set_column_id(&mut self, column_id: impl Into<String>) -> &mut Self {
        self.column_id = Some(column_id.into());
        self
    }

    pub fn set_column_title(&mut self, column_title: impl Into<String>) -> &mut Self {
        self.column_title = Some(column_title.into());
        self
    }

    pub fn set_column_group(&mut self, column_group: impl Into<String>) -> &mut Self {
        self.column_group = column_group.into();
        self
    }

    pub fn set_read_only(&mut self, read_only: bool) -> &mut Self {
        self.read_only = read_only;
        self
    }

    pub fn set_information_header(&mut self, information_header: bool) -> &mut Self {
        self.information_header = information_header;
        self
    }

    /// Adds the header row beneath this one and returns it
    ///
    /// The new level starts as a snapshot of this level's column id, title,
    /// group and read-only flag. The information header flag is not copied.
    /// Later changes to this level do not reach the new one.
    ///
    /// A level has at most one nested level: calling this again replaces
    /// the previous nested level (and everything beneath it).
    pub fn new_level(&mut self) -> &mut HeaderBuilder {
        let mut nested = HeaderBuilder::get(Rc::clone(&self.factory));
        nested.column_id = self.column_id.clone();
        nested.column_title = self.column_title.clone();
        nested.column_group = self.column_group.clone();
        nested.read_only = self.read_only;

        self.nested_level.insert(Box::new(nested))
    }

    /// The header row beneath this one, if any
    pub fn nested_level(&self) -> Option<&HeaderBuilder> {
        self.nested_level.as_deref()
    }

    pub fn nested_level_mut(&mut self) -> Option<&mut HeaderBuilder> {
        self.nested_level.as_deref_mut()
    }

    /// Number of header rows from this level down
    pub fn depth(&self) -> usize {
        self.levels().count()
    }

    /// Builds one `HeaderMetaData` per level, this level first
    pub fn build(&self) -> Vec<HeaderMetaData> {
        let headers: Vec<HeaderMetaData> = self
            .levels()
            .enumerate()
            .map(|(row, level)| {
                trace!(row, column_id = ?level.column_id, "building header level");
                level.build_level()
            })
            .collect();

        debug!(
            column_id = ?self.column_id,
            levels = headers.len(),
            "built header chain"
        );

        headers
    }

    /// Walks the chain from this level down
    ///
    /// `new_level` only ever links forward to a fresh builder, so the
    /// chain is acyclic and the walk terminates.
    fn levels(&self) -> impl Iterator<Item = &HeaderBuilder> {
        iter::successors(Some(self), |level| level.nested_level.as_deref())
    }

    fn build_level(&self) -> HeaderMetaData {
        HeaderMetaData::new(
            self.column_id.clone(),
            self.column_title.clone(),
            self.column_group.clone(),
            Rc::clone(&self.factory),
            self.read_only,
            self.information_header,
        )
    }
}

impl fmt::Debug for HeaderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderBuilder")
            .field("column_id", &self.column_id)
            .field("column_title", &self.column_title)
            .field("column_group", &self.column_group)
            .field("read_only", &self.read_only)
            .field("information_header", &self.information_header)
            .field("nested_level", &self.nested_level)
            .field("factory", &self.factory.kind())
            .finish()
    }
}
