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

//! src/core/factory.rs
//!
//! Element factory contracts
//!
//! A grid never creates one editing widget per cell. Instead a single
//! reusable element is moved to whichever cell (or header cell) the user
//! is editing. The factories below describe that capability; the grid
//! widget drives them, the builders only hold and forward them.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Position of a cell or header cell inside the grid
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GridCoordinate {
    /// Zero-based row index (header rows count from the top of the header)
    pub row: usize,
    /// Zero-based column index
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Produces or reuses the interactive element bound to a grid coordinate
///
/// Implementations own exactly one element. `attach` moves it to a new
/// coordinate, replacing any previous binding.
pub trait SingletonElementFactory {
    /// Binds the shared element to `coordinate`
    fn attach(&self, coordinate: GridCoordinate);

    /// Releases the current binding, if any
    fn detach(&self);

    /// Coordinate the element is currently bound to
    fn attached_to(&self) -> Option<GridCoordinate>;

    /// Short label identifying the kind of element (e.g. "cell-textbox")
    fn kind(&self) -> &str;
}

/// Factory used for data cells
pub trait CellElementFactory: SingletonElementFactory {}

/// Factory used for header cells
pub trait HeaderElementFactory: SingletonElementFactory {}

/// Stock single-instance text box factory
///
/// Records its current binding with a `Cell`, so it is meant to be used
/// from the thread that owns the grid.
#[derive(Debug)]
pub struct TextBoxElementFactory {
    kind: String,
    attached: Cell<Option<GridCoordinate>>,
}

impl TextBoxElementFactory {
    /// Creates a factory for data cells
    pub fn for_cells() -> Self {
        Self::with_kind("cell-textbox")
    }

    /// Creates a factory for header cells
    pub fn for_headers() -> Self {
        Self::with_kind("header-textbox")
    }

    fn with_kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attached: Cell::new(None),
        }
    }
}

impl SingletonElementFactory for TextBoxElementFactory {
    fn attach(&self, coordinate: GridCoordinate) {
        self.attached.set(Some(coordinate));
    }

    fn detach(&self) {
        self.attached.set(None);
    }

    fn attached_to(&self) -> Option<GridCoordinate> {
        self.attached.get()
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

impl CellElementFactory for TextBoxElementFactory {}

impl HeaderElementFactory for TextBoxElementFactory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_replaces_previous_binding() {
        let factory = TextBoxElementFactory::for_cells();
        assert_eq!(factory.attached_to(), None);

        factory.attach(GridCoordinate::new(0, 1));
        factory.attach(GridCoordinate::new(3, 2));

        // Only one element exists, so only the last binding survives
        assert_eq!(factory.attached_to(), Some(GridCoordinate::new(3, 2)));
    }

    #[test]
    fn test_detach_clears_binding() {
        let factory = TextBoxElementFactory::for_headers();
        factory.attach(GridCoordinate::new(1, 1));
        factory.detach();

        assert_eq!(factory.attached_to(), None);
        assert_eq!(factory.kind(), "header-textbox");
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(format!("{}", GridCoordinate::new(2, 5)), "(2, 5)");
    }
}
