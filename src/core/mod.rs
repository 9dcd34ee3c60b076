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

//! src/core/mod.rs
//!
//! Core grid column types
//!
//! This module contains the values handed to the grid widget and the
//! contracts of the collaborators the builders wire together:
//! - Header metadata and grid column artifacts
//! - Singleton element factories for cells and headers
//! - Cell renderer strategy
//!
//! Nothing here depends on a concrete widget toolkit, so every type can
//! be unit tested without a display.

pub mod factory;
pub mod renderer;
pub mod types;

pub use factory::{
    CellElementFactory, GridCoordinate, HeaderElementFactory, SingletonElementFactory,
    TextBoxElementFactory,
};
pub use renderer::{ColumnRenderer, DefaultColumnRenderer};
pub use types::{GridColumn, HeaderMetaData};
