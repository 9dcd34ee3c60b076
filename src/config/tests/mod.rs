//! Config module tests
//!
//! Contains test suites for layout parsing, loading and building.

#[cfg(test)]
mod layout_tests;
