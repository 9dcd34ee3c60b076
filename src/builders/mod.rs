//! Grid column builders
//!
//! Contains the builders used to assemble a grid column at column
//! definition time:
//! - Header chain construction (one level per header row)
//! - Column assembly from the header chain plus column-wide settings
//!
//! Builders hold `Rc`-shared collaborators and are meant to be configured
//! from one thread at a time.

pub mod column;
pub mod header;

pub use column::GridColumnBuilder;
pub use header::HeaderBuilder;

#[cfg(test)]
mod tests;
