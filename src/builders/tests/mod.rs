//! Builder module tests
//!
//! Contains test suites for:
//! - Header chain building and level snapshots
//! - Column building, defaults and rebuilds
