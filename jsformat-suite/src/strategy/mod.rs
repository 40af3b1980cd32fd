//! Fixture sources.
//!
//! Only the filesystem source exists today; fixtures held in memory go
//! straight to [`run_fixture_content`](crate::run_fixture_content).

pub mod fs;
