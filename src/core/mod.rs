//! Core module for the GPA engine and its supporting functionality

pub mod config;
pub mod engine;
pub mod input;
pub mod models;
pub mod report;
pub mod scale;

/// Returns the current version of the `PuGpa` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
