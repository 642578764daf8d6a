//! Shared library for `PuGpa`
//! Contains the grading scale, the GPA engine, and the supporting
//! configuration and report modules used by the CLI.

pub mod core;

pub use self::core::*;
