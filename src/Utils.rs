//! # Utils
//! Console output helpers.

/// Table views of mechanisms and assembled chemistry for quick inspection.
pub mod pretty_print;
