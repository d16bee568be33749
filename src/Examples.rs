//! # Examples
//! Runnable demonstrations of the conversion pipeline, selected by task
//! number from `main`.

pub mod conversion_examples;
