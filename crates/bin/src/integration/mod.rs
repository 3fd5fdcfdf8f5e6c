//! Glue between the CLI and the library crates.

pub(crate) mod pipeline;
