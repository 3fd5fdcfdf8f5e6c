//! Yahoo Finance data access.

pub mod closes;

pub use closes::YahooCloseProvider;
