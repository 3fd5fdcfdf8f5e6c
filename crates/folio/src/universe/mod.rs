//! Candidate stock universes.
//!
//! The toolkit ships a fixed candidate list of NSE large caps from which
//! portfolios are usually assembled. Symbols outside the universe are not
//! rejected; the data provider is the authority on whether a ticker exists.

pub mod nse;

pub use nse::NseUniverse;

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().contains(&symbol.to_string())
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for NseUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }
}
