//! NSE large-cap candidate universe.

/// Fixed candidate list of NSE large caps offered for selection.
#[derive(Debug, Clone)]
pub struct NseUniverse {
    symbols: Vec<String>,
}

impl NseUniverse {
    /// Create the universe with its default constituents.
    pub fn new() -> Self {
        let symbols = Self::default_constituents()
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self { symbols }
    }

    /// Get all symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.clone()
    }

    /// The selection preloaded when the user has not picked anything yet.
    pub fn default_selection() -> Vec<String> {
        ["RELIANCE.NS", "HDFCBANK.NS", "TCS.NS"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// NIFTY 50 constituents with Yahoo Finance `.NS` suffixes.
    const fn default_constituents() -> [&'static str; 50] {
        [
            "RELIANCE.NS",
            "HDFCBANK.NS",
            "TCS.NS",
            "INFY.NS",
            "ICICIBANK.NS",
            "LT.NS",
            "KOTAKBANK.NS",
            "SBIN.NS",
            "HCLTECH.NS",
            "ITC.NS",
            "AXISBANK.NS",
            "BAJFINANCE.NS",
            "BHARTIARTL.NS",
            "ASIANPAINT.NS",
            "MARUTI.NS",
            "SUNPHARMA.NS",
            "TITAN.NS",
            "ULTRACEMCO.NS",
            "NESTLEIND.NS",
            "WIPRO.NS",
            "POWERGRID.NS",
            "NTPC.NS",
            "TECHM.NS",
            "ONGC.NS",
            "JSWSTEEL.NS",
            "TATAMOTORS.NS",
            "TATASTEEL.NS",
            "ADANIENT.NS",
            "ADANIPORTS.NS",
            "COALINDIA.NS",
            "BAJAJFINSV.NS",
            "DIVISLAB.NS",
            "DRREDDY.NS",
            "EICHERMOT.NS",
            "GRASIM.NS",
            "HEROMOTOCO.NS",
            "HINDALCO.NS",
            "HINDUNILVR.NS",
            "INDUSINDBK.NS",
            "M&M.NS",
            "BAJAJ-AUTO.NS",
            "BRITANNIA.NS",
            "CIPLA.NS",
            "HDFCLIFE.NS",
            "SBILIFE.NS",
            "APOLLOHOSP.NS",
            "BPCL.NS",
            "TATACONSUM.NS",
            "UPL.NS",
            "VEDL.NS",
        ]
    }
}

impl Default for NseUniverse {
    fn default() -> Self {
        Self::new()
    }
}
