//! Currency types and the office currency policy
//!
//! Every asset kind shares one policy: the office decides the display
//! currency, and each currency has a fixed multiplier applied to the USD
//! purchase price.

use crate::types::Price;
use std::fmt;

/// Display currency (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// Swedish Krona
    SEK,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::SEK => "SEK",
        }
    }

    /// Parse from ISO code (exact, upper-case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "SEK" => Some(Currency::SEK),
            _ => None,
        }
    }

    /// Static multiplier applied to a USD amount
    pub fn rate(&self) -> f64 {
        rate_for_currency(*self)
    }

    /// Convert a USD amount into this currency
    pub fn convert(&self, usd: Price) -> Price {
        usd * self.rate()
    }

    /// Get all supported currencies
    pub fn all() -> [Currency; 3] {
        [Currency::USD, Currency::EUR, Currency::SEK]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Currency assigned to an office. Case-sensitive; unknown offices use USD.
pub fn currency_for_office(office: &str) -> Currency {
    match office {
        "Europe" | "Spain" => Currency::EUR,
        "Sweden" => Currency::SEK,
        "USA" => Currency::USD,
        _ => Currency::USD,
    }
}

/// Multiplier on USD for a currency
pub fn rate_for_currency(currency: Currency) -> f64 {
    match currency {
        Currency::EUR => 0.92,
        Currency::SEK => 10.63,
        Currency::USD => 1.0,
    }
}

/// Multiplier on USD for a free-text currency code; unknown codes give 1.0
pub fn rate_for_code(code: &str) -> f64 {
    Currency::from_code(code).map_or(1.0, rate_for_currency)
}
