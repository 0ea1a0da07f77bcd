//! Currency snapshot record.

use currency_codes::CurrencyCode;
use serde::{Deserialize, Serialize};

/// One exchange rate relative to the API base currency.
///
/// Records are immutable once fetched; a refresh replaces the whole
/// snapshot rather than mutating individual records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub value: f64,
}

impl Currency {
    pub fn new(code: CurrencyCode, value: f64) -> Self {
        Self { code, value }
    }
}
