//! Database row structs with conversion into domain types.

use std::str::FromStr;

use currency_codes::CurrencyCode;
use sqlx::FromRow;

use rates_types::{Currency, StoreError};

/// Currency row from the snapshot table.
#[derive(FromRow)]
pub struct DbCurrency {
    pub code: String,
    pub value: f64,
}

impl DbCurrency {
    /// Convert database row to domain Currency.
    pub fn into_domain(self) -> Result<Currency, StoreError> {
        let code = CurrencyCode::from_str(&self.code).map_err(StoreError::Database)?;
        Ok(Currency::new(code, self.value))
    }
}

/// Value-only row from the preferences table.
#[derive(FromRow)]
pub struct DbPreference {
    pub value: String,
}
