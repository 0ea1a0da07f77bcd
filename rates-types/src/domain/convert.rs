//! Conversion helpers over a pair of rates from one snapshot.

/// Rate for turning one unit of the source currency into the target
/// currency, both quoted against the same API base.
pub fn exchange_rate(source: f64, target: f64) -> f64 {
    target / source
}

/// Converts an amount with a precomputed exchange rate.
pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_rate_between_quotes() {
        // 1 USD = 0.92 EUR when both are quoted against the same base.
        let rate = exchange_rate(1.0, 0.92);
        assert!((rate - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_applies_rate() {
        let rate = exchange_rate(1.0, 83.12);
        assert!((convert(100.0, rate) - 8312.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_currency_rate_is_one() {
        assert!((exchange_rate(0.92, 0.92) - 1.0).abs() < f64::EPSILON);
    }
}
