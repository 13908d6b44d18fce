use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY"),
            Direction::Sell => write!(f, "SELL"),
        }
    }
}

/// A single FX trade as submitted for validation.
///
/// Nothing is required at the type level; rules own all null/blank checks so
/// that a malformed trade produces field errors instead of a deserialization
/// failure. Once constructed a trade is never mutated; rules only read it.
///
/// Field keys mirror the upstream wire model (including the historical
/// `excerciseStartDate` spelling) so reports stay comparable across systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub customer: Option<String>,
    pub legal_entity: Option<String>,
    pub ccy_pair: Option<String>,
    /// Instrument type: Spot, Forward, VanillaOption, ...
    #[serde(rename = "type")]
    pub instrument: Option<String>,
    pub direction: Option<Direction>,
    pub trade_date: Option<NaiveDate>,
    pub value_date: Option<NaiveDate>,
    pub amount1: Option<Decimal>,
    pub amount2: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub trader: Option<String>,
    // Option-product fields
    pub style: Option<String>,
    pub strategy: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub premium_date: Option<NaiveDate>,
    pub excercise_start_date: Option<NaiveDate>,
    pub premium: Option<Decimal>,
    pub premium_ccy: Option<String>,
    pub premium_type: Option<String>,
    pub pay_ccy: Option<String>,
}

impl Trade {
    /// Whether the instrument type designates an option product.
    pub fn is_option(&self) -> bool {
        matches!(self.instrument.as_deref(), Some("VanillaOption") | Some("Option"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_wire_model() {
        let json = r#"{
            "customer": "PLUTO1",
            "ccyPair": "EURUSD",
            "type": "Spot",
            "direction": "BUY",
            "tradeDate": "2016-08-11",
            "amount1": 1000000.00,
            "rate": 1.12,
            "legalEntity": "CS Zurich",
            "trader": "Johann Baumfiddler"
        }"#;

        let trade: Trade = serde_json::from_str(json).expect("valid trade json");
        assert_eq!(trade.customer.as_deref(), Some("PLUTO1"));
        assert_eq!(trade.ccy_pair.as_deref(), Some("EURUSD"));
        assert_eq!(trade.instrument.as_deref(), Some("Spot"));
        assert_eq!(trade.direction, Some(Direction::Buy));
        assert_eq!(trade.amount1, Some(dec!(1000000.00)));
        assert_eq!(trade.rate, Some(dec!(1.12)));
        assert!(trade.value_date.is_none());
        assert!(!trade.is_option());
    }

    #[test]
    fn test_is_option() {
        let trade = Trade {
            instrument: Some("VanillaOption".to_string()),
            ..Trade::default()
        };
        assert!(trade.is_option());

        let trade = Trade {
            instrument: Some("Forward".to_string()),
            ..Trade::default()
        };
        assert!(!trade.is_option());
    }
}
