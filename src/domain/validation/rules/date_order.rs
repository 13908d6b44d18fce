use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;

/// Rejects trades that would settle before they were struck. Missing dates
/// are other rules' concern.
#[derive(Default)]
pub struct DateOrderRule;

#[async_trait]
impl TradeRule for DateOrderRule {
    fn name(&self) -> &str {
        "DateOrderRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let (Some(value_date), Some(trade_date)) = (trade.value_date, trade.trade_date) {
            if value_date < trade_date {
                result.push(ValidationError::new("valueDate", "valueDate before tradeDate"));
            }
        }

        result
    }
}
