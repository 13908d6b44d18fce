use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use chrono::{Datelike, Weekday};
use std::collections::HashSet;

/// Rejects value dates that fall on a non-working day of the week.
pub struct WeekendRule {
    weekend_days: HashSet<Weekday>,
}

impl WeekendRule {
    pub fn new(weekend_days: HashSet<Weekday>) -> Self {
        Self { weekend_days }
    }
}

impl Default for WeekendRule {
    fn default() -> Self {
        Self::new(HashSet::from([Weekday::Sat, Weekday::Sun]))
    }
}

#[async_trait]
impl TradeRule for WeekendRule {
    fn name(&self) -> &str {
        "WeekendRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(value_date) = trade.value_date {
            if self.weekend_days.contains(&value_date.weekday()) {
                result.push(ValidationError::new(
                    "valueDate",
                    "valueDate falls on a non-working day of week",
                ));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade_with_value_date(s: &str) -> Trade {
        Trade {
            value_date: Some(s.parse::<NaiveDate>().unwrap()),
            ..Trade::default()
        }
    }

    #[tokio::test]
    async fn test_saturday_rejected() {
        // 2016-08-13 was a Saturday
        let result = WeekendRule::default()
            .evaluate(&trade_with_value_date("2016-08-13"))
            .await;
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "valueDate");
    }

    #[tokio::test]
    async fn test_sunday_rejected() {
        let result = WeekendRule::default()
            .evaluate(&trade_with_value_date("2016-08-14"))
            .await;
        assert!(result.has_errors());
    }

    #[tokio::test]
    async fn test_weekday_passes() {
        let result = WeekendRule::default()
            .evaluate(&trade_with_value_date("2016-08-15"))
            .await;
        assert!(!result.has_errors());
    }

    #[tokio::test]
    async fn test_missing_value_date_not_this_rules_concern() {
        let result = WeekendRule::default().evaluate(&Trade::default()).await;
        assert!(!result.has_errors());
    }

    #[tokio::test]
    async fn test_custom_weekend_days() {
        // Friday/Saturday weekend
        let rule = WeekendRule::new(HashSet::from([Weekday::Fri, Weekday::Sat]));
        assert!(
            rule.evaluate(&trade_with_value_date("2016-08-12"))
                .await
                .has_errors()
        );
        assert!(
            !rule
                .evaluate(&trade_with_value_date("2016-08-14"))
                .await
                .has_errors()
        );
    }
}
