use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::RwLock;
use tracing::info;

/// Checks the value date against the spot settlement convention.
///
/// Relative to a configured reference date: a Spot trade must settle exactly
/// two calendar days later, a Forward strictly later than that. Other
/// instrument types are not this rule's concern.
pub struct SpotForwardRule {
    reference_date: RwLock<NaiveDate>,
}

impl SpotForwardRule {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: RwLock::new(reference_date),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        *self
            .reference_date
            .read()
            .expect("reference date lock poisoned")
    }

    pub fn set_reference_date(&self, date: NaiveDate) {
        info!("Replacing spot/forward reference date: {}", date);
        *self
            .reference_date
            .write()
            .expect("reference date lock poisoned") = date;
    }
}

#[async_trait]
impl TradeRule for SpotForwardRule {
    fn name(&self) -> &str {
        "SpotForwardRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        let spot_date = self.reference_date() + Duration::days(2);

        match trade.instrument.as_deref() {
            Some("Spot") => match trade.value_date {
                None => result.push(ValidationError::new(
                    "valueDate",
                    "valueDate is missing for Spot trade",
                )),
                Some(value_date) if value_date != spot_date => {
                    result.push(ValidationError::new(
                        "valueDate",
                        "Spot trade valueDate should be 2 days after the reference date",
                    ));
                }
                Some(_) => {}
            },
            Some("Forward") => match trade.value_date {
                None => result.push(ValidationError::new(
                    "valueDate",
                    "valueDate is missing for Forward trade",
                )),
                Some(value_date) if value_date <= spot_date => {
                    result.push(ValidationError::new(
                        "valueDate",
                        "Forward trade valueDate should be more than 2 days after the reference date",
                    ));
                }
                Some(_) => {}
            },
            _ => {}
        }

        result
    }
}
