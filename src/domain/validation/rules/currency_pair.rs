use crate::domain::currency::Currency;
use crate::domain::ports::CurrencyHolidayService;
use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Configuration for currency pair validation
#[derive(Debug, Clone)]
pub struct CurrencyPairConfig {
    /// Upper bound on a single holiday lookup. An expired lookup is treated
    /// as "no holidays known" so a slow calendar source cannot stall the
    /// whole report.
    pub lookup_timeout: Duration,
}

impl Default for CurrencyPairConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_millis(500),
        }
    }
}

/// Validates the 6-character currency pair and, when a value date is
/// present, checks it against each currency's holiday calendar.
///
/// The blank and length checks return immediately (there is nothing to parse
/// without a 6-character pair); everything after that accumulates, so an
/// invalid first code never hides a holiday collision on the second.
pub struct CurrencyPairRule {
    holidays: Arc<dyn CurrencyHolidayService>,
    config: CurrencyPairConfig,
}

impl CurrencyPairRule {
    pub fn new(holidays: Arc<dyn CurrencyHolidayService>, config: CurrencyPairConfig) -> Self {
        Self { holidays, config }
    }

    async fn check_currency(
        &self,
        ordinal: u8,
        code: &str,
        value_date: Option<NaiveDate>,
        result: &mut ValidationResult,
    ) {
        let currency = match code.parse::<Currency>() {
            Ok(currency) => currency,
            Err(_) => {
                warn!("Currency {} '{}' is not a valid ISO code", ordinal, code);
                result.push(ValidationError::new(
                    "ccyPair",
                    format!("Currency {} is not valid", ordinal),
                ));
                return;
            }
        };

        if let Some(date) = value_date {
            if self.is_holiday(date, currency).await {
                warn!("valueDate {} is a {} holiday", date, currency);
                result.push(ValidationError::new(
                    "ccyPair",
                    format!("valueDate matches to holiday for Currency {}", ordinal),
                ));
            }
        }
    }

    async fn is_holiday(&self, date: NaiveDate, currency: Currency) -> bool {
        match timeout(
            self.config.lookup_timeout,
            self.holidays.fetch_holidays(currency),
        )
        .await
        {
            Ok(Some(dates)) => dates.contains(&date),
            Ok(None) => {
                debug!("No holiday calendar known for {}", currency);
                false
            }
            Err(_) => {
                warn!(
                    "Holiday lookup for {} timed out after {:?}, skipping holiday check",
                    currency, self.config.lookup_timeout
                );
                false
            }
        }
    }
}

#[async_trait]
impl TradeRule for CurrencyPairRule {
    fn name(&self) -> &str {
        "CurrencyPairRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        let pair = trade.ccy_pair.as_deref().unwrap_or("");
        if pair.trim().is_empty() {
            warn!("ccyPair is blank");
            return result.with_error(ValidationError::new("ccyPair", "ccyPair is blank"));
        }

        // Two concatenated ISO codes, 3 chars each. Counted in chars, not
        // bytes, so a multibyte pair is a length finding rather than a
        // broken split below.
        if pair.chars().count() != 6 {
            warn!("ccyPair '{}' length should be 6", pair);
            return result.with_error(ValidationError::new("ccyPair", "ccyPair length should be 6"));
        }

        if trade.value_date.is_none() {
            warn!("valueDate is missing, holiday checks skipped");
            result.push(ValidationError::new("valueDate", "valueDate is missing"));
        }

        let first: String = pair.chars().take(3).collect();
        let second: String = pair.chars().skip(3).collect();
        self.check_currency(1, &first, trade.value_date, &mut result)
            .await;
        self.check_currency(2, &second, trade.value_date, &mut result)
            .await;

        result
    }
}
