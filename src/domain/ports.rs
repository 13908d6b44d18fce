use crate::domain::currency::Currency;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// External source of currency holiday calendars.
///
/// `None` means "no holidays known for this currency" and is never an
/// error; rules that consult this port fail open when it cannot answer.
#[async_trait]
pub trait CurrencyHolidayService: Send + Sync {
    async fn fetch_holidays(&self, currency: Currency) -> Option<HashSet<NaiveDate>>;
}
