use crate::domain::currency::Currency;
use crate::domain::ports::CurrencyHolidayService;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Holiday source that knows nothing. This is the default wiring when no
/// calendar feed is configured; the currency rule then skips holiday checks.
pub struct NoHolidayService;

#[async_trait]
impl CurrencyHolidayService for NoHolidayService {
    async fn fetch_holidays(&self, _currency: Currency) -> Option<HashSet<NaiveDate>> {
        None
    }
}

/// In-memory holiday calendars, for tests and local runs.
#[derive(Default)]
pub struct StaticHolidayService {
    holidays: HashMap<Currency, HashSet<NaiveDate>>,
}

impl StaticHolidayService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_holiday(&mut self, currency: Currency, date: NaiveDate) {
        self.holidays.entry(currency).or_default().insert(date);
    }
}

#[async_trait]
impl CurrencyHolidayService for StaticHolidayService {
    async fn fetch_holidays(&self, currency: Currency) -> Option<HashSet<NaiveDate>> {
        self.holidays.get(&currency).cloned()
    }
}
