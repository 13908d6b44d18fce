use crate::application::engine::ValidationEngine;
use crate::application::registry::RuleRegistry;
use crate::config::Config;
use crate::domain::ports::CurrencyHolidayService;
use crate::domain::validation::rule::TradeRule;
use crate::domain::validation::rules::{
    CurrencyPairConfig, CurrencyPairRule, CustomerRule, DateOrderRule, LegalEntityRule,
    OptionRule, OptionRuleConfig, SpotForwardRule, WeekendRule,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The assembled validation service: the engine plus typed handles to the
/// rules whose configuration is adjustable at runtime.
///
/// Construction is explicit: every known rule is built from [`Config`] and
/// registered here. Additional rules can still be added or the whole set
/// replaced through the engine's registry.
pub struct ValidationApp {
    engine: Arc<ValidationEngine>,
    legal_entity: Arc<LegalEntityRule>,
    customer: Arc<CustomerRule>,
    spot_forward: Arc<SpotForwardRule>,
}

impl ValidationApp {
    pub fn build(config: &Config, holidays: Arc<dyn CurrencyHolidayService>) -> Self {
        let registry = Arc::new(RuleRegistry::new());

        let legal_entity = Arc::new(LegalEntityRule::new(config.legal_entities.clone()));
        let customer = Arc::new(CustomerRule::new(config.customers.clone()));
        let spot_forward = Arc::new(SpotForwardRule::new(config.spot_reference_date));

        registry.register(Arc::new(CurrencyPairRule::new(
            holidays,
            CurrencyPairConfig {
                lookup_timeout: Duration::from_millis(config.holiday_lookup_timeout_ms),
            },
        )));
        registry.register(legal_entity.clone() as Arc<dyn TradeRule>);
        registry.register(customer.clone() as Arc<dyn TradeRule>);
        registry.register(spot_forward.clone() as Arc<dyn TradeRule>);
        registry.register(Arc::new(OptionRule::new(OptionRuleConfig {
            european_styles: config.european_styles.clone(),
            american_styles: config.american_styles.clone(),
            ..OptionRuleConfig::default()
        })));
        registry.register(Arc::new(WeekendRule::new(config.weekend_days.clone())));
        registry.register(Arc::new(DateOrderRule));

        info!("Validation service built with {} rules", registry.len());

        Self {
            engine: Arc::new(ValidationEngine::new(registry)),
            legal_entity,
            customer,
            spot_forward,
        }
    }

    pub fn engine(&self) -> Arc<ValidationEngine> {
        Arc::clone(&self.engine)
    }

    // Management surface. The transport (HTTP, JMX-alike, ...) lives outside
    // this crate; these are the operations it maps onto.

    pub fn rule_names(&self) -> Vec<String> {
        self.engine.registry().rule_names()
    }

    pub fn allowed_legal_entities(&self) -> HashSet<String> {
        self.legal_entity.allowed_entities()
    }

    pub fn load_legal_entities_csv(&self, value: &str) -> HashSet<String> {
        self.legal_entity.load_entities_csv(value)
    }

    pub fn allowed_customers(&self) -> HashSet<String> {
        self.customer.allowed_customers()
    }

    pub fn load_customers_csv(&self, value: &str) -> HashSet<String> {
        self.customer.load_customers_csv(value)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.spot_forward.reference_date()
    }

    pub fn set_reference_date(&self, date: NaiveDate) {
        self.spot_forward.set_reference_date(date);
    }
}
