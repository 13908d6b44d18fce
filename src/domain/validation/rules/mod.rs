pub mod currency_pair;
pub mod customer;
pub mod date_order;
pub mod legal_entity;
pub mod option_style;
pub mod spot_forward;
pub mod weekend;

pub use currency_pair::{CurrencyPairConfig, CurrencyPairRule};
pub use customer::CustomerRule;
pub use date_order::DateOrderRule;
pub use legal_entity::LegalEntityRule;
pub use option_style::{BoundaryPolicy, OptionRule, OptionRuleConfig};
pub use spot_forward::SpotForwardRule;
pub use weekend::WeekendRule;
