pub mod result;
pub mod rule;
pub mod rules;

pub use result::{ValidationError, ValidationReport, ValidationResult};
pub use rule::TradeRule;
