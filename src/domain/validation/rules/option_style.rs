use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use tracing::warn;

/// Inclusivity of the American exercise window bounds.
///
/// The exercise start date must fall between trade date and expiry date;
/// whether each bound itself is allowed is configurable. Default is
/// inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPolicy {
    pub inclusive_start: bool,
    pub inclusive_end: bool,
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self {
            inclusive_start: true,
            inclusive_end: true,
        }
    }
}

/// Configuration for option validation
#[derive(Debug, Clone)]
pub struct OptionRuleConfig {
    /// Accepted names for European style, compared case-insensitively
    pub european_styles: Vec<String>,
    /// Accepted names for American style, compared case-insensitively
    pub american_styles: Vec<String>,
    pub exercise_window: BoundaryPolicy,
}

impl Default for OptionRuleConfig {
    fn default() -> Self {
        Self {
            european_styles: vec!["EUROPEAN".to_string()],
            american_styles: vec!["AMERICAN".to_string()],
            exercise_window: BoundaryPolicy::default(),
        }
    }
}

/// Validates option-product fields: the style name, the expiry/premium vs
/// delivery date ordering, and for American options the exercise window.
///
/// Non-option instruments are ignored. All checks accumulate.
pub struct OptionRule {
    config: OptionRuleConfig,
}

impl OptionRule {
    pub fn new(config: OptionRuleConfig) -> Self {
        Self { config }
    }

    fn matches_any(names: &[String], style: &str) -> bool {
        names.iter().any(|name| name.eq_ignore_ascii_case(style))
    }
}

impl Default for OptionRule {
    fn default() -> Self {
        Self::new(OptionRuleConfig::default())
    }
}

#[async_trait]
impl TradeRule for OptionRule {
    fn name(&self) -> &str {
        "OptionRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !trade.is_option() {
            return result;
        }

        let style = trade.style.as_deref().unwrap_or("");
        let is_european = Self::matches_any(&self.config.european_styles, style);
        let is_american = Self::matches_any(&self.config.american_styles, style);
        if !is_european && !is_american {
            warn!("Unknown option style '{}'", style);
            result.push(ValidationError::new("style", "Invalid style value"));
        }

        match trade.delivery_date {
            None => result.push(ValidationError::new("deliveryDate", "deliveryDate is missing")),
            Some(delivery) => {
                if let Some(expiry) = trade.expiry_date {
                    if expiry >= delivery {
                        result.push(ValidationError::new(
                            "expiryDate",
                            "expiryDate should be before deliveryDate",
                        ));
                    }
                }
                if let Some(premium) = trade.premium_date {
                    if premium >= delivery {
                        result.push(ValidationError::new(
                            "premiumDate",
                            "premiumDate should be before deliveryDate",
                        ));
                    }
                }
            }
        }
        if trade.expiry_date.is_none() {
            result.push(ValidationError::new("expiryDate", "expiryDate is missing"));
        }
        if trade.premium_date.is_none() {
            result.push(ValidationError::new("premiumDate", "premiumDate is missing"));
        }

        if is_american {
            let window = self.config.exercise_window;
            match trade.excercise_start_date {
                None => result.push(ValidationError::new(
                    "excerciseStartDate",
                    "excerciseStartDate is missing for american style option",
                )),
                Some(start) => {
                    if let Some(trade_date) = trade.trade_date {
                        let after_trade = if window.inclusive_start {
                            start >= trade_date
                        } else {
                            start > trade_date
                        };
                        if !after_trade {
                            result.push(ValidationError::new(
                                "excerciseStartDate",
                                "excerciseStartDate should be after tradeDate",
                            ));
                        }
                    }
                    if let Some(expiry) = trade.expiry_date {
                        let before_expiry = if window.inclusive_end {
                            start <= expiry
                        } else {
                            start < expiry
                        };
                        if !before_expiry {
                            result.push(ValidationError::new(
                                "excerciseStartDate",
                                "excerciseStartDate should be before expiryDate",
                            ));
                        }
                    }
                }
            }
        }

        result
    }
}
