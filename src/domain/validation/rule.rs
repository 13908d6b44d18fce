use crate::domain::trade::Trade;
use crate::domain::validation::result::ValidationResult;
use async_trait::async_trait;

/// Contract for a single validation rule.
///
/// Rules are pure given their own configuration: they never mutate the
/// trade, never panic on malformed input (missing or invalid fields become
/// `ValidationError`s) and must be safe to run concurrently with themselves
/// and with every other rule. A rule that cannot complete a check because of
/// an infrastructure failure logs the degradation and reports nothing for
/// that check (fail-open) instead of aborting the whole report.
#[async_trait]
pub trait TradeRule: Send + Sync {
    /// Rule name for logging and the management surface.
    fn name(&self) -> &str;

    /// Evaluate the trade. Always returns a result; empty means pass.
    async fn evaluate(&self, trade: &Trade) -> ValidationResult;
}
