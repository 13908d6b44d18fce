use crate::application::registry::RuleRegistry;
use crate::domain::errors::EngineError;
use crate::domain::trade::Trade;
use crate::domain::validation::result::ValidationReport;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info};

/// Orchestrates the rule fan-out for each trade and gates new work behind a
/// reversible shutdown flag.
///
/// Every rule in the registry snapshot runs as its own tokio task against
/// the shared immutable trade; the fan-in waits for all of them (no early
/// return on first error) and merges their results in registry order, which
/// keeps the report deterministic for a fixed rule set.
pub struct ValidationEngine {
    registry: Arc<RuleRegistry>,
    shutdown_requested: AtomicBool,
}

impl ValidationEngine {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            shutdown_requested: AtomicBool::new(false),
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate one trade against every registered rule.
    ///
    /// Fails only when shutdown has been requested; every other condition,
    /// including a trade that violates every rule, produces a full report.
    pub async fn validate(&self, trade: Trade) -> Result<ValidationReport, EngineError> {
        if self.is_shutdown_requested() {
            debug!("Rejecting validation request: shutdown in progress");
            return Err(EngineError::ShutdownInProgress);
        }

        let trade = Arc::new(trade);
        let rules = self.registry.snapshot();

        let mut handles = Vec::with_capacity(rules.len());
        for rule in rules.iter() {
            let rule = Arc::clone(rule);
            let trade = Arc::clone(&trade);
            handles.push(tokio::spawn(
                async move { rule.evaluate(&trade).await },
            ));
        }

        let mut report = ValidationReport::new(trade);
        for (handle, rule) in handles.into_iter().zip(rules.iter()) {
            match handle.await {
                Ok(result) => report.absorb(result),
                // A panicking rule is a defect in that rule; the report
                // still covers every other rule's findings.
                Err(join_error) => {
                    error!("Rule {} panicked: {}", rule.name(), join_error);
                }
            }
        }

        debug!(
            "Validated trade against {} rules, {} error(s)",
            rules.len(),
            report.error_count()
        );
        Ok(report)
    }

    /// Validate a batch, one report per trade in input order.
    ///
    /// Trades are independent; each one's shutdown eligibility is checked at
    /// the moment its own validation begins, so a shutdown arriving mid-batch
    /// rejects the remaining trades without touching completed ones.
    pub async fn validate_bulk(
        &self,
        trades: Vec<Trade>,
    ) -> Vec<Result<ValidationReport, EngineError>> {
        let mut reports = Vec::with_capacity(trades.len());
        for trade in trades {
            reports.push(self.validate(trade).await);
        }
        reports
    }

    /// Stop accepting new validation work. Idempotent; in-flight work is
    /// unaffected.
    pub fn request_shutdown(&self) {
        if !self.shutdown_requested.swap(true, Ordering::SeqCst) {
            info!("Shutdown requested: new validation work will be rejected");
        }
    }

    /// Resume accepting work. Idempotent.
    pub fn cancel_shutdown(&self) {
        if self.shutdown_requested.swap(false, Ordering::SeqCst) {
            info!("Shutdown cancelled: validation work accepted again");
        }
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}
