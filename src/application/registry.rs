use crate::domain::validation::rule::TradeRule;
use std::sync::{Arc, RwLock};
use tracing::info;

/// The process-wide set of active validation rules.
///
/// Copy-on-write: the set is stored as an `Arc<Vec<...>>` that writers swap
/// wholesale, so a snapshot taken by a reader is internally consistent for
/// as long as it is held. Writers serialize on the lock; readers only clone
/// the outer `Arc`.
pub struct RuleRegistry {
    rules: RwLock<Arc<Vec<Arc<dyn TradeRule>>>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Append a rule to the active set.
    pub fn register(&self, rule: Arc<dyn TradeRule>) {
        let mut guard = self.rules.write().expect("rule registry lock poisoned");
        info!("Registering rule: {}", rule.name());
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(rule);
        *guard = Arc::new(next);
    }

    /// Replace the whole active set atomically.
    pub fn replace_all(&self, rules: Vec<Arc<dyn TradeRule>>) {
        let mut guard = self.rules.write().expect("rule registry lock poisoned");
        info!(
            "Replacing rule set: {:?}",
            rules.iter().map(|r| r.name()).collect::<Vec<_>>()
        );
        *guard = Arc::new(rules);
    }

    /// A consistent view of the active set. Never partially updated;
    /// concurrent registrations do not affect a snapshot already taken.
    pub fn snapshot(&self) -> Arc<Vec<Arc<dyn TradeRule>>> {
        Arc::clone(&self.rules.read().expect("rule registry lock poisoned"))
    }

    /// Names of the active rules, for the management surface.
    pub fn rule_names(&self) -> Vec<String> {
        self.snapshot().iter().map(|r| r.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
