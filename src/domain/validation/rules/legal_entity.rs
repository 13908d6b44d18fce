use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::info;

/// Validates that the counterparty legal entity is one of the allowed
/// entities. Only one entity is traded with by default: CS Zurich.
///
/// The allow-list is replaceable at runtime through the management surface;
/// in-flight evaluations see either the old or the new set, never a mix.
pub struct LegalEntityRule {
    allowed: RwLock<HashSet<String>>,
}

impl LegalEntityRule {
    pub fn new(allowed: HashSet<String>) -> Self {
        Self {
            allowed: RwLock::new(allowed),
        }
    }

    pub fn allowed_entities(&self) -> HashSet<String> {
        self.allowed
            .read()
            .expect("legal entity allow-list lock poisoned")
            .clone()
    }

    pub fn replace_entities(&self, allowed: HashSet<String>) {
        info!("Replacing allowed legal entities: {:?}", allowed);
        *self
            .allowed
            .write()
            .expect("legal entity allow-list lock poisoned") = allowed;
    }

    /// Load the allow-list from a comma-separated string, returning the set
    /// that is now active.
    pub fn load_entities_csv(&self, value: &str) -> HashSet<String> {
        let entities: HashSet<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self.replace_entities(entities.clone());
        entities
    }
}

impl Default for LegalEntityRule {
    fn default() -> Self {
        Self::new(HashSet::from(["CS Zurich".to_string()]))
    }
}

#[async_trait]
impl TradeRule for LegalEntityRule {
    fn name(&self) -> &str {
        "LegalEntityRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        let allowed = self
            .allowed
            .read()
            .expect("legal entity allow-list lock poisoned");
        let valid = trade
            .legal_entity
            .as_deref()
            .is_some_and(|entity| allowed.contains(entity));

        if !valid {
            result.push(ValidationError::new("legalEntity", "Legal entity is invalid"));
        }

        result
    }
}
