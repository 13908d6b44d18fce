use crate::domain::trade::Trade;
use crate::domain::validation::result::{ValidationError, ValidationResult};
use crate::domain::validation::rule::TradeRule;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::info;

/// Validates that the customer is in the supported customer list.
pub struct CustomerRule {
    allowed: RwLock<HashSet<String>>,
}

impl CustomerRule {
    pub fn new(allowed: HashSet<String>) -> Self {
        Self {
            allowed: RwLock::new(allowed),
        }
    }

    pub fn allowed_customers(&self) -> HashSet<String> {
        self.allowed
            .read()
            .expect("customer allow-list lock poisoned")
            .clone()
    }

    pub fn replace_customers(&self, allowed: HashSet<String>) {
        info!("Replacing allowed customers: {:?}", allowed);
        *self
            .allowed
            .write()
            .expect("customer allow-list lock poisoned") = allowed;
    }

    /// Load the allow-list from a comma-separated string, returning the set
    /// that is now active.
    pub fn load_customers_csv(&self, value: &str) -> HashSet<String> {
        let customers: HashSet<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self.replace_customers(customers.clone());
        customers
    }
}

impl Default for CustomerRule {
    fn default() -> Self {
        Self::new(HashSet::from(["PLUTO1".to_string(), "PLUTO2".to_string()]))
    }
}

#[async_trait]
impl TradeRule for CustomerRule {
    fn name(&self) -> &str {
        "CustomerRule"
    }

    async fn evaluate(&self, trade: &Trade) -> ValidationResult {
        let mut result = ValidationResult::new();

        let allowed = self
            .allowed
            .read()
            .expect("customer allow-list lock poisoned");
        let valid = trade
            .customer
            .as_deref()
            .is_some_and(|customer| allowed.contains(customer));

        if !valid {
            result.push(ValidationError::new("customer", "Customer is invalid"));
        }

        result
    }
}
