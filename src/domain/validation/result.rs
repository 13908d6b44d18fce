use crate::domain::trade::Trade;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One failed check: the offending trade field plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The findings of a single rule for a single trade. Empty means the rule
/// passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Chainable variant of [`push`](Self::push), handy for early returns.
    pub fn with_error(mut self, error: ValidationError) -> Self {
        self.errors.push(error);
        self
    }
}

/// The aggregated validation outcome for one trade: every rule's findings
/// merged into a field -> messages mapping.
///
/// Within one field, messages keep the order results were merged in; the
/// engine merges in registry order, so the mapping is deterministic for a
/// fixed rule set.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    trade: Arc<Trade>,
    field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new(trade: Arc<Trade>) -> Self {
        Self {
            trade,
            field_errors: BTreeMap::new(),
        }
    }

    /// Merge one rule's result into the report.
    pub fn absorb(&mut self, result: ValidationResult) {
        for error in result.errors {
            self.field_errors
                .entry(error.field)
                .or_default()
                .push(error.message);
        }
    }

    pub fn trade(&self) -> &Trade {
        &self.trade
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn field_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.field_errors
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_passes() {
        let result = ValidationResult::new();
        assert!(!result.has_errors());
    }

    #[test]
    fn test_with_error_chains() {
        let result = ValidationResult::new()
            .with_error(ValidationError::new("ccyPair", "ccyPair is blank"));
        assert!(result.has_errors());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "ccyPair");
    }

    #[test]
    fn test_report_merges_by_field_preserving_order() {
        let mut report = ValidationReport::new(Arc::new(Trade::default()));

        let mut first = ValidationResult::new();
        first.push(ValidationError::new("valueDate", "valueDate falls on weekend"));
        let mut second = ValidationResult::new();
        second.push(ValidationError::new("valueDate", "valueDate before tradeDate"));
        second.push(ValidationError::new("customer", "Customer is invalid"));

        report.absorb(first);
        report.absorb(second);

        assert!(report.has_errors());
        assert_eq!(report.error_count(), 3);
        assert_eq!(
            report.field_errors().get("valueDate").unwrap(),
            &vec![
                "valueDate falls on weekend".to_string(),
                "valueDate before tradeDate".to_string()
            ]
        );
        assert_eq!(
            report.field_errors().get("customer").unwrap(),
            &vec!["Customer is invalid".to_string()]
        );
    }

    #[test]
    fn test_report_without_findings_is_clean() {
        let mut report = ValidationReport::new(Arc::new(Trade::default()));
        report.absorb(ValidationResult::new());
        assert!(!report.has_errors());
        assert!(report.field_errors().is_empty());
        assert_eq!(report.error_count(), 0);
    }
}
