// Currency codes (ISO 4217)
pub mod currency;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Trade record
pub mod trade;

// Validation result model, rule contract and concrete rules
pub mod validation;
