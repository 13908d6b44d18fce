// Explicit construction of the rule set
pub mod bootstrap;

// Validation orchestration core
pub mod engine;

// Active rule set with snapshot semantics
pub mod registry;
