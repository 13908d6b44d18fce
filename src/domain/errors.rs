use thiserror::Error;

/// Request-level failures produced by the validation engine itself.
///
/// Field-level findings are data (part of the report), never errors; the
/// only exceptional condition the engine raises is the shutdown gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("validation service is shutting down, new requests are rejected")]
    ShutdownInProgress,
}

/// A string that is not a known ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid ISO 4217 currency code")]
pub struct CurrencyParseError(pub String);
