//! Error taxonomy for the adapter.
//!
//! Only initialization failures are allowed to escape the handler boundary;
//! every other error is converted into a well-formed proxy response.

use std::fmt;

/// Errors raised while translating, initializing, or executing a request.
#[derive(Debug)]
pub enum AdapterError {
    /// Inbound event missing required fields or carrying an undecodable body
    MalformedEvent(String),
    /// First-call setup failed; fatal, the platform replaces the process
    Initialization(String),
    /// A registered route's logic failed
    HandlerExecution(String),
}

impl AdapterError {
    /// Status code of the response this error maps to. `Initialization` never
    /// becomes a response, but a 500 is the closest mapping if it ever did.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MalformedEvent(_) => 400,
            Self::Initialization(_) | Self::HandlerExecution(_) => 500,
        }
    }

    /// Stable error type name reported to clients and in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "MalformedEventError",
            Self::Initialization(_) => "InitializationError",
            Self::HandlerExecution(_) => "HandlerExecutionError",
        }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEvent(msg) => write!(f, "Malformed event: {msg}"),
            Self::Initialization(msg) => write!(f, "Initialization failed: {msg}"),
            Self::HandlerExecution(msg) => write!(f, "Handler execution failed: {msg}"),
        }
    }
}

impl std::error::Error for AdapterError {}

impl From<anyhow::Error> for AdapterError {
    fn from(error: anyhow::Error) -> Self {
        // Use {:#} to keep the full error chain with causes
        Self::HandlerExecution(format!("{error:#}"))
    }
}
