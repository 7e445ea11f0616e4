//! Errors raised while parsing a stack trace
//!
//! Text without any frames is not an error; it parses to an empty list.

use thiserror::Error;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StacktraceError {
    /// The matching engine could not run: the pattern failed to compile or the
    /// input exceeded a configured resource limit.
    #[error("pattern execution failed: {0}")]
    PatternExecution(String),

    /// A match survived filtering but could not be turned into a frame.
    #[error("malformed frame at byte {offset}: {reason}")]
    MalformedFrame { offset: usize, reason: String },
}

impl StacktraceError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        StacktraceError::MalformedFrame {
            offset,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StacktraceError>;
