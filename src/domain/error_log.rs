// src/domain/error_log.rs

use serde_json::Value;
use std::backtrace::Backtrace;

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub message: String,
    pub stack_trace: Option<String>,
    /// Whatever the failing request was working with (query, body).
    pub context: Option<Value>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack_trace: None,
            context: None,
        }
    }

    /// Attaches the current call stack.
    pub fn with_backtrace(mut self) -> Self {
        self.stack_trace = Some(Backtrace::force_capture().to_string());
        self
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}

/// Where processing errors are recorded for the site owner.
///
/// `record` returns nothing: an implementation that fails to store a
/// report must deal with it locally and never hand the failure back.
pub trait ErrorSink {
    fn record(&self, report: ErrorReport);
}
