//! Diagnostics emitted by `ResourceClient` for every failed operation
//!
//! The client never surfaces errors to its callers; instead each failure is
//! reported here before the operation returns `None`.

use parking_lot::Mutex;
use tracing::{error, warn};

use crate::error::{ClientError, FailureKind};

/// One failed operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Operation name, e.g. "list_notices"
    pub operation: &'static str,
    pub kind: FailureKind,
    /// Operation input, e.g. "page=1 size=5" or "id=7"
    pub context: String,
    /// Underlying error text
    pub detail: String,
}

impl Diagnostic {
    pub fn from_error(operation: &'static str, context: String, err: &ClientError) -> Self {
        Self {
            operation,
            kind: err.kind(),
            context,
            detail: err.to_string(),
        }
    }
}

/// Observability sink for client failures
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that emits `tracing` events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.kind {
            // The server answered; it just said no
            FailureKind::Application => warn!(
                operation = diagnostic.operation,
                kind = %diagnostic.kind,
                context = %diagnostic.context,
                "API returned error: {}",
                diagnostic.detail
            ),
            _ => error!(
                operation = diagnostic.operation,
                kind = %diagnostic.kind,
                context = %diagnostic.context,
                "Request failed: {}",
                diagnostic.detail
            ),
        }
    }
}

/// Sink that keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}
