use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Span;

/// Per-request structured log context.
///
/// Fields are recorded on the request span and kept for outer layers, which
/// find this value in the response extensions.
#[derive(Debug, Clone)]
pub struct RequestLog {
    span: Span,
    fields: Arc<Mutex<BTreeMap<&'static str, String>>>,
}

impl RequestLog {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            fields: Arc::default(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn set(&self, key: &'static str, value: String) {
        self.span.record(key, value.as_str());
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
