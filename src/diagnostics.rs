//! Sinks for raw response bodies.

use crate::config::DiagnosticsConfig;
use crate::error::Operation;
use crate::traits::DiagnosticSink;
use crate::utils::truncate_text;
use std::sync::Arc;
use tracing::debug;

/// Emits each response body as a `debug` event on the `linkedin_pub_rs::response` target.
#[derive(Debug, Clone)]
pub struct TracingSink {
    max_body_bytes: usize,
}

impl TracingSink {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(DiagnosticsConfig::default().max_body_bytes)
    }
}

impl DiagnosticSink for TracingSink {
    fn response_body(&self, operation: Operation, status: u16, body: &str) {
        debug!(
            target: "linkedin_pub_rs::response",
            operation = operation.as_str(),
            status,
            bytes = body.len(),
            "{}",
            truncate_text(body, self.max_body_bytes)
        );
    }
}

/// Discards response bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn response_body(&self, _operation: Operation, _status: u16, _body: &str) {}
}

/// Picks the sink the configuration asks for.
pub fn sink_for(config: &DiagnosticsConfig) -> Arc<dyn DiagnosticSink> {
    if config.log_response_bodies {
        Arc::new(TracingSink::new(config.max_body_bytes))
    } else {
        Arc::new(NoopSink)
    }
}
