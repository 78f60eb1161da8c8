//! Metrics for provider calls.
//!
//! Provides OpenTelemetry-based metrics for tracking provider latency and failures.
//! No exporter is installed here; without one the instruments are no-ops.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;
use storyboard_error::ProviderErrorKind;

static METRICS: OnceLock<ProviderMetrics> = OnceLock::new();

/// Metrics for provider interactions, labelled by provider and model.
#[derive(Clone)]
pub struct ProviderMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful provider requests
    pub requests: Counter<u64>,
    /// Failed provider requests
    pub errors: Counter<u64>,
    /// Provider call duration in seconds
    pub duration: Histogram<f64>,
}

impl ProviderMetrics {
    fn init() -> Self {
        let meter = global::meter("storyboard_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Successful provider requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed provider requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Provider call duration")
                .build(),
        }
    }

    /// Get the global provider metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful provider request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed provider request.
    pub fn record_error(&self, provider: &str, model: &str, kind: &ProviderErrorKind) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_label(kind)),
        ];
        self.errors.add(1, labels);
    }
}

/// Label a provider failure for metrics.
fn error_label(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::Transport(_) => "transport",
        ProviderErrorKind::Api { status: 429, .. } => "rate_limit",
        ProviderErrorKind::Api { status: 401 | 403, .. } => "auth",
        ProviderErrorKind::Api { status, .. } if *status >= 500 => "server",
        ProviderErrorKind::Api { .. } => "invalid_request",
        ProviderErrorKind::MalformedResponse(_) => "malformed_response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_are_labelled_by_status() {
        let api = |status| ProviderErrorKind::Api {
            status,
            message: String::new(),
        };
        assert_eq!(error_label(&api(429)), "rate_limit");
        assert_eq!(error_label(&api(401)), "auth");
        assert_eq!(error_label(&api(503)), "server");
        assert_eq!(error_label(&api(400)), "invalid_request");
    }
}
