//! Metrics for chat-completion calls.
//!
//! Counters and a latency histogram on the global OpenTelemetry meter,
//! labeled by provider and model. Recording is a no-op until the host
//! installs a meter provider.

use crate::Usage;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use scenesense_error::{ModelsErrorKind, ModelsResult, ProviderErrorKind};
use scenesense_interface::ProviderKind;
use std::sync::OnceLock;
use std::time::Instant;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Instruments for chat-completion calls.
#[derive(Clone)]
pub struct LlmMetrics {
    requests: Counter<u64>,
    errors: Counter<u64>,
    duration: Histogram<f64>,
    tokens: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("scenesense_llm");

        Self {
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Successful chat-completion calls")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed chat-completion calls")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("s")
                .with_description("Chat-completion round-trip time")
                .build(),
            tokens: meter
                .u64_counter("llm.tokens")
                .with_description("Tokens reported by the provider")
                .build(),
        }
    }

    /// Process-wide instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Start timing a call to `model` on `provider`.
    pub fn start(provider: ProviderKind, model: &str) -> CallTimer {
        CallTimer {
            provider,
            model: model.to_string(),
            started: Instant::now(),
        }
    }

    /// Record provider-reported token usage.
    pub fn record_tokens(&self, provider: ProviderKind, model: &str, usage: &Usage) {
        let mut labels = base_labels(provider, model);
        labels.push(KeyValue::new("kind", "prompt"));
        self.tokens.add(*usage.prompt_tokens(), &labels);
        if let Some(kind) = labels.last_mut() {
            *kind = KeyValue::new("kind", "completion");
        }
        self.tokens.add(*usage.completion_tokens(), &labels);
    }
}

fn base_labels(provider: ProviderKind, model: &str) -> Vec<KeyValue> {
    vec![
        KeyValue::new("provider", provider.name()),
        KeyValue::new("model", model.to_string()),
    ]
}

/// In-flight call measurement, consumed by [`CallTimer::finish`].
#[derive(Debug)]
#[must_use = "a timer records nothing until finished"]
pub struct CallTimer {
    provider: ProviderKind,
    model: String,
    started: Instant,
}

impl CallTimer {
    /// Record success with latency, or failure with its class.
    pub fn finish<T>(self, outcome: &ModelsResult<T>) {
        let metrics = LlmMetrics::get();
        let mut labels = base_labels(self.provider, &self.model);
        match outcome {
            Ok(_) => {
                metrics.requests.add(1, &labels);
                metrics
                    .duration
                    .record(self.started.elapsed().as_secs_f64(), &labels);
            }
            Err(e) => {
                labels.push(KeyValue::new("error_type", classify_error(&e.kind)));
                metrics.errors.add(1, &labels);
            }
        }
    }
}

/// Classify a provider failure for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "invalid_request", "server",
/// "timeout", "network", "parse".
///
/// # Examples
///
/// ```
/// use scenesense_error::{ModelsErrorKind, ProviderErrorKind};
/// use scenesense_models::classify_error;
///
/// let kind = ModelsErrorKind::Groq(ProviderErrorKind::Api {
///     status: 429,
///     message: "Rate limit reached".to_string(),
/// });
/// assert_eq!(classify_error(&kind), "rate_limit");
/// ```
pub fn classify_error(kind: &ModelsErrorKind) -> &'static str {
    let (ModelsErrorKind::Groq(provider_kind) | ModelsErrorKind::Qubrid(provider_kind)) = kind;

    match provider_kind {
        ProviderErrorKind::Api { status: 429, .. } => "rate_limit",
        ProviderErrorKind::Api {
            status: 401 | 403, ..
        } => "auth",
        ProviderErrorKind::Api { status, .. } if *status >= 500 => "server",
        ProviderErrorKind::Api { .. } | ProviderErrorKind::RequestConversion(_) => {
            "invalid_request"
        }
        ProviderErrorKind::Transport(message) if message.contains("timed out") => "timeout",
        ProviderErrorKind::Transport(_) => "network",
        ProviderErrorKind::ResponseParsing(_) => "parse",
    }
}
