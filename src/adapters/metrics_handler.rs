use prometheus::{Counter, CounterVec, Encoder, Gauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

pub struct MetricsCollector {
    registry: Registry,

    pub requests_total: CounterVec,
    pub pool_questionnaires: Gauge,
    pub audit_entries_generated: Counter,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = CounterVec::new(
            Opts::new("themis_requests_total", "Total number of mock API requests"),
            &["endpoint", "code"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let pool_questionnaires = Gauge::new(
            "themis_pool_questionnaires",
            "Number of questionnaires in the served pool",
        )?;
        registry.register(Box::new(pool_questionnaires.clone()))?;

        let audit_entries_generated = Counter::new(
            "themis_audit_entries_generated_total",
            "Total audit log entries synthesized for detail responses",
        )?;
        registry.register(Box::new(audit_entries_generated.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            pool_questionnaires,
            audit_entries_generated,
        })
    }

    pub fn record_request(&self, endpoint: &str, code: u16) {
        self.requests_total
            .with_label_values(&[endpoint, &code.to_string()])
            .inc();
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsHandler {
    collector: Arc<MetricsCollector>,
}

impl MetricsHandler {
    pub fn new(collector: Arc<MetricsCollector>) -> Self {
        Self { collector }
    }

    pub async fn metrics(&self) -> String {
        self.collector.encode().unwrap_or_else(|e| {
            tracing::error!("Failed to encode metrics: {}", e);
            String::from("# Error encoding metrics\n")
        })
    }
}
