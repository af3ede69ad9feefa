//! Startup wiring: build the pool once, freeze it, and assemble the context the
//! router serves from.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::adapters::api_handler::ApiState;
use crate::adapters::audit_trail::AuditTrailGenerator;
use crate::adapters::fixtures::fixture_pool;
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use crate::adapters::mock_generator::QuestionnaireGenerator;
use crate::adapters::questionnaire_store::InMemoryQuestionnaireStore;
use crate::config::{PoolSource, Settings};
use crate::domain::dates::{format_date, DateInput};
use crate::domain::validation::PoolValidator;
use crate::domain::{MemberDirectory, Questionnaire};

/// Everything `create_app` needs.
pub struct MockBackend {
    pub state: ApiState,
    pub health: Arc<HealthHandler>,
    pub metrics: Arc<MetricsHandler>,
}

impl MockBackend {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::build(settings, Utc::now())
    }

    /// Same as [`MockBackend::from_settings`] with an explicit anchor time, so a
    /// fixed seed yields an identical pool.
    pub fn build(settings: &Settings, anchor: DateTime<Utc>) -> anyhow::Result<Self> {
        let seed = settings.mock.seed.unwrap_or_else(rand::random);
        info!("Building questionnaire pool from {:?} source with seed {}", settings.mock.source, seed);

        let members = MemberDirectory::new(settings.members.clone());
        let (pool, audit_seed) = seed_pool(settings, &members, seed, anchor);

        let violations = PoolValidator::report(&pool);
        if violations > 0 {
            tracing::warn!("Pool built with {} validation violation(s)", violations);
        }
        for q in &pool {
            info!(
                "Seeded {} [{}] for {} due {}",
                q.id,
                q.status,
                q.customer_name,
                format_date(Some(&DateInput::Timestamp(q.due_date)))
            );
        }

        let collector = Arc::new(MetricsCollector::new()?);
        collector.pool_questionnaires.set(pool.len() as f64);

        let store = Arc::new(InMemoryQuestionnaireStore::new(pool));
        let audit_trail = AuditTrailGenerator::seeded(audit_seed)
            .with_entry_count(settings.mock.min_audit_logs, settings.mock.max_audit_logs);

        Ok(Self {
            state: ApiState {
                questionnaires: store.clone(),
                members: Arc::new(members),
                audit_trail: Arc::new(audit_trail),
                metrics: collector.clone(),
            },
            health: Arc::new(HealthHandler::new(store)),
            metrics: Arc::new(MetricsHandler::new(collector)),
        })
    }
}

/// Builds the pool for the configured source. Also returns the seed for the
/// audit trail, drawn from the same stream so one seed reproduces a session.
pub fn seed_pool(
    settings: &Settings,
    members: &MemberDirectory,
    seed: u64,
    anchor: DateTime<Utc>,
) -> (Vec<Questionnaire>, u64) {
    let mut generator = QuestionnaireGenerator::seeded(seed, anchor)
        .with_question_count(settings.mock.min_questions, settings.mock.max_questions)
        .with_assignees(members.ids().map(str::to_string).collect());

    let pool = match settings.mock.source {
        PoolSource::Generated => generator.build_pool(),
        PoolSource::Fixtures => fixture_pool(anchor),
    };
    (pool, generator.fork_seed())
}
