use async_trait::async_trait;

pub mod dates;
pub mod member;
pub mod questionnaire;
pub mod validation;

pub use member::{Member, MemberDirectory};
pub use questionnaire::{
    AuditAction, AuditLogEntry, Question, QuestionId, QuestionStatus, Questionnaire,
    QuestionnaireDetail, QuestionnaireFilter, QuestionnaireStatus, QuestionnaireSummary,
    QuestionnaireType, StatusConfig,
};

/// Read access to the questionnaire pool.
#[async_trait]
pub trait QuestionnairePort: Send + Sync {
    async fn list_questionnaires(
        &self,
        filter: &QuestionnaireFilter,
    ) -> anyhow::Result<Vec<QuestionnaireSummary>>;

    /// Exact id match; `None` when the id is not in the pool.
    async fn get_questionnaire(&self, id: &str) -> anyhow::Result<Option<Questionnaire>>;

    async fn count(&self) -> usize;
}
