use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Questionnaire, QuestionnaireFilter, QuestionnairePort, QuestionnaireSummary};

/// The frozen pool. Built once before serving and only read afterwards, so it
/// is shared without a lock.
#[derive(Clone)]
pub struct InMemoryQuestionnaireStore {
    pool: Arc<Vec<Questionnaire>>,
}

impl InMemoryQuestionnaireStore {
    pub fn new(pool: Vec<Questionnaire>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl QuestionnairePort for InMemoryQuestionnaireStore {
    async fn list_questionnaires(
        &self,
        filter: &QuestionnaireFilter,
    ) -> Result<Vec<QuestionnaireSummary>> {
        Ok(self
            .pool
            .iter()
            .filter(|q| filter.matches(q))
            .map(Questionnaire::summary)
            .collect())
    }

    async fn get_questionnaire(&self, id: &str) -> Result<Option<Questionnaire>> {
        Ok(self.pool.iter().find(|q| q.id == id).cloned())
    }

    async fn count(&self) -> usize {
        self.pool.len()
    }
}
