use std::collections::HashSet;
use thiserror::Error;

use crate::domain::questionnaire::{QuestionStatus, Questionnaire, QuestionnaireStatus};

#[derive(Debug, Error, PartialEq)]
pub enum PoolViolation {
    #[error("Progress {progress} out of range in questionnaire {id}")]
    ProgressOutOfRange { id: String, progress: u8 },

    #[error("Questionnaire {id} has status {status} with progress {progress}")]
    ProgressStatusMismatch {
        id: String,
        status: QuestionnaireStatus,
        progress: u8,
    },

    #[error("Question {question} in questionnaire {id} is {status:?} but answer presence is {has_answer}")]
    AnswerMismatch {
        id: String,
        question: String,
        status: QuestionStatus,
        has_answer: bool,
    },

    #[error("Duplicate question id {question} in questionnaire {id}")]
    DuplicateQuestion { id: String, question: String },

    #[error("Duplicate questionnaire id {0}")]
    DuplicateQuestionnaire(String),
}

/// Advisory checks over a freshly built pool. Callers log the violations; the
/// pool is served regardless. Status and type membership is not checked here:
/// both are closed enums and unknown values fail to deserialize.
pub struct PoolValidator;

impl PoolValidator {
    pub fn validate(pool: &[Questionnaire]) -> Result<(), Vec<PoolViolation>> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        for q in pool {
            if !seen_ids.insert(q.id.as_str()) {
                errors.push(PoolViolation::DuplicateQuestionnaire(q.id.clone()));
            }
            errors.extend(Self::validate_questionnaire(q));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_questionnaire(q: &Questionnaire) -> Vec<PoolViolation> {
        let mut errors = Vec::new();

        if q.progress > 100 {
            errors.push(PoolViolation::ProgressOutOfRange {
                id: q.id.clone(),
                progress: q.progress,
            });
        }
        if (q.progress == 100) != (q.status == QuestionnaireStatus::Approved) {
            errors.push(PoolViolation::ProgressStatusMismatch {
                id: q.id.clone(),
                status: q.status,
                progress: q.progress,
            });
        }

        let mut seen_questions = HashSet::new();
        for question in &q.questions {
            if !seen_questions.insert(&question.id) {
                errors.push(PoolViolation::DuplicateQuestion {
                    id: q.id.clone(),
                    question: question.id.to_string(),
                });
            }
            let has_answer = question.has_answer();
            if has_answer == (question.status == QuestionStatus::UnAnswered) {
                errors.push(PoolViolation::AnswerMismatch {
                    id: q.id.clone(),
                    question: question.id.to_string(),
                    status: question.status,
                    has_answer,
                });
            }
        }

        errors
    }

    /// Runs the checks and logs every violation. Returns the violation count.
    pub fn report(pool: &[Questionnaire]) -> usize {
        match Self::validate(pool) {
            Ok(()) => 0,
            Err(violations) => {
                for violation in &violations {
                    tracing::error!("{}", violation);
                }
                violations.len()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{Question, QuestionId, QuestionnaireType};
    use serde_json::json;

    fn questionnaire(id: &str, status: QuestionnaireStatus, progress: u8) -> Questionnaire {
        Questionnaire {
            id: id.to_string(),
            status,
            customer_name: "Pfizer".to_string(),
            kind: QuestionnaireType::Vendor,
            assignee: "john".to_string(),
            collaborators: vec![],
            description: None,
            file: None,
            notes: None,
            progress,
            created_at: 0,
            updated_at: 0,
            due_date: 0,
            questions: vec![],
        }
    }

    #[test]
    fn test_valid_pool() {
        let pool = vec![
            questionnaire("Q-001", QuestionnaireStatus::Started, 50),
            questionnaire("Q-002", QuestionnaireStatus::Approved, 100),
        ];
        assert!(PoolValidator::validate(&pool).is_ok());
        assert_eq!(PoolValidator::report(&pool), 0);
    }

    #[test]
    fn test_progress_convention() {
        let pool = vec![
            questionnaire("Q-001", QuestionnaireStatus::Completed, 100),
            questionnaire("Q-002", QuestionnaireStatus::Approved, 99),
        ];
        let errors = PoolValidator::validate(&pool).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, PoolViolation::ProgressStatusMismatch { .. })));
    }

    #[test]
    fn test_duplicates_and_answers() {
        let mut q = questionnaire("Q-001", QuestionnaireStatus::Started, 10);
        q.questions = vec![
            Question {
                id: QuestionId::Number(1),
                text: "a".to_string(),
                status: QuestionStatus::UnAnswered,
                answer: Some("Yes".to_string()),
            },
            Question {
                id: QuestionId::Number(1),
                text: "b".to_string(),
                status: QuestionStatus::Answered,
                answer: Some(String::new()),
            },
        ];
        let pool = vec![q.clone(), q];
        let errors = PoolValidator::validate(&pool).unwrap_err();

        assert!(errors.contains(&PoolViolation::DuplicateQuestionnaire("Q-001".to_string())));
        assert_eq!(
            errors
                .iter()
                .filter(|e| matches!(e, PoolViolation::AnswerMismatch { .. }))
                .count(),
            4
        );
        assert_eq!(PoolValidator::report(&pool), errors.len());
    }

    #[test]
    fn test_unknown_status_or_type_never_reaches_pool() {
        let mut record = serde_json::to_value(questionnaire("Q-001", QuestionnaireStatus::Started, 10)).unwrap();
        assert!(serde_json::from_value::<Questionnaire>(record.clone()).is_ok());

        record["status"] = json!("Archived");
        assert!(serde_json::from_value::<Questionnaire>(record.clone()).is_err());

        record["status"] = json!("Started");
        record["type"] = json!("HIPAA");
        assert!(serde_json::from_value::<Questionnaire>(record).is_err());
    }
}
