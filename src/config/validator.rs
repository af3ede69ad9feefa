use std::collections::HashMap;
use thiserror::Error;

use crate::config::{MockSettings, ServerSettings, Settings};
use crate::domain::Member;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_mock(&settings.mock) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_members(&settings.members) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_mock(mock: &MockSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if mock.min_questions > mock.max_questions {
            errors.push(ValidationError::InvalidValue {
                field: "mock.min_questions".to_string(),
                reason: format!(
                    "min_questions ({}) exceeds max_questions ({})",
                    mock.min_questions, mock.max_questions
                ),
            });
        }

        if mock.min_audit_logs == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "mock.min_audit_logs".to_string(),
                reason: "At least one audit log entry is required".to_string(),
            });
        }

        if mock.min_audit_logs > mock.max_audit_logs {
            errors.push(ValidationError::InvalidValue {
                field: "mock.min_audit_logs".to_string(),
                reason: format!(
                    "min_audit_logs ({}) exceeds max_audit_logs ({})",
                    mock.min_audit_logs, mock.max_audit_logs
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_members(members: &[Member]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_ids = HashMap::new();

        for (idx, member) in members.iter().enumerate() {
            if let Some(prev_idx) = seen_ids.insert(&member.id, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Member id '{}' appears at indices {} and {}",
                    member.id, prev_idx, idx
                )));
            }

            if member.id.is_empty() {
                errors.push(ValidationError::MissingField(format!("members[{}].id", idx)));
            }

            if member.name.is_empty() {
                errors.push(ValidationError::MissingField(format!("members[{}].name", idx)));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
