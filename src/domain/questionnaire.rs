//! Questionnaire domain types.
//!
//! Every status and type is a closed enumeration; the wire names match what the
//! front end expects (`"Ready for Review"`, `"SOC 2"`, `"readyToApprove"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionnaireStatus {
    Processing,
    Started,
    #[serde(rename = "Ready for Review")]
    ReadyForReview,
    Approved,
    Completed,
}

impl QuestionnaireStatus {
    pub const ALL: [QuestionnaireStatus; 5] = [
        QuestionnaireStatus::Processing,
        QuestionnaireStatus::Started,
        QuestionnaireStatus::ReadyForReview,
        QuestionnaireStatus::Approved,
        QuestionnaireStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Started => "Started",
            Self::ReadyForReview => "Ready for Review",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
        }
    }

    /// Display configuration used by the list and detail views.
    pub fn config(&self) -> StatusConfig {
        let (label, tag_type, icon) = match self {
            Self::Processing => ("Processing", TagType::Default, "mdi:progress-clock"),
            Self::Started => ("In Progress", TagType::Info, "mdi:play-circle"),
            Self::ReadyForReview => ("Ready for Review", TagType::Warning, "mdi:file-document-edit"),
            Self::Approved => ("Approved", TagType::Success, "mdi:check-circle"),
            Self::Completed => ("Completed", TagType::Primary, "mdi:flag-checkered"),
        };
        StatusConfig {
            value: *self,
            label: label.to_string(),
            tag_type,
            icon: Some(icon.to_string()),
        }
    }
}

impl fmt::Display for QuestionnaireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "questionnaire status",
                value: s.to_string(),
            })
    }
}

/// Questionnaire category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionnaireType {
    Security,
    Compliance,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "SOC 2")]
    Soc2,
    Vendor,
    Custom,
}

impl QuestionnaireType {
    pub const ALL: [QuestionnaireType; 6] = [
        QuestionnaireType::Security,
        QuestionnaireType::Compliance,
        QuestionnaireType::Gdpr,
        QuestionnaireType::Soc2,
        QuestionnaireType::Vendor,
        QuestionnaireType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Compliance => "Compliance",
            Self::Gdpr => "GDPR",
            Self::Soc2 => "SOC 2",
            Self::Vendor => "Vendor",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for QuestionnaireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "questionnaire type",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Review state of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionStatus {
    Approved,
    ReadyToApprove,
    Flagged,
    Answered,
    UnAnswered,
}

/// Question ids are strings for generated data and integers for the static
/// question bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub status: QuestionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Question {
    /// True when the question carries a non-empty answer.
    pub fn has_answer(&self) -> bool {
        self.answer.as_deref().is_some_and(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub id: String,
    pub status: QuestionnaireStatus,
    pub customer_name: String,
    #[serde(rename = "type")]
    pub kind: QuestionnaireType,
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub progress: u8,
    pub created_at: i64,
    pub updated_at: i64,
    pub due_date: i64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Questionnaire {
    pub fn summary(&self) -> QuestionnaireSummary {
        QuestionnaireSummary {
            id: self.id.clone(),
            status: self.status,
            customer_name: self.customer_name.clone(),
            kind: self.kind,
            due_date: self.due_date,
            progress: self.progress,
        }
    }
}

/// Reduced view returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    pub id: String,
    pub status: QuestionnaireStatus,
    pub customer_name: String,
    #[serde(rename = "type")]
    pub kind: QuestionnaireType,
    pub due_date: i64,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Created,
    Updated,
    Reviewed,
    Approved,
}

impl AuditAction {
    pub const ALL: [AuditAction; 4] = [
        AuditAction::Created,
        AuditAction::Updated,
        AuditAction::Reviewed,
        AuditAction::Approved,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: i64,
    pub action: AuditAction,
    pub operator: String,
}

/// Full record plus the metadata synthesized for each detail request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDetail {
    #[serde(flatten)]
    pub questionnaire: Questionnaire,
    pub last_modified: i64,
    pub audit_logs: Vec<AuditLogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Default,
    Info,
    Success,
    Warning,
    Primary,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfig {
    pub value: QuestionnaireStatus,
    pub label: String,
    pub tag_type: TagType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Criteria for narrowing the questionnaire list. An empty filter matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireFilter {
    pub statuses: Vec<QuestionnaireStatus>,
    pub types: Vec<QuestionnaireType>,
    pub assignee: Option<String>,
    /// Inclusive `createdAt` bounds in milliseconds.
    pub created_range: (Option<i64>, Option<i64>),
    pub keyword: Option<String>,
}

impl QuestionnaireFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, q: &Questionnaire) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&q.status) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&q.kind) {
            return false;
        }
        if let Some(assignee) = &self.assignee {
            if &q.assignee != assignee {
                return false;
            }
        }
        let (from, to) = self.created_range;
        if from.is_some_and(|from| q.created_at < from) || to.is_some_and(|to| q.created_at > to) {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !q.customer_name.to_lowercase().contains(&keyword)
                && !q.id.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        true
    }
}
