//! REST handlers for the mock questionnaire API.

use axum::extract::{rejection::QueryRejection, Path, Query, State};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::api_error::{ApiError, MockResponse};
use crate::adapters::audit_trail::AuditTrailGenerator;
use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::dates::DateInput;
use crate::domain::{
    Member, MemberDirectory, QuestionnaireDetail, QuestionnaireFilter, QuestionnairePort,
    QuestionnaireStatus, QuestionnaireSummary, StatusConfig,
};

type ApiResult<T> = Result<MockResponse<T>, ApiError>;

/// Shared context handed to every handler. Built once at startup; tests swap in
/// fixture-backed stores.
#[derive(Clone)]
pub struct ApiState {
    pub questionnaires: Arc<dyn QuestionnairePort>,
    pub members: Arc<MemberDirectory>,
    pub audit_trail: Arc<AuditTrailGenerator>,
    pub metrics: Arc<MetricsCollector>,
}

impl ApiState {
    fn observe<T>(&self, endpoint: &str, result: ApiResult<T>) -> ApiResult<T> {
        let code = match &result {
            Ok(response) => response.code,
            Err(e) => e.status_code().as_u16(),
        };
        self.metrics.record_request(endpoint, code);
        result
    }
}

// ============================================================================
// Questionnaires
// ============================================================================

/// Optional list narrowing. `status` and `type` take comma separated values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub assignee: Option<String>,
    pub keyword: Option<String>,
    pub created_from: Option<String>,
    pub created_to: Option<String>,
}

fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, ApiError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|raw| {
        raw.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<T>().map_err(|e| ApiError::BadRequest(e.to_string())))
            .collect()
    })
    .unwrap_or_else(|| Ok(Vec::new()))
}

fn parse_bound(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let input = match raw.parse::<i64>() {
        Ok(ms) => DateInput::Timestamp(ms),
        Err(_) => DateInput::Text(raw.to_string()),
    };
    input
        .parse()
        .map(|dt| Some(dt.timestamp_millis()))
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl TryFrom<ListQuery> for QuestionnaireFilter {
    type Error = ApiError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            statuses: parse_list(query.status.as_deref())?,
            types: parse_list(query.kind.as_deref())?,
            assignee: non_empty(query.assignee),
            created_range: (
                parse_bound(query.created_from.as_deref())?,
                parse_bound(query.created_to.as_deref())?,
            ),
            keyword: non_empty(query.keyword),
        })
    }
}

pub async fn list_questionnaires(
    State(state): State<ApiState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Vec<QuestionnaireSummary>> {
    let result = async {
        let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        let filter = QuestionnaireFilter::try_from(query)?;
        if !filter.is_empty() {
            tracing::debug!("Listing questionnaires with {:?}", filter);
        }
        let summaries = state.questionnaires.list_questionnaires(&filter).await?;
        Ok::<_, ApiError>(MockResponse::success(summaries))
    }
    .await;
    state.observe("questionnaire_list", result)
}

pub async fn get_questionnaire(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<QuestionnaireDetail> {
    let result = async {
        let questionnaire = state
            .questionnaires
            .get_questionnaire(&id)
            .await?
            .ok_or_else(|| ApiError::not_found("Questionnaire", id.as_str()))?;

        let now = Utc::now();
        let audit_logs = state.audit_trail.generate(now).await;
        state
            .metrics
            .audit_entries_generated
            .inc_by(audit_logs.len() as f64);

        Ok::<_, ApiError>(MockResponse::success(QuestionnaireDetail {
            questionnaire,
            last_modified: now.timestamp_millis(),
            audit_logs,
        }))
    }
    .await;
    state.observe("questionnaire_detail", result)
}

pub async fn list_statuses(State(state): State<ApiState>) -> ApiResult<Vec<StatusConfig>> {
    let configs = QuestionnaireStatus::ALL.iter().map(|s| s.config()).collect();
    state.observe("questionnaire_statuses", Ok(MockResponse::success(configs)))
}

// ============================================================================
// Members
// ============================================================================

pub async fn list_members(State(state): State<ApiState>) -> ApiResult<Vec<Member>> {
    let members = state.members.members().to_vec();
    state.observe("member_list", Ok(MockResponse::success(members)))
}

pub async fn get_member(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Member> {
    let result = state
        .members
        .member_details(Some(id.as_str()))
        .cloned()
        .map(MockResponse::success)
        .ok_or_else(|| ApiError::not_found("Member", id.as_str()));
    state.observe("member_detail", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_empty_query_is_empty_filter() {
        let filter = QuestionnaireFilter::try_from(ListQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_query_parsing() {
        let query = ListQuery {
            status: Some("Started, Ready for Review".to_string()),
            kind: Some("GDPR".to_string()),
            assignee: Some(" ".to_string()),
            keyword: Some("bio".to_string()),
            created_from: Some("2025-01-01".to_string()),
            created_to: Some("1767225600000".to_string()),
        };
        let filter = QuestionnaireFilter::try_from(query).unwrap();
        assert_eq!(
            filter.statuses,
            vec![QuestionnaireStatus::Started, QuestionnaireStatus::ReadyForReview]
        );
        assert_eq!(filter.types.len(), 1);
        assert!(filter.assignee.is_none());
        assert_eq!(filter.keyword.as_deref(), Some("bio"));
        assert_eq!(filter.created_range, (Some(1_735_689_600_000), Some(1_767_225_600_000)));
    }

    #[test]
    fn test_query_rejects_unknown_status() {
        let query = ListQuery {
            status: Some("Archived".to_string()),
            ..Default::default()
        };
        let err = QuestionnaireFilter::try_from(query).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_query_rejects_bad_date() {
        let query = ListQuery {
            created_from: Some("someday".to_string()),
            ..Default::default()
        };
        assert!(QuestionnaireFilter::try_from(query).is_err());
    }
}
