use super::common::test_server::TestServer;
use themis::config::PoolSource;

#[tokio::test]
async fn test_browse_then_open_detail() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let list: serde_json::Value = client
        .get(server.url("/api/questionnaires"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let summaries = list["data"].as_array().unwrap();
    assert_eq!(summaries.len(), 5);

    for summary in summaries {
        let id = summary["id"].as_str().unwrap();
        let response = client
            .get(server.url(&format!("/api/questionnaires/{}", id)))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let detail: serde_json::Value = response.json().await.unwrap();
        assert_eq!(detail["data"]["id"], id);
        assert_eq!(detail["data"]["status"], summary["status"]);
        assert!(detail["data"]["auditLogs"].as_array().unwrap().len() >= 1);
    }
}

#[tokio::test]
async fn test_unknown_questionnaire_is_404() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/questionnaires/Q-777"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 404);
    assert!(body["message"].as_str().unwrap().contains("Q-777"));
}

#[tokio::test]
async fn test_assignees_resolve_to_members() {
    let server = TestServer::with_source(PoolSource::Fixtures).await;
    let client = reqwest::Client::new();

    let list: serde_json::Value = client
        .get(server.url("/api/questionnaires"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for summary in list["data"].as_array().unwrap() {
        let detail: serde_json::Value = client
            .get(server.url(&format!("/api/questionnaires/{}", summary["id"].as_str().unwrap())))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let assignee = detail["data"]["assignee"].as_str().unwrap();

        let response = client
            .get(server.url(&format!("/api/members/{}", assignee)))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/questionnaire-statuses"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
