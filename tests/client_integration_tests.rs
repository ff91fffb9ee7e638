use std::time::Duration;

use charex::api::{CharacterSource, FetchError, RickAndMortyClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> RickAndMortyClient {
    RickAndMortyClient::new(
        format!("{}/api/character", server.uri()),
        Duration::from_secs(2),
    )
    .unwrap()
}

fn page_body(next: Option<&str>, characters: &[(u32, &str, &str)]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = characters
        .iter()
        .map(|(id, name, status)| {
            serde_json::json!({
                "id": id,
                "name": name,
                "status": status,
                "species": "Human",
                "type": "",
                "gender": "unknown",
                "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
            })
        })
        .collect();
    serde_json::json!({
        "info": { "count": 826, "pages": 42, "next": next, "prev": null },
        "results": results,
    })
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_fetch_page_sends_page_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            Some("https://rickandmortyapi.com/api/character?page=3"),
            &[(21, "Aqua Morty", "unknown"), (22, "Aqua Rick", "unknown")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server).fetch_page(2).await.unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "Aqua Morty");
    assert_eq!(page.results[1].status, "unknown");
    assert!(!page.is_last());
}

#[tokio::test]
async fn test_last_page_is_detected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(None, &[(826, "Butter Robot", "Alive")])),
        )
        .mount(&mock_server)
        .await;

    let page = client_for(&mock_server).fetch_page(42).await.unwrap();
    assert!(page.is_last());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_page_past_the_end_is_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"There is nothing here"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_page(43).await.unwrap_err();
    assert!(err.is_exhausted());
    match err {
        FetchError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("nothing here"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_page(1).await.unwrap_err();
    assert!(!err.is_exhausted());
    assert_eq!(
        err,
        FetchError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_page(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_slow_server_times_out_as_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(None, &[]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = RickAndMortyClient::new(
        format!("{}/api/character", mock_server.uri()),
        Duration::from_millis(200),
    )
    .unwrap();
    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = RickAndMortyClient::new(
        "http://127.0.0.1:1/api/character".to_string(),
        Duration::from_secs(1),
    )
    .unwrap();

    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
