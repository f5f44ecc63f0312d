use breed_cards::app::{render, OutputFormat};
use breed_cards::{project, ApiClient, AppError, BreedBoard, BreedFetcher, HttpClient};
use httpmock::prelude::*;
use std::collections::HashSet;

#[tokio::test]
async fn test_end_to_end_breed_cards() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/breeds/list/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "message": {"akita": [], "beagle": ["pocket"]},
                "status": "success"
            }));
    });

    let board = BreedBoard::with_client(ApiClient::new(server.url("/api")));
    let cards = board.refresh().await.unwrap();

    api_mock.assert();
    assert_eq!(cards.len(), 2);
    let titles: HashSet<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, HashSet::from(["akita", "beagle"]));
    assert!(cards.iter().all(|c| c.content == "Breed info goes here."));

    let page = render(OutputFormat::Text, "Home Page", &cards).unwrap();
    assert!(page.contains("[ akita ]"));
    assert!(page.contains("[ beagle ]"));
}

#[tokio::test]
async fn test_fetcher_yields_every_breed_exactly_once() {
    let names: Vec<String> = (0..40).map(|i| format!("breed-{:02}", i)).collect();
    let message: serde_json::Map<String, serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let subs: Vec<String> = (0..i % 3).map(|j| format!("sub-{}", j)).collect();
            (n.clone(), serde_json::json!(subs))
        })
        .collect();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/breeds/list/all");
        then.status(200)
            .json_body(serde_json::json!({"message": message, "status": "success"}));
    });

    let fetcher = BreedFetcher::new(ApiClient::new(server.base_url()));
    let breeds = fetcher.fetch_breeds().await.unwrap();

    assert_eq!(breeds.len(), names.len());
    let unique: HashSet<&String> = breeds.iter().collect();
    assert_eq!(unique.len(), names.len());
    assert!(names.iter().all(|n| unique.contains(n)));
}

#[tokio::test]
async fn test_server_error_leaves_board_unchanged() {
    let server = MockServer::start();
    let mut ok_mock = server.mock(|when, then| {
        when.method(GET).path("/breeds/list/all");
        then.status(200)
            .json_body(serde_json::json!({"message": {"pug": []}, "status": "success"}));
    });

    let board = BreedBoard::with_client(ApiClient::new(server.base_url()));
    board.refresh().await.unwrap();
    ok_mock.assert();
    ok_mock.delete();

    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/breeds/list/all");
        then.status(500);
    });

    let err = board.refresh().await.unwrap_err();

    failing_mock.assert();
    assert!(matches!(err, AppError::RequestError { .. }));
    assert!(err.to_string().contains("/breeds/list/all"));
    assert_eq!(board.breeds().await, vec!["pug"]);
    assert_eq!(board.cards().await, project(&["pug"]));
}

#[tokio::test]
async fn test_malformed_payload_is_format_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/breeds/list/all");
        then.status(200)
            .json_body(serde_json::json!({"status": "success", "breeds": ["akita"]}));
    });

    let board = BreedBoard::with_client(ApiClient::new(server.base_url()));
    let err = board.refresh().await.unwrap_err();

    assert!(matches!(err, AppError::FormatError { .. }));
    assert!(board.breeds().await.is_empty());
}

#[tokio::test]
async fn test_unreachable_origin() {
    let client = ApiClient::new("http://127.0.0.1:1/api");
    let err = client.get("/breeds/list/all").await.unwrap_err();

    assert!(matches!(err, AppError::RequestError { .. }));
    assert!(err.to_string().contains("/breeds/list/all"));
}
