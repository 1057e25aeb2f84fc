use crate::fixtures::serve;
use printer_status::fetch::{build_http_client, fetch_all};
use printer_status::FetchError;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_batch_has_at_most_one_result_per_url() {
    let server = MockServer::start().await;
    serve(&server, "/ok1", ResponseTemplate::new(200).set_body_string("1")).await;
    serve(&server, "/ok2", ResponseTemplate::new(200).set_body_string("2")).await;
    serve(&server, "/gone", ResponseTemplate::new(410)).await;
    serve(
        &server,
        "/hang",
        ResponseTemplate::new(200).set_delay(Duration::from_secs(2)),
    )
    .await;

    let urls: Vec<String> = ["/ok1", "/gone", "/hang", "/ok2"]
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    let client = build_http_client("TestAgent/1.0").unwrap();
    let pages = fetch_all(&client, &urls, 2, Duration::from_millis(200))
        .await
        .unwrap();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for page in &pages {
        *counts.entry(page.url.as_str()).or_default() += 1;
    }

    assert_eq!(pages.len(), 2);
    assert_eq!(counts.get(urls[0].as_str()), Some(&1));
    assert_eq!(counts.get(urls[3].as_str()), Some(&1));

    // Every URL was attempted before fetch_all returned.
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_unreachable_host_is_empty_result() {
    // Nothing listens on port 1.
    let urls = vec![
        "http://127.0.0.1:1/a".to_string(),
        "http://127.0.0.1:1/b".to_string(),
    ];
    let client = build_http_client("TestAgent/1.0").unwrap();
    let result = fetch_all(&client, &urls, 4, Duration::from_millis(300)).await;

    assert!(matches!(result, Err(FetchError::EmptyResult { attempted: 2 })));
}
