//! Integration tests for the MASA clients and the orchestrator, with the
//! upstream services mocked. The poll delay is shrunk to milliseconds so
//! the bounded polling loop can be exercised in full.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use w3s_core::SentimentClass;
use w3s_masa::{analyze_tool_list, analyze_web3_sentiment, MasaClient, MasaConfig};

fn test_config(server: &MockServer) -> MasaConfig {
    MasaConfig {
        api_key: "test-key".to_string(),
        search_url: format!("{}/search", server.uri()),
        results_url: format!("{}/results/", server.uri()),
        analysis_url: format!("{}/analysis", server.uri()),
        max_results: 10,
        poll_delay: Duration::from_millis(5),
        max_poll_attempts: 5,
    }
}

fn tweets_body(count: usize) -> serde_json::Value {
    let tweets: Vec<_> = (0..count)
        .map(|i| json!({"text": format!("tweet {}", i)}))
        .collect();
    json!(tweets)
}

#[tokio::test]
async fn poll_loop_returns_items_found_on_fifth_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", "test-key"))
        .and(body_partial_json(json!({"query": "Uniswap", "max_results": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-1"})))
        .expect(1)
        .mount(&server)
        .await;

    // Still running for the first four polls, results on the fifth.
    Mock::given(method("GET"))
        .and(path("/results/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "RUNNING"})))
        .up_to_n_times(4)
        .expect(4)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets_body(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let tweets = client.search_tweets("Uniswap").await;

    assert_eq!(tweets.len(), 3);
    assert_eq!(tweets[0].body(), "tweet 0");
}

#[tokio::test]
async fn poll_loop_gives_up_after_five_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "RUNNING"})))
        .expect(5)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let tweets = client.search_tweets("Solana").await;

    assert!(tweets.is_empty());
}

#[tokio::test]
async fn done_status_without_items_ends_polling_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-3"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "DONE"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let tweets = client.search_tweets("Tezos").await;

    assert!(tweets.is_empty());
}

#[tokio::test]
async fn failed_polls_consume_attempts_but_do_not_abort() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-4"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-4"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets_body(2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let tweets = client.search_tweets("Aave").await;

    assert_eq!(tweets.len(), 2);
}

#[tokio::test]
async fn failed_submission_returns_empty_without_polling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets_body(3)))
        .expect(0)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    assert!(client.search_tweets("Ethereum").await.is_empty());
}

#[tokio::test]
async fn submission_without_job_id_returns_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets_body(1)))
        .expect(0)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    assert!(client.search_tweets("Ethereum").await.is_empty());
}

#[tokio::test]
async fn missing_analysis_field_yields_placeholder_narrative() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let insights = client
        .analyze_tweets(&["some tweet".to_string()], "Solana")
        .await;

    assert_eq!(insights.as_deref(), Some("Analysis not available."));
}

#[tokio::test]
async fn empty_tweet_list_skips_the_analysis_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"analysis": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    assert!(client.analyze_tweets(&[], "Solana").await.is_none());
}

#[tokio::test]
async fn negative_narrative_marks_technology_as_declining() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-5"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets_body(10)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/analysis"))
        .and(body_partial_json(json!({
            "prompt": "Analyze the sentiment of these tweets about Uniswap"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analysis": "The tweets are broadly negative about fees and volume."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let result = analyze_web3_sentiment(&client, "Uniswap").await;

    assert_eq!(result.tool, "Uniswap");
    assert_eq!(result.category, "DeFi");
    assert_eq!(result.sentiment, SentimentClass::TrendingDown);
    assert_eq!(result.tweet_count, 10);
    assert!(result.insights.unwrap().contains("negative"));
    assert!(result
        .alternatives
        .unwrap()
        .contains(&"SushiSwap".to_string()));
}

#[tokio::test]
async fn unknown_technology_without_tweets_degrades_to_neutral() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "job-6"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/job-6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "DONE"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"analysis": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let result = analyze_web3_sentiment(&client, "UnknownXYZ").await;

    assert_eq!(result.tool, "UnknownXYZ");
    assert_eq!(result.sentiment, SentimentClass::Neutral);
    assert_eq!(result.tweet_count, 0);
    assert_eq!(result.category, "Others");
    assert!(result.insights.is_none());
    assert!(result.alternatives.is_none());
}

#[tokio::test]
async fn tool_list_is_capped_at_five_in_input_order() {
    let server = MockServer::start().await;

    // One failed submission per analyzed technology; each degrades to a
    // neutral result without polling.
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&server)
        .await;

    let client = MasaClient::new(test_config(&server));
    let tools: Vec<String> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = analyze_tool_list(&client, &tools).await;

    assert_eq!(results.len(), 5);
    let analyzed: Vec<&str> = results.iter().map(|r| r.tool.as_str()).collect();
    assert_eq!(analyzed, vec!["A", "B", "C", "D", "E"]);
}
