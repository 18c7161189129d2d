use mockito::Matcher;
use serde_json::json;
use serial_test::serial;
use wellbeing_api_client::{Api, ApiError, HttpClient};
use wellbeing_core::{ApiConfig, FileUpload, MetricsQuery, SearchOptions, API_BASE_ENV};
use wiremock::matchers::{any, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ========================================
// テスト用ヘルパー関数
// ========================================

/// テスト環境でプロキシを無効化
fn disable_proxy_for_test() {
    std::env::remove_var("HTTP_PROXY");
    std::env::remove_var("HTTPS_PROXY");
    std::env::remove_var("http_proxy");
    std::env::remove_var("https_proxy");
    std::env::set_var("NO_PROXY", "localhost,127.0.0.1");
}

/// モックサーバーを向いたAPIクライアント
fn api_for(base_url: &str) -> Api {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Api::with_http_client(&ApiConfig::new(base_url), HttpClient::with_client(client))
}

/// 受信したリクエストのクエリ文字列
async fn received_queries(mock_server: &MockServer) -> Vec<Option<String>> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.query().map(str::to_string))
        .collect()
}

// ========================================
// 基本エンドポイントのテスト
// ========================================

#[tokio::test]
async fn test_empty_base_reaches_page_origin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // 空のベースURLはページのオリジンに解決される
    let config = ApiConfig::new("").or_origin(&mock_server.uri());
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let api = Api::with_http_client(&config, HttpClient::with_client(client));

    let result = api.health().await;

    assert_eq!(result, Ok(json!({ "status": "ok" })));
}

#[tokio::test]
async fn test_health_with_trailing_slash_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&format!("{}/", mock_server.uri()));
    let result = api.health().await;

    assert_eq!(result, Ok(json!({ "status": "ok" })));
}

#[tokio::test]
async fn test_random_tip_without_mood_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tips/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tip": "Drink water" })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    api.random_tip(None).await.unwrap();

    assert_eq!(received_queries(&mock_server).await, vec![None]);
}

#[tokio::test]
async fn test_random_tip_with_mood() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tips/random"))
        .and(query_param("mood", "calm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tip": "Breathe" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let result = api.random_tip(Some("calm")).await;

    assert_eq!(result, Ok(json!({ "tip": "Breathe" })));
    assert_eq!(
        received_queries(&mock_server).await,
        vec![Some("mood=calm".to_string())]
    );
}

#[tokio::test]
async fn test_flip_cards_default_and_explicit_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flip-cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    api.flip_cards(None).await.unwrap();
    api.flip_cards(Some(5)).await.unwrap();

    assert_eq!(
        received_queries(&mock_server).await,
        vec![Some("limit=12".to_string()), Some("limit=5".to_string())]
    );
}

#[tokio::test]
async fn test_open_data_endpoints_send_coordinates() {
    let mock_server = MockServer::start().await;

    for endpoint in ["/api/open-meteo", "/api/air-quality", "/api/daylight"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("lat", "-37.81"))
            .and(query_param("lon", "144.96"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "source": endpoint })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let api = api_for(&mock_server.uri());
    assert_eq!(
        api.open_meteo(-37.81, 144.96).await,
        Ok(json!({ "source": "/api/open-meteo" }))
    );
    assert_eq!(
        api.air_quality(-37.81, 144.96).await,
        Ok(json!({ "source": "/api/air-quality" }))
    );
    assert_eq!(
        api.daylight(-37.81, 144.96).await,
        Ok(json!({ "source": "/api/daylight" }))
    );
}

#[tokio::test]
async fn test_error_status_message_is_response_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tips/random"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let error = api.random_tip(Some("unknown")).await.unwrap_err();

    assert_eq!(error.to_string(), "not found");
    assert_eq!(error.status(), Some(404));
}

// ========================================
// アップロードのテスト
// ========================================

#[tokio::test]
async fn test_speech_analyze_defaults_file_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/speech/analyze"))
        .and(body_string_contains(r#"name="file""#))
        .and(body_string_contains(r#"filename="audio.wav""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "emotion": "neutral" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let result = api.speech_analyze(FileUpload::new(b"RIFF0000WAVE".to_vec())).await;

    assert_eq!(result, Ok(json!({ "emotion": "neutral" })));
}

#[tokio::test]
async fn test_ai_predict_xlsx_defaults_file_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai/predict-xlsx"))
        .and(body_string_contains(r#"filename="data.xlsx""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": 3 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let result = api.ai_predict_xlsx(FileUpload::new(b"PK\x03\x04".to_vec())).await;

    assert_eq!(result, Ok(json!({ "rows": 3 })));
}

#[tokio::test]
async fn test_upload_keeps_file_name_and_mime_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/speech/analyze"))
        .and(body_string_contains(r#"filename="morning.webm""#))
        .and(body_string_contains("Content-Type: audio/webm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let file = FileUpload::new(vec![0x1a, 0x45, 0xdf, 0xa3])
        .with_name("morning.webm")
        .with_mime_type("audio/webm");

    assert!(api.speech_analyze(file).await.is_ok());
}

#[tokio::test]
async fn test_ai_predict_json_serializes_records() {
    #[derive(serde::Serialize)]
    struct Record {
        sleep_hours: f32,
        screen_time: u32,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ai/predict-json"))
        .and(wiremock::matchers::header("content-type", "application/json"))
        .and(wiremock::matchers::body_json(json!([
            { "sleep_hours": 7.5, "screen_time": 4 }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "predictions": [1] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let records = vec![Record {
        sleep_hours: 7.5,
        screen_time: 4,
    }];

    assert_eq!(
        api.ai_predict_json(&records).await,
        Ok(json!({ "predictions": [1] }))
    );
}

// ========================================
// 検索のテスト
// ========================================

#[tokio::test]
async fn test_blank_search_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let expected = json!({ "items": [], "total": 0, "count": 0, "limit": 30, "offset": 0 });

    assert_eq!(
        api.search_health_impact("", SearchOptions::default()).await,
        Ok(expected.clone())
    );
    assert_eq!(
        api.search_health_impact("  ", SearchOptions::default()).await,
        Ok(expected)
    );
}

#[tokio::test]
async fn test_search_sends_query_limit_and_offset() {
    let mock_server = MockServer::start().await;
    let response = json!({ "items": [{ "disease": "Influenza" }], "total": 1, "count": 1, "limit": 5, "offset": 10 });

    Mock::given(method("GET"))
        .and(path("/api/search-disease"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server.uri());
    let result = api.search_health_impact("flu", SearchOptions::new(5, 10)).await;

    assert_eq!(result, Ok(response));
    assert_eq!(
        received_queries(&mock_server).await,
        vec![Some("q=flu&limit=5&offset=10".to_string())]
    );
}

// ========================================
// メトリクスのテスト (mockito)
// ========================================

#[tokio::test]
async fn test_metrics_pass_through_params() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/metrics/stress_distribution")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("user".into(), "42".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"buckets":[1,2,3]}"#)
        .create_async()
        .await;

    let mut params = MetricsQuery::new();
    params.push(("user".to_string(), "42".to_string()));
    params.push(("from".to_string(), "2024-01-01".to_string()));

    let api = api_for(&server.url());
    let result = api.stress_distribution(&params).await;

    assert_eq!(result, Ok(json!({ "buckets": [1, 2, 3] })));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_metrics_without_params_has_no_query() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/metrics/screen_vs_stress")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let result = api.screen_vs_stress(&MetricsQuery::new()).await;

    assert_eq!(result, Ok(json!([])));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_all_named_metrics_hit_their_paths() {
    let mut server = mockito::Server::new_async().await;

    let mut mocks = Vec::new();
    for name in [
        "sleep_distribution",
        "stress_distribution",
        "diet_vs_happiness",
        "screen_vs_stress",
    ] {
        mocks.push(
            server
                .mock("GET", format!("/api/metrics/{}", name).as_str())
                .with_status(200)
                .with_body(format!(r#"{{"name":"{}"}}"#, name))
                .create_async()
                .await,
        );
    }

    let api = api_for(&server.url());
    let params = MetricsQuery::new();
    assert_eq!(api.sleep_distribution(&params).await, Ok(json!({ "name": "sleep_distribution" })));
    assert_eq!(api.stress_distribution(&params).await, Ok(json!({ "name": "stress_distribution" })));
    assert_eq!(api.diet_vs_happiness(&params).await, Ok(json!({ "name": "diet_vs_happiness" })));
    assert_eq!(api.screen_vs_stress(&params).await, Ok(json!({ "name": "screen_vs_stress" })));

    for mock in mocks {
        mock.assert_async().await;
    }
}

// ========================================
// 設定のテスト
// ========================================

#[tokio::test]
#[serial]
async fn test_api_from_env_config() {
    disable_proxy_for_test();

    let mut server = mockito::Server::new_async().await;
    std::env::set_var(API_BASE_ENV, format!("{}/", server.url()));

    let mock = server
        .mock("GET", "/health")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let api = Api::new(&ApiConfig::from_env());
    let result = api.health().await;

    assert_eq!(
        result,
        Err(ApiError::Http {
            status: 503,
            body: "maintenance".to_string()
        })
    );
    mock.assert_async().await;

    std::env::remove_var(API_BASE_ENV);
}
