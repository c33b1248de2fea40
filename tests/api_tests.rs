use std::{sync::Arc, time::Duration};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

use wikilearn_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers::configure,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    services::{
        content_service::ContentService, generator::TextGenerator,
        wikipedia_service::WikipediaClient,
    },
};

/// Answers every prompt with the same text.
struct CannedGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str, _max_tokens: u32, _temperature: f32) -> AppResult<String> {
        Ok(self.0.to_string())
    }
}

fn config(endpoint: String) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        wikipedia_api_endpoint: endpoint,
        wikipedia_user_agent: "wikilearn-server-tests".to_string(),
        http_timeout_secs: 5,
        openai_api_key: None,
        openai_api_base: None,
        openai_model: "gpt-4o".to_string(),
        generation_timeout_secs: 5,
        generation_timeout_retries: 0,
        cors_allowed_origins: Vec::new(),
    }
}

fn state(server: &MockServer, generator: Option<Arc<dyn TextGenerator>>) -> AppState {
    let config = config(format!("{}/w/api.php", server.uri()));
    let wikipedia = WikipediaClient::from_config(&config).unwrap();
    let content_service = ContentService::new(generator, Duration::from_secs(5));
    AppState::with_services(Arc::new(wikipedia), content_service, config)
}

async fn call(state: AppState, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RequestIdMiddleware)
            .configure(configure),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn test_article_feed_returns_all_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "continue": {"gsroffset": 10, "continue": "gsroffset||"},
            "query": {"pages": {
                "1": {"title": "Optics", "index": 1, "extract": "Optics studies light. More text.",
                      "fullurl": "https://en.wikipedia.org/wiki/Optics",
                      "thumbnail": {"source": "https://upload.wikimedia.org/o.jpg"}},
                "2": {"title": "Heat", "index": 2, "extract": "Heat is energy",
                      "fullurl": "https://en.wikipedia.org/wiki/Heat"},
                "3": {"title": "Sound", "index": 3, "extract": "Sound is a vibration.",
                      "fullurl": "https://en.wikipedia.org/wiki/Sound",
                      "original": {"source": "https://upload.wikimedia.org/s.png"}}
            }}
        })))
        .mount(&server)
        .await;

    let (status, body) = call(
        state(&server, None),
        test::TestRequest::get().uri("/api/articles/Science/Physics?images_only=false"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 3);
    for article in articles {
        let extract = article["extract"].as_str().unwrap();
        assert!(extract.ends_with('.') && !extract.ends_with(".."));
    }
    assert_eq!(articles[1]["image"], Value::Null);
    assert_eq!(body["continue"], "10");
}

#[actix_web::test]
async fn test_article_feed_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = call(
        state(&server, None),
        test::TestRequest::get().uri("/api/articles/Science/Physics"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert_eq!(body["articles"], json!([]));
}

#[actix_web::test]
async fn test_generate_exercise_returns_generator_output() {
    let server = MockServer::start().await;
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator("X"));

    let (status, body) = call(
        state(&server, Some(generator)),
        test::TestRequest::post().uri("/api/generate-exercise").set_json(json!({
            "article_title": "Photosynthesis",
            "english_level": "intermediate",
            "exercise_type": "grammar"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "exercise": "X"}));
}

#[actix_web::test]
async fn test_generate_without_key_serves_fallback() {
    let server = MockServer::start().await;

    let (status, body) = call(
        state(&server, None),
        test::TestRequest::post().uri("/api/generate-summary").set_json(json!({
            "article_title": "Photosynthesis",
            "english_level": "unknown"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("Photosynthesis"));
    assert!(summary.contains("Intermediate (B1-B2)"));
}

#[actix_web::test]
async fn test_generate_lesson_with_unreachable_article() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator("<h1>Lesson</h1>"));

    let (status, body) = call(
        state(&server, Some(generator)),
        test::TestRequest::post()
            .uri("/api/generate-lesson")
            .set_json(json!({"article_title": "Photosynthesis"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "lesson": "<h1>Lesson</h1>"}));
}

#[actix_web::test]
async fn test_health_reports_generation_state() {
    let server = MockServer::start().await;
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator("X"));

    let (status, body) = call(
        state(&server, Some(generator)),
        test::TestRequest::get().uri("/health"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generation_configured"], true);
}
