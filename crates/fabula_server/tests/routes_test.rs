//! HTTP surface tests: the story endpoint, health, and CORS.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use fabula_error::{BackendError, BackendErrorKind, FabulaResult};
use fabula_interface::StoryDriver;
use fabula_server::app;

struct FakeDriver {
    reply: Option<String>,
}

#[async_trait]
impl StoryDriver for FakeDriver {
    async fn complete(&self, _prompt: &str) -> FabulaResult<String> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(BackendError::new(
                "fake",
                BackendErrorKind::Timeout(120),
            )
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

fn valid_set_json() -> String {
    let story = r#"{"title":"The Shifting Atlas","genre_subgenre":"fantasy / cartographic","premise":"Every map she draws is wrong by morning. The borders move. Someone is moving them.","main_characters":[{"name":"Ivo","role":"protagonist","personality":"meticulous","motivation":"truth"},{"name":"Sela","role":"rival","personality":"charming","motivation":"profit"}],"central_conflict":"who controls the territory controls the map","themes":["ownership","perception"],"tone_and_style":"wry, precise","why_it_works_for_this_writer":"matches the brainstorm directly"}"#;
    format!(r#"{{"stories":[{0},{0},{0}]}}"#, story)
}

fn story_request_body() -> String {
    serde_json::json!({
        "experience_level": "beginner",
        "genre": "fantasy",
        "characters": "a mapmaker",
        "interests": "borders, rivers",
        "user_brainstorm": "maps that redraw themselves"
    })
    .to_string()
}

fn post_story(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/story")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn story_endpoint_returns_the_validated_set() {
    let app = app(Arc::new(FakeDriver {
        reply: Some(valid_set_json()),
    }));

    let response = app.oneshot(post_story(story_request_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["stories"].as_array().unwrap().len(), 3);
    assert_eq!(json["stories"][0]["title"], "The Shifting Atlas");
}

#[tokio::test]
async fn backend_failure_yields_bad_gateway_with_error_payload() {
    let app = app(Arc::new(FakeDriver { reply: None }));

    let response = app.oneshot(post_story(story_request_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("timed out"));
    assert_eq!(json["stories"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unparseable_model_reply_yields_error_payload_with_raw() {
    let app = app(Arc::new(FakeDriver {
        reply: Some("no json here, sorry".to_string()),
    }));

    let response = app.oneshot(post_story(story_request_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Parse Error"));
    assert_eq!(json["raw"], "no json here, sorry");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = app(Arc::new(FakeDriver { reply: None }));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app(Arc::new(FakeDriver { reply: None }));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
