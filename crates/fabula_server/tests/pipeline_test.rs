//! Pipeline tests with a fake backend driver.

use async_trait::async_trait;
use fabula_core::{StoryRequest, STORY_COUNT};
use fabula_error::{BackendError, BackendErrorKind, FabulaErrorKind, FabulaResult};
use fabula_interface::StoryDriver;
use fabula_server::generate_stories;

/// Fourth backend variant: a fake for tests.
struct FakeDriver {
    reply: Option<String>,
}

impl FakeDriver {
    fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
        }
    }

    fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl StoryDriver for FakeDriver {
    async fn complete(&self, _prompt: &str) -> FabulaResult<String> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(BackendError::new(
                "fake",
                BackendErrorKind::Http("connection refused".to_string()),
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

fn request() -> StoryRequest {
    StoryRequest {
        experience_level: "beginner".to_string(),
        genre: "fantasy".to_string(),
        characters: "a mapmaker".to_string(),
        interests: "borders, rivers".to_string(),
        user_brainstorm: "maps that redraw themselves".to_string(),
    }
}

fn valid_set_json() -> String {
    let story = r#"{"title":"The Shifting Atlas","genre_subgenre":"fantasy / cartographic","premise":"Every map she draws is wrong by morning. The borders move. Someone is moving them.","main_characters":[{"name":"Ivo","role":"protagonist","personality":"meticulous","motivation":"truth"},{"name":"Sela","role":"rival","personality":"charming","motivation":"profit"}],"central_conflict":"who controls the territory controls the map","themes":["ownership","perception"],"tone_and_style":"wry, precise","why_it_works_for_this_writer":"matches the brainstorm directly"}"#;
    format!(r#"{{"stories":[{0},{0},{0}]}}"#, story)
}

#[tokio::test]
async fn clean_reply_round_trips() {
    let driver = FakeDriver::replying(valid_set_json());
    let set = generate_stories(&driver, &request()).await.unwrap();

    assert_eq!(set.stories.len(), STORY_COUNT);
    assert_eq!(
        serde_json::to_value(&set).unwrap(),
        serde_json::from_str::<serde_json::Value>(&valid_set_json()).unwrap()
    );
}

#[tokio::test]
async fn fenced_reply_with_prose_is_accepted() {
    let driver = FakeDriver::replying(format!(
        "Of course! Here are your concepts:\n```json\n{}\n```\nGood luck!",
        valid_set_json()
    ));
    let set = generate_stories(&driver, &request()).await.unwrap();
    assert_eq!(set.stories.len(), STORY_COUNT);
}

#[tokio::test]
async fn refusal_text_becomes_parse_error_with_raw_attached() {
    let driver = FakeDriver::replying("I cannot help with that.");
    let failure = generate_stories(&driver, &request()).await.unwrap_err();

    assert!(matches!(failure.error.kind(), FabulaErrorKind::Parse(_)));
    assert!(failure.result.stories.is_empty());
    assert_eq!(failure.result.raw.as_deref(), Some("I cannot help with that."));
    assert!(!failure.result.error.is_empty());
}

#[tokio::test]
async fn wrong_story_count_becomes_schema_error_with_raw_attached() {
    let driver = FakeDriver::replying(r#"{"stories":[]}"#);
    let failure = generate_stories(&driver, &request()).await.unwrap_err();

    assert!(matches!(failure.error.kind(), FabulaErrorKind::Schema(_)));
    assert!(failure.result.error.contains("expected exactly 3 stories"));
    assert_eq!(failure.result.raw.as_deref(), Some(r#"{"stories":[]}"#));
}

/// Records the prompt it was handed, then fails.
struct RecordingDriver {
    prompt: std::sync::Mutex<Option<String>>,
    name: &'static str,
}

#[async_trait]
impl StoryDriver for RecordingDriver {
    async fn complete(&self, prompt: &str) -> FabulaResult<String> {
        *self.prompt.lock().unwrap() = Some(prompt.to_string());
        Err(BackendError::new(self.name, BackendErrorKind::EmptyOutput).into())
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }

    fn model_name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn rendered_prompt_is_identical_across_backends() {
    let first = RecordingDriver {
        prompt: std::sync::Mutex::new(None),
        name: "fake-a",
    };
    let second = RecordingDriver {
        prompt: std::sync::Mutex::new(None),
        name: "fake-b",
    };

    let req = request();
    let _ = generate_stories(&first, &req).await;
    let _ = generate_stories(&second, &req).await;

    let prompt_a = first.prompt.lock().unwrap().clone().unwrap();
    let prompt_b = second.prompt.lock().unwrap().clone().unwrap();
    assert_eq!(prompt_a, prompt_b);
    assert!(prompt_a.contains("maps that redraw themselves"));
}

#[tokio::test]
async fn backend_failure_becomes_error_result_without_raw() {
    let driver = FakeDriver::failing();
    let failure = generate_stories(&driver, &request()).await.unwrap_err();

    assert!(matches!(failure.error.kind(), FabulaErrorKind::Backend(_)));
    assert!(failure.result.error.contains("connection refused"));
    assert!(failure.result.raw.is_none());
    assert!(failure.result.stories.is_empty());
}
