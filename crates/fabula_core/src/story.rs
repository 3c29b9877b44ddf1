//! Domain types for story requests and generated story sets.

use serde::{Deserialize, Serialize};

/// Writer-supplied parameters for a story generation request.
///
/// All five fields are required; no validation beyond presence is applied,
/// so empty strings are accepted.
///
/// # Examples
///
/// ```
/// use fabula_core::StoryRequest;
///
/// let request = StoryRequest {
///     experience_level: "beginner".to_string(),
///     genre: "science fiction".to_string(),
///     characters: "a reluctant engineer".to_string(),
///     interests: "first contact, language".to_string(),
///     user_brainstorm: "something about a signal from the deep".to_string(),
/// };
///
/// assert_eq!(request.genre, "science fiction");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// Writer's experience level
    pub experience_level: String,
    /// Requested genre
    pub genre: String,
    /// Character ideas
    pub characters: String,
    /// Writer's interests
    pub interests: String,
    /// Free-form brainstorm text
    pub user_brainstorm: String,
}

/// A character within a generated story concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Narrative role
    pub role: String,
    /// Short personality phrase
    pub personality: String,
    /// Short motivation phrase
    pub motivation: String,
}

/// A single generated story concept.
///
/// The schema is contractually exact: the model is instructed to emit these
/// fields and no others, and `deny_unknown_fields` rejects replies that add
/// keys anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryConcept {
    /// Story title
    pub title: String,
    /// Genre and subgenre
    pub genre_subgenre: String,
    /// Premise covering setup, stakes, and hook
    pub premise: String,
    /// 2 to 4 main characters
    pub main_characters: Vec<Character>,
    /// The central conflict
    pub central_conflict: String,
    /// 2 to 4 core themes
    pub themes: Vec<String>,
    /// Tone and style description
    pub tone_and_style: String,
    /// Why this concept suits the requesting writer (must be non-empty)
    pub why_it_works_for_this_writer: String,
}

/// The successful result of the pipeline: exactly 3 story concepts.
///
/// `stories` must be the single top-level key; `deny_unknown_fields`
/// rejects replies that smuggle extras in beside it.
///
/// # Examples
///
/// ```
/// use fabula_core::StorySet;
///
/// let set: StorySet = serde_json::from_str(r#"{"stories":[]}"#).unwrap();
/// assert!(set.stories.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorySet {
    /// The generated story concepts
    pub stories: Vec<StoryConcept>,
}

/// Uniform failure payload returned for any error kind.
///
/// Carries the error message, an empty `stories` array so the caller can
/// always iterate, and optionally the raw unparsed backend text for
/// diagnosis of unreliable model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Human-readable error message
    pub error: String,
    /// Always empty on failure
    pub stories: Vec<StoryConcept>,
    /// Raw backend text, when one was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorResult {
    /// Create a failure payload with no raw backend text.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stories: Vec::new(),
            raw: None,
        }
    }

    /// Attach the raw backend text for diagnosis.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}
