//! Extraction and validation of story sets from raw model output.
//!
//! The contract here is strict: a reply either deserializes into exactly 3
//! well-formed story concepts or it is rejected with an error naming the
//! first violation. Nothing partially valid is ever returned.

use crate::{sanitize, StorySet};
use fabula_error::{FabulaResult, ParseError, SchemaError};

/// Number of story concepts a valid reply must contain.
pub const STORY_COUNT: usize = 3;

const CHARACTER_RANGE: std::ops::RangeInclusive<usize> = 2..=4;
const THEME_RANGE: std::ops::RangeInclusive<usize> = 2..=4;

/// Sanitize raw backend text, parse it as JSON, and validate the story set
/// contract.
///
/// Failure modes, in order:
/// - [`ParseError`] when the sanitized text is not valid JSON (including the
///   empty string left behind by a reply with no braces at all);
/// - [`SchemaError`] when the JSON lacks a `stories` array, does not match
///   the story schema, or violates the count constraints.
///
/// # Examples
///
/// ```
/// use fabula_core::extract_story_set;
///
/// let err = extract_story_set("I cannot help with that.").unwrap_err();
/// assert!(format!("{}", err).contains("Parse Error"));
/// ```
pub fn extract_story_set(raw: &str) -> FabulaResult<StorySet> {
    let cleaned = sanitize(raw);

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| ParseError::new(e.to_string()))?;

    let stories = value
        .get("stories")
        .ok_or_else(|| SchemaError::new("response has no \"stories\" key"))?;
    if !stories.is_array() {
        return Err(SchemaError::new("\"stories\" is not an array").into());
    }

    let set: StorySet = serde_json::from_value(value)
        .map_err(|e| SchemaError::new(format!("story set does not match schema: {}", e)))?;

    validate_story_set(&set)?;
    Ok(set)
}

/// Check the count and content constraints on an already-parsed story set.
pub fn validate_story_set(set: &StorySet) -> Result<(), SchemaError> {
    if set.stories.len() != STORY_COUNT {
        return Err(SchemaError::new(format!(
            "expected exactly {} stories, got {}",
            STORY_COUNT,
            set.stories.len()
        )));
    }

    for (index, story) in set.stories.iter().enumerate() {
        if !CHARACTER_RANGE.contains(&story.main_characters.len()) {
            return Err(SchemaError::new(format!(
                "stories[{}].main_characters must have 2 to 4 entries, got {}",
                index,
                story.main_characters.len()
            )));
        }
        if !THEME_RANGE.contains(&story.themes.len()) {
            return Err(SchemaError::new(format!(
                "stories[{}].themes must have 2 to 4 entries, got {}",
                index,
                story.themes.len()
            )));
        }
        if story.why_it_works_for_this_writer.trim().is_empty() {
            return Err(SchemaError::new(format!(
                "stories[{}].why_it_works_for_this_writer must be non-empty",
                index
            )));
        }
    }

    Ok(())
}
