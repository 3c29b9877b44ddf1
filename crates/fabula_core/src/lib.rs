//! Core data types and the prompt-to-structured-output pipeline stages for
//! the Fabula story concept service.
//!
//! This crate holds everything that runs without touching a model backend:
//! the domain types, the prompt renderer, the response sanitizer, and the
//! story set extractor. All of it is pure string and JSON manipulation, so
//! it is fully testable offline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod prompt;
mod sanitize;
mod story;

pub use extract::{extract_story_set, validate_story_set, STORY_COUNT};
pub use prompt::{render_prompt, PROMPT_TEMPLATE};
pub use sanitize::{sanitize, strip_code_fences, trim_to_braces};
pub use story::{Character, ErrorResult, StoryConcept, StoryRequest, StorySet};
