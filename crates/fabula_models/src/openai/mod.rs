//! OpenAI chat completions backend.

mod driver;
mod dto;

pub use driver::OpenAiDriver;
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage, Usage};
