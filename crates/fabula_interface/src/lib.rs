//! Trait definitions for model backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::StoryDriver;
