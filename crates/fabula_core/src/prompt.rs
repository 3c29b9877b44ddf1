//! Prompt template and renderer.
//!
//! The template uses `<<name>>` placeholder delimiters rather than braces so
//! that the literal braces of the embedded JSON schema example can never
//! collide with substitution, and writer-supplied text containing `{` or `}`
//! cannot corrupt the example block. Rendering is a single pass over the
//! static template; substituted values are inserted verbatim and never
//! rescanned, so placeholder-looking text inside a writer's input stays
//! inert.

use crate::StoryRequest;
use fabula_error::TemplateError;

/// The fixed instructional template sent to every backend.
///
/// Only the five `<<name>>` positions vary between requests.
pub const PROMPT_TEMPLATE: &str = r#"You are an expert story development consultant and creative writing coach.

WRITER INPUTS:
- Experience level: <<experience_level>>
- Genre: <<genre>>
- Character ideas: <<characters>>
- Interests: <<interests>>
- Brainstorm: <<user_brainstorm>>

TASK:
Generate exactly 3 distinct story concepts tailored to the writer inputs above.

OUTPUT REQUIREMENTS (CRITICAL, must be followed exactly):
1. Output ONLY a single valid JSON object (double quotes, no trailing commas). Do NOT output any explanatory text, markdown, or commentary — only the JSON object described below.
2. The top-level JSON object must have a single key: "stories", whose value is an array of exactly 3 story objects.
3. Each story object must contain exactly the fields listed in the schema and no additional keys.

SCHEMA (required JSON structure — follow exactly):

{
  "stories": [
    {
      "title": "",
      "genre_subgenre": "",
      "premise": "",
      "main_characters": [
        {
          "name": "",
          "role": "",
          "personality": "",
          "motivation": ""
        }
      ],
      "central_conflict": "",
      "themes": [],
      "tone_and_style": "",
      "why_it_works_for_this_writer": ""
    }
  ]
}

VALIDATION RULES / CONTENT GUIDELINES:
- Return exactly 3 story objects in the "stories" array.
- "premise" must be 3-5 sentences and clearly state setup, stakes, and hook.
- "main_characters" must contain 2 to 4 character objects. Each character must include name, role, personality (short phrase), and motivation (short phrase).
- "themes" must be a list of 2-4 short strings (each a core theme).
- Keep each string concise and directly relevant.
- Do not include examples, placeholders, or instructional text inside the JSON values beyond the story content.
- Use natural-sounding, original, and distinct concepts — the three stories should be well-differentiated.
- Do NOT add any extra JSON keys (e.g., no "id", "notes", or "metadata") — only use the fields in the schema.

NOW produce the JSON output (no commentary, no extra text) — using the writer inputs as context.
Ensure every story includes a non-empty 'why_it_works_for_this_writer' field.
"#;

/// Fill the prompt template with the five writer-supplied fields.
///
/// Fails with a [`TemplateError`] if the template contains a placeholder
/// with no binding, which keeps template edits honest.
///
/// # Examples
///
/// ```
/// use fabula_core::{render_prompt, StoryRequest};
///
/// let request = StoryRequest {
///     experience_level: "beginner".to_string(),
///     genre: "mystery".to_string(),
///     characters: "a retired detective".to_string(),
///     interests: "small towns".to_string(),
///     user_brainstorm: "a letter arrives decades late".to_string(),
/// };
///
/// let prompt = render_prompt(&request).unwrap();
/// assert!(prompt.contains("a retired detective"));
/// assert!(!prompt.contains("<<"));
/// ```
pub fn render_prompt(request: &StoryRequest) -> Result<String, TemplateError> {
    let lookup = |name: &str| -> Option<&str> {
        match name {
            "experience_level" => Some(request.experience_level.as_str()),
            "genre" => Some(request.genre.as_str()),
            "characters" => Some(request.characters.as_str()),
            "interests" => Some(request.interests.as_str()),
            "user_brainstorm" => Some(request.user_brainstorm.as_str()),
            _ => None,
        }
    };

    let mut prompt = String::with_capacity(PROMPT_TEMPLATE.len() + 256);
    let mut rest = PROMPT_TEMPLATE;

    while let Some(start) = rest.find("<<") {
        prompt.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find(">>").ok_or_else(|| {
            TemplateError::new("unterminated placeholder in prompt template")
        })?;
        let name = &after[..end];
        let value = lookup(name).ok_or_else(|| {
            TemplateError::new(format!("unbound placeholder <<{}>> in prompt template", name))
        })?;
        prompt.push_str(value);
        rest = &after[end + 2..];
    }
    prompt.push_str(rest);

    Ok(prompt)
}
