//! Deterministic cleanup of raw model output.
//!
//! Backends do not reliably honor the "output only JSON" instruction: they
//! wrap replies in markdown fences, prepend commentary, or append sign-offs.
//! Sanitization is an explicit sequence of text transforms — strip fences,
//! trim to the outermost braces — so the behavior is testable without ever
//! invoking a model.

/// Remove triple-backtick code fence markers, bare or `json`-tagged,
/// anywhere in the text.
///
/// # Examples
///
/// ```
/// use fabula_core::strip_code_fences;
///
/// let cleaned = strip_code_fences("```json\n{\"a\":1}\n```");
/// assert_eq!(cleaned, "\n{\"a\":1}\n");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Slice the text to the first `{` through the last `}`, inclusive.
///
/// Returns the empty string when no such span exists.
///
/// # Examples
///
/// ```
/// use fabula_core::trim_to_braces;
///
/// assert_eq!(trim_to_braces("noise {\"a\":1} noise"), "{\"a\":1}");
/// assert_eq!(trim_to_braces("no json here"), "");
/// ```
pub fn trim_to_braces(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &text[start..=end],
        _ => "",
    }
}

/// Extract the JSON-looking substring from a model's free-form reply.
///
/// Composes [`strip_code_fences`] and [`trim_to_braces`]. Idempotent:
/// applying it twice yields the same result as applying it once.
pub fn sanitize(text: &str) -> String {
    let stripped = strip_code_fences(text);
    trim_to_braces(&stripped).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_from_fenced_reply_with_prose() {
        let raw = "Here is your answer:\n```json\n{\"stories\":[]}\n```\nThanks!";
        assert_eq!(sanitize(raw), "{\"stories\":[]}");
    }

    #[test]
    fn handles_untagged_fences() {
        let raw = "```\n{\"stories\":[]}\n```";
        assert_eq!(sanitize(raw), "{\"stories\":[]}");
    }

    #[test]
    fn no_braces_yields_empty_string() {
        assert_eq!(sanitize("I cannot help with that."), "");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn closing_brace_before_opening_yields_empty_string() {
        assert_eq!(sanitize("} oops {"), "");
    }

    #[test]
    fn clean_json_passes_through_unchanged() {
        let raw = "{\"stories\":[{\"title\":\"x\"}]}";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let cases = [
            "Here is your answer:\n```json\n{\"stories\":[]}\n```\nThanks!",
            "I cannot help with that.",
            "{\"stories\":[]}",
            "prefix {\"a\": \"b```c\"} suffix",
            "",
        ];
        for raw in cases {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn keeps_nested_braces_intact() {
        let raw = "note: {\"outer\":{\"inner\":1}} done";
        assert_eq!(sanitize(raw), "{\"outer\":{\"inner\":1}}");
    }
}
