//! Extraction — locate the JSON payload inside free-form model output.

use crate::normalize::NormalizeError;

/// Extracts the JSON candidate substring from raw model text.
///
/// The first fenced code block tagged `json` (case-insensitive) with a
/// non-empty body wins. When no such block exists, falls back to the
/// substring from the first `{` to the last `}`, inclusive. Fails when
/// neither strategy yields a candidate.
pub fn extract_json(text: &str) -> Result<&str, NormalizeError> {
    if let Some(block) = fenced_json_block(text) {
        return Ok(block);
    }
    brace_span(text).ok_or_else(|| {
        NormalizeError::Extraction(
            "no fenced json block and no brace-delimited substring in model output".to_string(),
        )
    })
}

/// Finds the first non-empty fenced block whose info string is `json`.
/// Other fences (including untagged ones) are skipped over, so a reasoning
/// preamble with its own code blocks does not shadow the payload.
fn fenced_json_block(text: &str) -> Option<&str> {
    let mut at = 0;
    loop {
        let open = text[at..].find("```")? + at;
        let info_start = open + 3;
        let rest = &text[info_start..];
        let line_end = rest.find('\n')?;
        let info = rest[..line_end].trim();
        let body_start = info_start + line_end + 1;
        let close = text[body_start..].find("```")?;

        if info.eq_ignore_ascii_case("json") {
            let body = text[body_start..body_start + close].trim();
            if !body.is_empty() {
                return Some(body);
            }
        }
        at = body_start + close + 3;
    }
}

/// First `{` through last `}`. Yields nothing when the braces are absent or
/// cross (`"} {"`), so the caller reports extraction failure rather than
/// feeding an empty slice to the parser.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start > end {
        return None;
    }
    Some(&text[start..=end])
}
