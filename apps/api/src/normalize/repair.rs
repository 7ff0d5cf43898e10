//! Syntactic repair — makes near-JSON parseable without changing its meaning.

/// Strips `//` line comments, then trailing commas. Idempotent: repairing
/// already-repaired text is a no-op.
pub fn repair(input: &str) -> String {
    strip_trailing_commas(&strip_line_comments(input))
}

/// Removes text from `//` to end of line, outside string literals.
/// A `//` inside a quoted value (e.g. a URL) is preserved.
pub fn strip_line_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(visible_prefix(line));
    }
    out
}

/// The part of a line before any `//` comment. JSON strings cannot span
/// lines, so the in-string scan resets per line.
fn visible_prefix(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return &line[..i];
        }
    }
    line
}

/// Removes commas whose next non-whitespace character closes a scope
/// (`}` or `]`), outside string literals.
pub fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if !matches!(next, Some('}') | Some(']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }
    out
}
