//! Secret masking for logs and diagnostics.

/// Fixed literal emitted for absent values.
const NOT_SET: &str = "null";

/// Mask a sensitive value for display.
///
/// Absent values render as `"null"`. Values of at least ten characters keep a
/// three-character prefix and suffix around an elided middle, enough for an
/// operator to recognize which secret a log line refers to; anything shorter
/// collapses to `"***"` outright. Deterministic, non-reversible, and total
/// over arbitrary input, multi-byte included.
pub fn mask(value: Option<&str>) -> String {
    let Some(value) = value else {
        return NOT_SET.to_string();
    };
    let chars: Vec<char> = value.chars().collect();
    if chars.len() >= 10 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 3..].iter().collect();
        format!("{prefix}***{suffix}")
    } else {
        "***".to_string()
    }
}
