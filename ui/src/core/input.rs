//! Filtering and parsing for the numeric text fields.

/// Longest digit run kept; anything longer could overflow `i64`.
pub const MAX_DIGITS: usize = 15;

/// Keep ASCII digits and a single leading minus sign.
pub fn sanitize_count_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut digits = 0usize;
    for ch in raw.trim().chars() {
        match ch {
            '-' if out.is_empty() => out.push('-'),
            '0'..='9' if digits < MAX_DIGITS => {
                out.push(ch);
                digits += 1;
            }
            _ => {}
        }
    }
    out
}

/// `None` for an empty field or a lone sign; the submit is then ignored.
pub fn parse_count_submission(text: &str) -> Option<i64> {
    let cleaned = sanitize_count_input(text);
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse().ok()
}

/// Step sizes must be positive.
pub fn parse_step(text: &str) -> Option<i64> {
    parse_count_submission(text).filter(|value| *value > 0)
}

/// Limit fields: an empty field clears the limit, a lone sign is ignored.
pub fn parse_limit(text: &str) -> Option<Option<i64>> {
    let cleaned = sanitize_count_input(text);
    if cleaned.is_empty() {
        return Some(None);
    }
    parse_count_submission(&cleaned).map(Some)
}
