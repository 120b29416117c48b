// src/core/sanitize.rs

/// Collapse runs of whitespace (including newlines from markup) into
/// single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Whitespace-normalize, mapping an empty result to `None`.
pub fn non_empty(s: &str) -> Option<String> {
    let t = normalize_ws(s);
    if t.is_empty() {
        None
    } else {
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_markup_whitespace() {
        assert_eq!(normalize_ws("  $80,000\n   a year "), "$80,000 a year");
    }

    #[test]
    fn empty_becomes_none() {
        assert_eq!(non_empty("  \n "), None);
        assert_eq!(non_empty(" x "), Some("x".to_string()));
    }
}
