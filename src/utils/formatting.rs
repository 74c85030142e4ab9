//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Shorten `s` to `max` visible chars, ending with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// `"--"` for missing attributes.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "--",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("João da Silva", 6), "João …");
        assert_eq!(truncate("Ana", 6), "Ana");
    }

    #[test]
    fn dash_for_blank() {
        assert_eq!(or_dash(None), "--");
        assert_eq!(or_dash(Some("  ")), "--");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
