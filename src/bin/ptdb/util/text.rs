/// Greedy word wrap; a word longer than `width` gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    match max_len {
        0 => return String::new(),
        1 if s.chars().count() > 1 => return "…".to_string(),
        _ => {}
    }

    if s.char_indices().nth(max_len).is_none() {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .nth(max_len - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut out = String::with_capacity(cut + '…'.len_utf8());
    out.push_str(&s[..cut]);
    out.push('…');
    out
}

/// `"1 element"`, `"3 elements"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("Rusting of iron", 20), vec!["Rusting of iron"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("Slow oxidation of iron in moist air", 16),
            vec!["Slow oxidation", "of iron in moist", "air"]
        );
    }

    #[test]
    fn wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap("ΔH −285.8 kJ", 12), vec!["ΔH −285.8 kJ"]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("Tungsten", 8), "Tungsten");
        assert_eq!(truncate("W", 1), "W");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("transition metal", 10), "transitio…");
        assert_eq!(truncate("Fe", 1), "…");
        assert_eq!(truncate("Fe", 0), "");
    }

    #[test]
    fn truncate_respects_multibyte_characters() {
        assert_eq!(truncate("4 Fe + 3 O₂ → 2 Fe₂O₃", 12), "4 Fe + 3 O₂…");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "element"), "1 element");
        assert_eq!(plural(0, "reaction"), "0 reactions");
        assert_eq!(plural(118, "element"), "118 elements");
    }
}
