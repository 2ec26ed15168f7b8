//! LaTeX escaping for user-supplied text.
//!
//! Every string that reaches the generated markup passes through one of these functions.
//! Substitution is a single left-to-right pass over the input, so the backslashes and braces
//! introduced by a replacement are never themselves re-escaped.

/// Characters with special meaning in LaTeX body text.
pub const SPECIAL_CHARS: &[char] = &['\\', '{', '}', '$', '&', '%', '#', '^', '_', '~'];

/// Additional characters escaped by the strict variant.
pub const STRICT_EXTRA_CHARS: &[char] = &['|', '<', '>'];

/// Escapes the standard LaTeX special characters.
pub fn escape(text: &str) -> String {
    escape_with(text, false)
}

/// Escapes the standard set plus `|`, `<` and `>`, which render as other glyphs in OT1 fonts.
pub fn escape_strict(text: &str) -> String {
    escape_with(text, true)
}

fn escape_with(text: &str, strict: bool) -> String {
    if !text.contains(SPECIAL_CHARS) && !(strict && text.contains(STRICT_EXTRA_CHARS)) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match replacement(c, strict) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}

fn replacement(c: char, strict: bool) -> Option<&'static str> {
    let rep = match c {
        '\\' => r"\textbackslash{}",
        '{' => r"\{",
        '}' => r"\}",
        '$' => r"\$",
        '&' => r"\&",
        '%' => r"\%",
        '#' => r"\#",
        '^' => r"\textasciicircum{}",
        '_' => r"\_",
        '~' => r"\textasciitilde{}",
        '|' if strict => r"\textbar{}",
        '<' if strict => r"\textless{}",
        '>' if strict => r"\textgreater{}",
        _ => return None,
    };
    Some(rep)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Removes every well-formed escape sequence the escaper can emit, leaving only text that
    /// was passed through untouched.
    fn strip_escapes(escaped: &str) -> String {
        let mut rest = escaped.to_string();
        for seq in [
            r"\textbackslash{}",
            r"\textasciicircum{}",
            r"\textasciitilde{}",
            r"\textbar{}",
            r"\textless{}",
            r"\textgreater{}",
            r"\{",
            r"\}",
            r"\$",
            r"\&",
            r"\%",
            r"\#",
            r"\_",
        ] {
            rest = rest.replace(seq, "");
        }
        rest
    }

    #[test]
    fn test_safe_text_is_unchanged() {
        for s in ["", "Jane Doe", "jane@x.com", "C++ / Rust (2024)", "Zürich, naïve café", "a-b.c:d!"] {
            assert_eq!(escape(s), s);
            assert_eq!(escape_strict(s), s);
        }
    }

    #[test]
    fn test_each_special_char() {
        assert_eq!(escape("\\"), r"\textbackslash{}");
        assert_eq!(escape("{}"), r"\{\}");
        assert_eq!(escape("$5"), r"\$5");
        assert_eq!(escape("R&D"), r"R\&D");
        assert_eq!(escape("10%"), r"10\%");
        assert_eq!(escape("#1"), r"\#1");
        assert_eq!(escape("x^2"), r"x\textasciicircum{}2");
        assert_eq!(escape("snake_case"), r"snake\_case");
        assert_eq!(escape("~home"), r"\textasciitilde{}home");
    }

    #[test]
    fn test_backslash_replacement_is_not_reescaped() {
        assert_eq!(escape(r"C:\dir"), r"C:\textbackslash{}dir");
        assert_eq!(escape(r"\{"), r"\textbackslash{}\{");
    }

    #[test]
    fn test_standard_leaves_pipes_and_angles() {
        assert_eq!(escape("a|b<c>"), "a|b<c>");
    }

    #[test]
    fn test_strict_escapes_pipes_and_angles() {
        assert_eq!(
            escape_strict("a|b<c>"),
            r"a\textbar{}b\textless{}c\textgreater{}"
        );
    }

    #[test]
    fn test_no_special_char_survives_unescaped() {
        let nasty = r"\{}$&%#^_~|<> mixed \\ with {braces} and 100% of $$ & _under_";
        let standard = strip_escapes(&escape(nasty));
        assert!(
            !standard.contains(SPECIAL_CHARS),
            "unescaped special char left in: {standard}"
        );
        let strict = strip_escapes(&escape_strict(nasty));
        assert!(!strict.contains(SPECIAL_CHARS));
        assert!(!strict.contains(STRICT_EXTRA_CHARS));
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        let once = escape("50%");
        assert_eq!(once, r"50\%");
        assert_eq!(escape(&once), r"50\textbackslash{}\%");
    }
}
