//! Inline rewrites applied to prose lines after link conversion.
//!
//! The emphasis, strikethrough and code rewrites only fire when some
//! character follows the closing delimiter on the same line. That character
//! is left in place for the next match.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn emphasis() -> &'static Regex {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    EMPHASIS.get_or_init(|| {
        Regex::new(
            r"(?P<lead>\s*)(?:\*\*(?P<bold>[^*]+)\*\*|\*(?P<italic>[^*]+)\*)\s*(?P<tail>[^\n])",
        )
        .expect("Invalid emphasis regex")
    })
}

fn strikethrough() -> &'static Regex {
    static STRIKE: OnceLock<Regex> = OnceLock::new();
    STRIKE.get_or_init(|| {
        Regex::new(r"(?P<lead>\s*)~(?P<body>[^~]+)~\s*(?P<tail>[^\n])").expect("Invalid strike regex")
    })
}

fn inline_code() -> &'static Regex {
    static CODE: OnceLock<Regex> = OnceLock::new();
    CODE.get_or_init(|| {
        Regex::new(r"(?P<lead>\s*)`(?P<body>[^`]+)`\s*(?P<tail>[^\n])").expect("Invalid code regex")
    })
}

fn horizontal_rule() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| Regex::new(r"-{3,}").expect("Invalid rule regex"))
}

fn footnote() -> &'static Regex {
    static FOOTNOTE: OnceLock<Regex> = OnceLock::new();
    FOOTNOTE.get_or_init(|| Regex::new(r"\[\^([^\]]+)\]:?").expect("Invalid footnote regex"))
}

fn structural_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"^\s*(?:\*+|[-+]|\d+[.)])\s+").expect("Invalid prefix regex")
    })
}

/// `**X**` becomes ` *X* ` and `*X*` becomes ` /X/ `, in a single pass so
/// that converted bold text is not read again as italics.
pub fn convert_emphasis(line: &str) -> String {
    replace_before_tail(line, emphasis(), |caps| match (caps.name("bold"), caps.name("italic")) {
        (Some(bold), _) => format!("*{}*", bold.as_str()),
        (None, Some(italic)) => format!("/{}/", italic.as_str()),
        (None, None) => caps[0].trim().to_string(),
    })
}

/// `~X~` becomes ` +X+ `.
pub fn convert_strikethrough(line: &str) -> String {
    replace_before_tail(line, strikethrough(), |caps| format!("+{}+", &caps["body"]))
}

/// `` `X` `` becomes ` ~X~ `.
pub fn convert_inline_code(line: &str) -> String {
    replace_before_tail(line, inline_code(), |caps| format!("~{}~", &caps["body"]))
}

/// Every run of three or more hyphens becomes exactly five.
pub fn normalize_rules(line: &str) -> String {
    horizontal_rule().replace_all(line, "-----").into_owned()
}

/// `[^label]` and `[^label]:` become `[fn:label]`.
pub fn convert_footnotes(line: &str) -> String {
    footnote().replace_all(line, "[fn:$1]").into_owned()
}

/// Splits off leading indentation plus an outline bullet or list marker.
pub fn split_structural_prefix(line: &str) -> (&str, &str) {
    match structural_prefix().find(line) {
        Some(m) => line.split_at(m.end()),
        None => ("", line),
    }
}

/// Replaces each match up to its `tail` group with ` <render> `, leaving the
/// tail character in the text. At the start of the line the original
/// indentation is kept instead of the leading space.
fn replace_before_tail(
    line: &str,
    re: &Regex,
    render: impl Fn(&Captures<'_>) -> String,
) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut last = 0;
    let mut at = 0;

    while let Some(caps) = re.captures_at(line, at) {
        let (Some(whole), Some(tail)) = (caps.get(0), caps.name("tail")) else {
            break;
        };
        out.push_str(&line[last..whole.start()]);
        if out.is_empty() {
            out.push_str(caps.name("lead").map_or("", |m| m.as_str()));
        } else if !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        out.push_str(&render(&caps));
        out.push(' ');
        last = tail.start();
        at = tail.start();
    }

    out.push_str(&line[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a **bold** word", "a *bold* word")]
    #[case("an *italic* word", "an /italic/ word")]
    #[case("**bold** first", "*bold* first")]
    #[case("*a* and *b* too", "/a/ and /b/ too")]
    #[case("**a** *b* c", "*a* /b/ c")]
    #[case("  **indented** text", "  *indented* text")]
    fn emphasis_is_rewritten(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(convert_emphasis(line), expected);
    }

    #[rstest]
    #[case("ends in *italic*")]
    #[case("a lone * star")]
    #[case("no emphasis at all")]
    fn emphasis_needs_a_following_character(#[case] line: &str) {
        assert_eq!(convert_emphasis(line), line);
    }

    #[rstest]
    #[case("*[[file:Ideas.org][Ideas]]* later", "/[[file:Ideas.org][Ideas]]/ later")]
    #[case("*see [x]* here", "/see [x]/ here")]
    fn italics_may_hold_brackets(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(convert_emphasis(line), expected);
    }

    #[test]
    fn strikethrough_is_rewritten() {
        assert_eq!(convert_strikethrough("was ~wrong~ here"), "was +wrong+ here");
        assert_eq!(convert_strikethrough("ends ~wrong~"), "ends ~wrong~");
    }

    #[test]
    fn inline_code_is_rewritten() {
        assert_eq!(
            convert_inline_code("run `cargo build` now"),
            "run ~cargo build~ now"
        );
        assert_eq!(convert_inline_code("ends `code`"), "ends `code`");
    }

    #[rstest]
    #[case("---", "-----")]
    #[case("----", "-----")]
    #[case("----------", "-----")]
    #[case("a --- b ---- c", "a ----- b ----- c")]
    #[case("a -- b", "a -- b")]
    fn hyphen_runs_become_five(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(normalize_rules(line), expected);
    }

    #[rstest]
    #[case("Claim[^note1] here", "Claim[fn:note1] here")]
    #[case("[^note1]: the source", "[fn:note1] the source")]
    #[case("[^a] and [^b]", "[fn:a] and [fn:b]")]
    #[case("no footnotes [here]", "no footnotes [here]")]
    fn footnotes(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(convert_footnotes(line), expected);
    }

    #[rstest]
    #[case("** Section", "** ", "Section")]
    #[case("  - item", "  - ", "item")]
    #[case("* item", "* ", "item")]
    #[case("12. step", "12. ", "step")]
    #[case("**bold** text", "", "**bold** text")]
    #[case("plain", "", "plain")]
    fn structural_prefixes(#[case] line: &str, #[case] prefix: &str, #[case] body: &str) {
        assert_eq!(split_structural_prefix(line), (prefix, body));
    }
}
