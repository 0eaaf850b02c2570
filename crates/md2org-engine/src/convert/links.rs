//! Rewrites Obsidian and markdown links into org links.
//!
//! The rules run in a fixed order and each one sees the output of the ones
//! before it, so a wiki link already turned into `[[file:...]]` is left alone
//! by the later rules.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::kinds::WikiLink;
use crate::models::ConvertOptions;
use crate::models::options::join_dir;

/// One rewrite step: a pattern and the function building its replacement.
struct LinkRule {
    name: &'static str,
    pattern: &'static str,
    rewrite: fn(&Captures<'_>, &ConvertOptions) -> String,
}

const RULES: [LinkRule; 7] = [
    LinkRule {
        name: "asset embed",
        pattern: r"!\[\[([^(\[|\])]+\.(?:jpg|jpeg|png|pdf|docx|pptx|cif))\]\]",
        rewrite: asset_embed,
    },
    LinkRule {
        name: "daily note",
        pattern: r"\[\[(\d{4}-\d\d-\d\d)\]\]",
        rewrite: daily_note,
    },
    LinkRule {
        name: "wiki link",
        pattern: r"\[\[([^\]\[]+)\]\]",
        rewrite: wiki_link,
    },
    LinkRule {
        name: "web image",
        pattern: r"!\[([^(\[|\])]+)\]\((https?:[^)]+)\)",
        rewrite: web_image,
    },
    LinkRule {
        name: "web link",
        pattern: r"\[([^(\[|\])]+)\]\((https?:[^)]+)\)",
        rewrite: web_link,
    },
    // Local links only match a one-character label.
    LinkRule {
        name: "local image",
        pattern: r"!\[([^(\[|\])])\]\(([^)]+)\)",
        rewrite: local_image,
    },
    LinkRule {
        name: "local link",
        pattern: r"\[([^(\[|\])])\]\(([^)]+)\)",
        rewrite: local_link,
    },
];

fn asset_embed(caps: &Captures<'_>, options: &ConvertOptions) -> String {
    format!(
        "![[file:{}{}]]",
        options.link_prefix(),
        join_dir(&options.asset_path, &caps[1])
    )
}

fn daily_note(caps: &Captures<'_>, options: &ConvertOptions) -> String {
    let date = &caps[1];
    format!(
        "[[file:{}{}{}][{date}]]",
        options.link_prefix(),
        join_dir(&options.daily_path, date),
        WikiLink::NOTE_EXTENSION
    )
}

fn wiki_link(caps: &Captures<'_>, options: &ConvertOptions) -> String {
    let name = &caps[1];
    if WikiLink::is_file_link(name) {
        return caps[0].to_string();
    }
    WikiLink::to_org(name, options.link_prefix())
}

fn web_image(caps: &Captures<'_>, _: &ConvertOptions) -> String {
    format!("![[{}][{}]]", &caps[2], &caps[1])
}

fn web_link(caps: &Captures<'_>, _: &ConvertOptions) -> String {
    format!("[[{}][{}]]", &caps[2], &caps[1])
}

fn local_image(caps: &Captures<'_>, _: &ConvertOptions) -> String {
    format!("![[file:{}][{}]]", &caps[2], &caps[1])
}

fn local_link(caps: &Captures<'_>, _: &ConvertOptions) -> String {
    format!("[[file:{}][{}]]", &caps[2], &caps[1])
}

fn compiled_rules() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| Regex::new(rule.pattern).expect("Invalid link regex"))
            .collect()
    })
}

fn bracketed_span() -> &'static Regex {
    static BRACKETED: OnceLock<Regex> = OnceLock::new();
    BRACKETED.get_or_init(|| Regex::new(r"\[.+\]").expect("Invalid bracket regex"))
}

/// Rewrites every link in `line`.
pub fn convert_links(line: &str, options: &ConvertOptions) -> String {
    if !bracketed_span().is_match(line) {
        return line.to_string();
    }

    let mut current = line.to_string();
    for (rule, re) in RULES.iter().zip(compiled_rules()) {
        if !re.is_match(&current) {
            continue;
        }
        log::trace!("link rule '{}' applies to {current:?}", rule.name);
        current = re
            .replace_all(&current, |caps: &Captures<'_>| (rule.rewrite)(caps, options))
            .into_owned();
    }
    current
}
