pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const BULLET: char = '*';
    /// A level-one heading is the document title, not an outline entry.
    pub const TITLE_PREFIX: &'static str = "# ";

    pub fn is_title(line: &str) -> bool {
        line.starts_with(Self::TITLE_PREFIX)
    }

    pub fn title_text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::TITLE_PREFIX).map(str::trim)
    }

    /// Rewrites leading `#` markers to the same number of `*` bullets.
    ///
    /// Returns `None` unless the markers are followed by whitespace (or end the line).
    pub fn to_outline(line: &str) -> Option<String> {
        let rest = line.trim_start_matches(Self::MARKER);
        let depth = line.len() - rest.len();
        if depth == 0 {
            return None;
        }
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut out = String::with_capacity(line.len());
        out.extend(std::iter::repeat_n(Self::BULLET, depth));
        out.push_str(rest);
        Some(out)
    }
}
