pub struct Tags;

impl Tags {
    pub const MARKER: &'static str = "tags: ";
    pub const SIGIL: char = '#';

    pub fn is_tag_line(line: &str) -> bool {
        line.contains(Self::MARKER)
    }

    /// Tags listed after the marker, sigils removed, in order of first appearance.
    pub fn parse(line: &str) -> Option<Vec<String>> {
        let (_, listed) = line.split_once(Self::MARKER)?;

        let mut tags: Vec<String> = Vec::new();
        for token in listed.split_whitespace() {
            let tag = token.strip_prefix(Self::SIGIL).unwrap_or(token);
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Some(tags)
    }
}
