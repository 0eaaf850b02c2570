/// Front-matter metadata of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    /// Insertion ordered, no duplicates.
    pub tags: Vec<String>,
}

impl Metadata {
    pub const TITLE_KEYWORD: &'static str = "#+TITLE:";
    pub const TAGS_KEYWORD: &'static str = "#+ROAM_TAGS:";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Org keyword lines: title, tags when present, then one blank separator line.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} {}", Self::TITLE_KEYWORD, self.title)];
        if !self.tags.is_empty() {
            lines.push(format!("{} {}", Self::TAGS_KEYWORD, self.tags.join(" ")));
        }
        lines.push(String::new());
        lines
    }
}
