pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const FILE_SCHEME: &'static str = "file:";
    pub const NOTE_EXTENSION: &'static str = ".org";

    /// Already an org file link, e.g. the output of an earlier rewrite.
    pub fn is_file_link(inner: &str) -> bool {
        inner.starts_with(Self::FILE_SCHEME)
    }

    /// `[[name]]` as an org link to the note `name.org`, labelled `name`.
    pub fn to_org(name: &str, prefix: &str) -> String {
        format!(
            "{}{}{prefix}{name}{}][{name}{}",
            Self::OPEN,
            Self::FILE_SCHEME,
            Self::NOTE_EXTENSION,
            Self::CLOSE
        )
    }
}
