/// Path used for both directories when nothing else is configured.
pub const DEFAULT_PATH: &str = "./";

/// The three values that steer one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Vault-relative directory of daily notes, used in `[[YYYY-MM-DD]]` targets.
    pub daily_path: String,
    /// Vault-relative directory of attachments, used in `![[image.png]]` targets.
    pub asset_path: String,
    /// The document itself lives in the daily-note directory.
    pub is_daily: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            daily_path: DEFAULT_PATH.to_string(),
            asset_path: DEFAULT_PATH.to_string(),
            is_daily: false,
        }
    }
}

impl ConvertOptions {
    pub fn new(daily_path: impl Into<String>, asset_path: impl Into<String>) -> Self {
        Self {
            daily_path: daily_path.into(),
            asset_path: asset_path.into(),
            is_daily: false,
        }
    }

    pub fn daily(mut self, is_daily: bool) -> Self {
        self.is_daily = is_daily;
        self
    }

    /// Daily notes sit one directory below the vault root.
    pub fn link_prefix(&self) -> &'static str {
        if self.is_daily { "../" } else { "" }
    }
}

/// Joins a directory and a name with exactly one `/`.
pub(crate) fn join_dir(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
