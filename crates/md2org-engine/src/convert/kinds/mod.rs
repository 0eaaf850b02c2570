//! # Syntax Kinds
//!
//! Each kind owns the delimiters of one construct in both dialects, so the
//! converter never hardcodes ```` ``` ````, `# ` or `[[` in its own logic.
//!
//! - **`CodeFence`**: ```` ``` ```` on the markdown side, `#+begin_src` / `#+end_src` on the org side
//! - **`Heading`**: `#` markers rewritten to `*` outline bullets
//! - **`WikiLink`**: `[[name]]` rewritten to `[[file:name.org][name]]`
//! - **`Tags`**: the `tags: #a #b` front-matter line

pub mod code_fence;
pub mod heading;
pub mod tags;
pub mod wikilink;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use tags::Tags;
pub use wikilink::WikiLink;
