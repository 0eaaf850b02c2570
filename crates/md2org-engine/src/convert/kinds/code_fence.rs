pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Keeps a trailing space so a language tag after the fence reads `#+begin_src rust`.
    pub const BEGIN_SRC: &'static str = "#+begin_src ";
    pub const END_SRC: &'static str = "#+end_src";

    pub fn is_delimiter(line: &str) -> bool {
        line.contains(Self::BACKTICKS)
    }

    pub fn open(line: &str) -> String {
        line.replace(Self::BACKTICKS, Self::BEGIN_SRC)
    }

    pub fn close(line: &str) -> String {
        line.replace(Self::BACKTICKS, Self::END_SRC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_delimiter("```rust"));
        assert!(CodeFence::is_delimiter("  ```"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_delimiter("hello `code`"));
        assert!(!CodeFence::is_delimiter("~~~"));
    }

    #[test]
    fn open_carries_language_tag() {
        assert_eq!(CodeFence::open("```python"), "#+begin_src python");
        assert_eq!(CodeFence::open("```"), "#+begin_src ");
    }

    #[test]
    fn close_replaces_token_in_place() {
        assert_eq!(CodeFence::close("```"), "#+end_src");
        assert_eq!(CodeFence::close("  ```"), "  #+end_src");
    }
}
