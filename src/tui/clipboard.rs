//! Copying record snippets to the system clipboard.
//!
//! The last copied snippet is remembered so the status bar can preview it.

/// Longest preview shown in the status bar, in characters.
const PREVIEW_LEN: usize = 40;

/// A snippet that was copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedSnippet {
    /// What was copied (e.g., "code example")
    pub label: &'static str,
    /// The copied text
    pub text: String,
}

/// Clipboard state for snippet copies.
#[derive(Debug, Clone, Default)]
pub struct SnippetClipboard {
    last: Option<CopiedSnippet>,
}

impl SnippetClipboard {
    /// Create a new empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Copies `text` to the system clipboard.
    ///
    /// Returns a description of what was copied for the status message.
    pub fn copy(&mut self, label: &'static str, text: String) -> Result<String, arboard::Error> {
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.as_str()))?;
        Ok(self.remember(label, text))
    }

    /// Records a copy without touching the system clipboard.
    fn remember(&mut self, label: &'static str, text: String) -> String {
        let lines = text.lines().count();
        self.last = Some(CopiedSnippet { label, text });
        if lines == 1 {
            format!("Copied {label} to clipboard")
        } else {
            format!("Copied {label} to clipboard ({lines} lines)")
        }
    }

    /// The last copied snippet, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&CopiedSnippet> {
        self.last.as_ref()
    }

    /// First line of the last snippet, truncated for the status bar.
    #[must_use]
    pub fn get_preview(&self) -> Option<String> {
        let snippet = self.last.as_ref()?;
        let first = snippet.text.lines().next().unwrap_or_default();
        if first.chars().count() > PREVIEW_LEN {
            let truncated: String = first.chars().take(PREVIEW_LEN - 3).collect();
            Some(format!("{truncated}..."))
        } else {
            Some(first.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_reports_line_count() {
        let mut clipboard = SnippetClipboard::new();
        assert_eq!(
            clipboard.remember("code example", "a\nb\nc".to_string()),
            "Copied code example to clipboard (3 lines)"
        );
        assert_eq!(
            clipboard.remember("markup example", "<div></div>".to_string()),
            "Copied markup example to clipboard"
        );
        assert_eq!(clipboard.last().map(|s| s.label), Some("markup example"));
    }

    #[test]
    fn test_preview_truncates_first_line() {
        let mut clipboard = SnippetClipboard::new();
        assert_eq!(clipboard.get_preview(), None);

        clipboard.remember("code example", format!("{}\nsecond", "x".repeat(60)));
        let preview = clipboard.get_preview().unwrap_or_default();
        assert_eq!(preview.chars().count(), PREVIEW_LEN);
        assert!(preview.ends_with("..."));

        clipboard.remember("code example", "short\nsecond".to_string());
        assert_eq!(clipboard.get_preview().as_deref(), Some("short"));
    }
}
