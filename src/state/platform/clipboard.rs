//! Clipboard access for exporting daily totals.
//!
//! On Linux the manager tries external tools first, in order:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//!
//! External tools keep the clipboard content alive after the application
//! exits. Everywhere else, and when no tool is installed, the `arboard`
//! crate is used.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend is available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// A backend was found but refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Cross-platform clipboard writer.
#[derive(Debug)]
pub struct ClipboardManager {
    /// Whether to try external tools before arboard on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a manager that prefers external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend is available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];
        TOOLS
            .iter()
            .any(|(tool, args)| Self::pipe_to_tool(tool, args, text))
    }

    /// Spawns `tool`, writes `text` to its stdin and waits for success.
    #[cfg(target_os = "linux")]
    fn pipe_to_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        let copied = child.wait().map(|s| s.success()).unwrap_or(false);
        if copied {
            tracing::debug!(tool, "Copied text with external clipboard tool");
        }
        copied
    }
}
