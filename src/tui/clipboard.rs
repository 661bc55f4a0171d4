//! Clipboard access for the copy-report action
//!
//! Uses `arboard` for Windows, macOS and Linux. A fresh clipboard handle is
//! opened per copy; nothing is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux) or when access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")
}

/// Copy `text` and return the toast message describing the outcome
pub fn copy_with_feedback(text: &str, what: &str) -> String {
    match copy_to_clipboard(text) {
        Ok(()) => {
            tracing::debug!("Copied {} ({} bytes)", what, text.len());
            format!("✓ Copied {} to clipboard", what)
        }
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            "✗ Failed to copy".to_string()
        }
    }
}
