//! Loading document text from disk.

use anyhow::{Context, Result};
use std::path::Path;

const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Read a plain-text document.
///
/// PDF, DOCX and image files need an external extractor and are rejected.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        if !PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
            anyhow::bail!(
                "Unsupported document format '.{}' for {}: extract the text first and pass a .txt file",
                ext,
                path.display()
            );
        }
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}
