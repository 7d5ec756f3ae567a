use crate::error::Result;
use std::path::{Path, PathBuf};

/// Exported README filename: the title with everything outside
/// `[A-Za-z0-9-_]` replaced by `_`, suffixed `_README.md`.
#[must_use]
pub fn readme_filename(title: &str) -> String {
    let safe: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_README.md")
}

/// Write generated markdown as a UTF-8 file named after the title.
pub async fn export_markdown(dir: &Path, title: &str, markdown: &str) -> Result<PathBuf> {
    let path = dir.join(readme_filename(title));
    tokio::fs::write(&path, markdown).await?;
    log::info!("Exported README to {}", path.display());
    Ok(path)
}
