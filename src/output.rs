//! Writing the rendered page to disk, or checking the copy on disk is current.

use eyre::{Context, Result};
use folio::render::digest;
use std::fs;
use std::path::Path;

/// Write `html` to `path`, creating parent directories. Returns the page digest.
pub fn write_page(path: &Path, html: &str) -> Result<String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context(format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, html).context(format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(digest(html))
}

/// Compare the file at `path` with a fresh render without touching it.
/// Returns the digest when they match.
pub fn check_page(path: &Path, html: &str) -> Result<String> {
    log::info!("Checking {} against a fresh render", path.display());
    let fresh = digest(html);
    let existing = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    if digest(&existing) != fresh {
        eyre::bail!("{} is out of date (expected sha256 {})", path.display(), fresh);
    }
    Ok(fresh)
}
