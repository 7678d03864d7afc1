//! Document I/O and output-path derivation

use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || {
        Document::load_mem(&bytes)
            .map_err(|e| NupError::InvalidDocument(format!("{}: {}", path.display(), e)))
    })
    .await??;
    Ok(doc)
}

/// Save a document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, NupError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Check that an input path names an existing `.pdf` file
pub fn validate_input_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(NupError::InvalidPath(format!(
            "No such file: {}",
            path.display()
        )));
    }
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(NupError::InvalidPath(format!(
            "Not a PDF file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Derive an output path next to the source: `<stem>_<suffix>.pdf`.
///
/// If that file already exists, a numeric suffix `(n)` is appended before the
/// extension, taking the first free n ≥ 1.
pub fn derive_output_path(source: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let source = source.as_ref();
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let dir = source.parent().unwrap_or_else(|| Path::new(""));

    let candidate = dir.join(format!("{}_{}.pdf", stem, suffix));
    if !candidate.exists() {
        return candidate;
    }

    let mut n = 1;
    loop {
        let candidate = dir.join(format!("{}_{}({}).pdf", stem, suffix, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
