//! Output writer: assembled documents → `<name>.qml` files.

use crate::error::Result;
use log::{info, warn};
use qb_core::QmlDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Persist one assembled document as `<dir>/<name>.qml`.
///
/// # Errors
/// Fails when the directory or the file cannot be written.
pub fn write_document(dir: &Path, document: &QmlDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.qml", document.name));
    fs::write(&path, &document.source)?;
    info!("wrote `{}`", path.display());
    Ok(path)
}

/// Persist every document, reporting failures per document.
///
/// A failed write never rolls back or aborts the remaining documents;
/// failures come back paired with the document name.
pub fn write_documents(
    dir: &Path,
    documents: &[QmlDocument],
) -> (Vec<PathBuf>, Vec<(String, crate::BridgeError)>) {
    let mut written = Vec::new();
    let mut failures = Vec::new();
    for document in documents {
        match write_document(dir, document) {
            Ok(path) => written.push(path),
            Err(err) => {
                warn!("failed to write document `{}`: {err}", document.name);
                failures.push((document.name.clone(), err));
            }
        }
    }
    (written, failures)
}
