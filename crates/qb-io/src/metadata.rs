//! Metadata loader: `.metadata` JSON file → `BridgeDocument`.

use crate::error::{BridgeError, Result};
use log::info;
use qb_core::BridgeDocument;
use std::fs;
use std::path::Path;

/// Load and parse a `.metadata` scene-graph file.
///
/// # Errors
/// Read and parse failures carry the offending path so the caller can
/// point the user at the right file.
pub fn load_metadata(path: &Path) -> Result<BridgeDocument> {
    let text = fs::read_to_string(path).map_err(|source| BridgeError::MetadataRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: BridgeDocument =
        serde_json::from_str(&text).map_err(|source| BridgeError::MetadataParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "loaded metadata `{}`: {} artboard(s), {} artboard set(s)",
        doc.document_info.name,
        doc.artboards.len(),
        doc.artboard_sets.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn loads_a_valid_metadata_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Doc.metadata");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "documentInfo": {{ "name": "Doc" }}, "artboards": [], "artboardSets": [] }}"#
        )
        .unwrap();

        let doc = load_metadata(&path).unwrap();
        assert_eq!(doc.document_info.name, "Doc");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_metadata(Path::new("/nonexistent/Doc.metadata")).unwrap_err();
        match err {
            BridgeError::MetadataRead { path, .. } => {
                assert!(path.ends_with("Doc.metadata"));
            }
            other => panic!("expected MetadataRead, got {other}"),
        }
    }

    #[test]
    fn malformed_json_reports_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Doc.metadata");
        fs::write(&path, "{ not json").unwrap();

        let err = load_metadata(&path).unwrap_err();
        assert!(matches!(err, BridgeError::MetadataParse { .. }));
    }
}
