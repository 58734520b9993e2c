//! Bundle extraction: `.qtbridge` zip container → directory.

use crate::error::Result;
use log::info;
use std::fs;
use std::fs::File;
use std::path::Path;

/// Unpack a `.qtbridge` bundle into `dest`, creating it if needed.
///
/// # Errors
/// Fails when the archive cannot be opened or any entry cannot be written.
pub fn extract_bundle(archive: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    zip.extract(dest)?;
    info!(
        "extracted {} entries from `{}`",
        zip.len(),
        archive.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    fn write_test_bundle(path: &Path) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("Doc.metadata", FileOptions::default()).unwrap();
        zip.write_all(br#"{ "documentInfo": { "name": "Doc" } }"#)
            .unwrap();
        zip.start_file("icon.png", FileOptions::default()).unwrap();
        zip.write_all(&[0u8; 4]).unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn extracts_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("Doc.qtbridge");
        write_test_bundle(&bundle);

        let dest = dir.path().join("out");
        extract_bundle(&bundle, &dest).unwrap();
        assert!(dest.join("Doc.metadata").is_file());
        assert!(dest.join("icon.png").is_file());
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("broken.qtbridge");
        fs::write(&bundle, b"not a zip").unwrap();

        let err = extract_bundle(&bundle, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, crate::BridgeError::Archive(_)));
    }
}
