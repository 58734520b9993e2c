//! Font-set consumer: receives the families collected during a run.
//!
//! The actual network fetch is an external concern; what ships here is
//! the consumer seam plus a manifest implementation that records the
//! families for a downstream downloader. A failure for one family never
//! aborts the rest.

use crate::error::Result;
use log::{info, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives one font family at a time after the run completes.
pub trait FontConsumer {
    /// Handle a single referenced font family.
    ///
    /// # Errors
    /// A failure is reported for this family only; other families are
    /// still consumed.
    fn consume(&mut self, family: &str) -> Result<()>;
}

/// Feed every collected family to `consumer`, isolating failures.
///
/// Returns the families that failed, paired with their errors.
pub fn consume_fonts(
    consumer: &mut dyn FontConsumer,
    fonts: &BTreeSet<String>,
) -> Vec<(String, crate::BridgeError)> {
    let mut failures = Vec::new();
    for family in fonts {
        if let Err(err) = consumer.consume(family) {
            warn!("font `{family}` failed: {err}");
            failures.push((family.clone(), err));
        }
    }
    failures
}

/// Records consumed families to `<dir>/fonts.txt`, one per line.
#[derive(Debug)]
pub struct FontManifest {
    dir: PathBuf,
    families: Vec<String>,
}

impl FontManifest {
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            families: Vec::new(),
        }
    }

    /// Write the manifest file and return its path.
    ///
    /// # Errors
    /// Fails when the directory or the manifest file cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join("fonts.txt");
        let mut contents = self.families.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&path, contents)?;
        info!(
            "recorded {} font(s) in `{}`",
            self.families.len(),
            path.display()
        );
        Ok(path)
    }
}

impl FontConsumer for FontManifest {
    fn consume(&mut self, family: &str) -> Result<()> {
        self.families.push(family.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeError;
    use pretty_assertions::assert_eq;

    struct FailsOn(&'static str, Vec<String>);

    impl FontConsumer for FailsOn {
        fn consume(&mut self, family: &str) -> Result<()> {
            if family == self.0 {
                return Err(BridgeError::Io(std::io::Error::other("boom")));
            }
            self.1.push(family.to_string());
            Ok(())
        }
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let fonts: BTreeSet<String> = ["Inter", "Lato", "Roboto"]
            .into_iter()
            .map(String::from)
            .collect();
        let mut consumer = FailsOn("Lato", Vec::new());
        let failures = consume_fonts(&mut consumer, &fonts);

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "Lato");
        assert_eq!(consumer.1, vec!["Inter", "Roboto"]);
    }

    #[test]
    fn manifest_records_families_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let fonts: BTreeSet<String> =
            ["Roboto", "Inter"].into_iter().map(String::from).collect();

        let mut manifest = FontManifest::new(&dir.path().join("Fonts"));
        let failures = consume_fonts(&mut manifest, &fonts);
        assert!(failures.is_empty());

        let path = manifest.finish().unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "Inter\nRoboto\n");
    }
}
