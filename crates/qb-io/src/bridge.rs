//! The end-to-end bridge pipeline.
//!
//! Mirrors the lifecycle around the core transformation: detect the input
//! kind, unpack if needed, load the metadata, relocate image assets,
//! transform, persist the documents, and hand the collected font set to
//! the consumer. Collaborator failures (extraction, asset moves, single
//! writes, single fonts) are reported and survive; input and transpile
//! failures abort the run.

use crate::assets::relocate_images;
use crate::bundle::extract_bundle;
use crate::error::{BridgeError, Result};
use crate::fonts::{FontManifest, consume_fonts};
use crate::metadata::load_metadata;
use crate::writer::write_documents;
use log::{info, warn};
use qb_core::{TranspileOptions, transform_document};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// One configured transformation job.
#[derive(Debug, Clone)]
pub struct BridgeJob {
    /// A `.qtbridge` bundle or a bare `.metadata` file.
    pub input: PathBuf,
    /// Directory the project directory is created under.
    pub out_dir: PathBuf,
    pub options: TranspileOptions,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct BridgeReport {
    /// Directory holding the emitted documents and relocated assets.
    pub project_dir: PathBuf,
    /// Documents successfully written.
    pub written: Vec<PathBuf>,
    /// Documents that failed to write, with their errors.
    pub write_failures: Vec<(String, BridgeError)>,
    /// Font families referenced by the run.
    pub fonts: BTreeSet<String>,
    /// Image assets moved into `Images/`.
    pub images_moved: usize,
}

impl BridgeJob {
    /// Run the full pipeline.
    ///
    /// # Errors
    /// Fails on unsupported input, unreadable metadata, or a
    /// required-field violation during transpilation. Extraction,
    /// per-document, and per-font failures are reported without
    /// aborting the run.
    pub fn run(&self) -> Result<BridgeReport> {
        let stem = self
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| BridgeError::UnsupportedInput {
                path: self.input.clone(),
            })?;
        let extension = self
            .input
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let project_dir = self.out_dir.join(stem);

        let (metadata_path, is_bundle) = match extension {
            "qtbridge" => {
                info!("input is a qtbridge bundle, extracting");
                // Extraction failure is reported but does not abort by
                // itself: the run proceeds with whatever was unpacked, and
                // a missing metadata file surfaces as a load failure below.
                if let Err(err) = extract_bundle(&self.input, &project_dir) {
                    warn!("bundle extraction failed: {err}");
                }
                (project_dir.join(format!("{stem}.metadata")), true)
            }
            "metadata" => {
                fs::create_dir_all(&project_dir)?;
                (self.input.clone(), false)
            }
            _ => {
                return Err(BridgeError::UnsupportedInput {
                    path: self.input.clone(),
                });
            }
        };

        let doc = load_metadata(&metadata_path)?;

        // Image nodes reference `./Images/<name>`, so assets move first.
        // A move failure degrades the output but does not stop the run.
        let images_moved = match relocate_images(&project_dir, &project_dir.join("Images")) {
            Ok(moved) => moved,
            Err(err) => {
                warn!("asset relocation failed: {err}");
                0
            }
        };

        let output = transform_document(&doc, &self.options)?;
        let (written, write_failures) = write_documents(&project_dir, &output.documents);

        if is_bundle {
            // The unpacked metadata file has served its purpose.
            if let Err(err) = fs::remove_file(&metadata_path) {
                warn!("could not remove `{}`: {err}", metadata_path.display());
            }
        }

        if self.options.download_fonts {
            let mut manifest = FontManifest::new(&project_dir.join("Fonts"));
            let failures = consume_fonts(&mut manifest, &output.fonts);
            if !failures.is_empty() {
                warn!("{} font(s) could not be recorded", failures.len());
            }
            if let Err(err) = manifest.finish() {
                warn!("could not write font manifest: {err}");
            }
        }

        Ok(BridgeReport {
            project_dir,
            written,
            write_failures,
            fonts: output.fonts,
            images_moved,
        })
    }
}
