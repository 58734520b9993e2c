//! Asset relocation: move exported images into the `Images` subdirectory.
//!
//! The transpiler emits `source: "./Images/<name>"` for every image node,
//! so the exported assets must sit there before the emitted documents are
//! of any use. Runs before transpilation.

use crate::error::Result;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Image extensions recognized in design-tool exports.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "svg"];

/// Move every image file directly under `dir` into `dest`.
///
/// `dest` is created if needed. Non-image files and subdirectories are
/// left in place. A file that cannot be moved is reported and skipped;
/// the remaining images still move. Returns the number of files moved.
///
/// # Errors
/// Fails only when `dir` cannot be listed or `dest` cannot be created.
pub fn relocate_images(dir: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    let mut moved = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_image(&path) {
            continue;
        }
        let file_name = entry.file_name();
        match fs::rename(&path, dest.join(&file_name)) {
            Ok(()) => moved += 1,
            Err(err) => warn!("could not move `{}`: {err}", path.display()),
        }
    }

    info!("moved {moved} image(s) into `{}`", dest.display());
    Ok(moved)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
        })
}
