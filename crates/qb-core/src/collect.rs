//! Run-scoped state threaded through one transformation run.
//!
//! One `RunContext` is created per run and passed by `&mut` into the
//! transpiler — never global, so independent runs cannot interfere.
//! Imports and fonts are collected as side effects of the traversal and
//! read back only after it completes: the assembler folds the import set
//! into every emitted document, the font consumer receives the font set.

use crate::id::IdAllocator;
use std::collections::BTreeSet;

/// Identifier counters plus the import and font collectors for one run.
#[derive(Debug, Default)]
pub struct RunContext {
    /// Readable-identifier allocator, shared across all documents.
    pub ids: IdAllocator,

    imports: BTreeSet<String>,
    fonts: BTreeSet<String>,
}

impl RunContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an import statement. Idempotent.
    pub fn add_import(&mut self, import: &str) {
        self.imports.insert(import.to_string());
    }

    /// Register a referenced font family. Idempotent.
    pub fn add_font(&mut self, family: &str) {
        self.fonts.insert(family.to_string());
    }

    /// The accumulated import statements, in stable (sorted) order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// The accumulated font families, in stable (sorted) order.
    #[must_use]
    pub fn fonts(&self) -> &BTreeSet<String> {
        &self.fonts
    }

    /// Consume the context, keeping only the font set for the downloader.
    #[must_use]
    pub fn into_fonts(self) -> BTreeSet<String> {
        self.fonts
    }
}
