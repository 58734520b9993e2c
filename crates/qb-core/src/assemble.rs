//! Document assembler: transpiled fragments → complete QML documents.
//!
//! A run transpiles every top-level artboard and every artboard set with
//! one shared `RunContext`, then assembles each named document: import
//! lines first, the namespace-stripped body after, and a final textual
//! cleanup pass over the whole text. Because the import set is shared
//! across the run, documents are assembled only after all of them have
//! been transpiled — an import discovered in one document is prefixed
//! onto every document of the run.

use crate::collect::RunContext;
use crate::error::Result;
use crate::model::{BridgeDocument, SceneNode};
use crate::transpile::{TranspileOptions, transpile_node};
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Namespace prefix stripped from document bodies (not from import lines).
const NAMESPACE_PREFIX: &str = "QtQuick.";

/// Marker unwrapped by the cleanup pass: `ENUM(<inner>)` → `<inner>`.
/// Single-pass and non-recursive — a nested marker inside `<inner>` stays.
static ENUM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ENUM\((.*?)\)").unwrap());

/// One assembled output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmlDocument {
    /// Output name — the `.qml` file is named after it.
    pub name: String,
    /// Complete QML source text.
    pub source: String,
}

/// Everything one run produces.
#[derive(Debug)]
pub struct TransformOutput {
    /// One document per top-level artboard group and per artboard set.
    pub documents: Vec<QmlDocument>,
    /// Every font family referenced by any text node in the run.
    pub fonts: BTreeSet<String>,
}

/// Transform a full bridge document into assembled QML documents.
///
/// # Errors
/// Fails on the first required-field violation reported by the transpiler.
pub fn transform_document(
    doc: &BridgeDocument,
    options: &TranspileOptions,
) -> Result<TransformOutput> {
    let mut ctx = RunContext::new();

    // Transpile everything first so the shared import set is complete
    // before any document is assembled.
    let mut bodies = Vec::with_capacity(1 + doc.artboard_sets.len());
    bodies.push((
        doc.document_info.name.clone(),
        transpile_artboards(&doc.artboards, options, &mut ctx)?,
    ));
    for set in &doc.artboard_sets {
        bodies.push((
            set.name.clone(),
            transpile_artboards(&set.artboards, options, &mut ctx)?,
        ));
    }

    let documents = bodies
        .into_iter()
        .map(|(name, body)| {
            debug!("assembling document `{name}`");
            QmlDocument {
                source: assemble(&body, &ctx),
                name,
            }
        })
        .collect::<Vec<_>>();

    info!(
        "transformed {} document(s), {} import(s), {} font(s)",
        documents.len(),
        ctx.imports().count(),
        ctx.fonts().len()
    );

    Ok(TransformOutput {
        documents,
        fonts: ctx.into_fonts(),
    })
}

fn transpile_artboards(
    artboards: &[SceneNode],
    options: &TranspileOptions,
    ctx: &mut RunContext,
) -> Result<String> {
    let mut body = String::new();
    for artboard in artboards {
        body.push_str(&transpile_node(artboard, options, ctx)?);
        body.push('\n');
    }
    Ok(body)
}

/// Prefix the run's imports onto a body and run the cleanup pass.
fn assemble(body: &str, ctx: &RunContext) -> String {
    let mut source = String::with_capacity(body.len() + 64);
    for import in ctx.imports() {
        source.push_str(import);
        source.push('\n');
    }
    // The namespace strip applies to the body only: import statements
    // must keep their fully-qualified module names.
    source.push_str(&body.replace(NAMESPACE_PREFIX, ""));
    ENUM_MARKER.replace_all(&source, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;
    use pretty_assertions::assert_eq;

    fn artboard(metadata: Metadata) -> SceneNode {
        SceneNode {
            x: 0.0,
            y: 0.0,
            layer_index: 0,
            width: 100.0,
            height: 50.0,
            name: "Board".into(),
            metadata,
            children: Vec::new(),
        }
    }

    fn document(artboards: Vec<SceneNode>) -> BridgeDocument {
        BridgeDocument {
            document_info: crate::model::DocumentInfo { name: "Doc".into() },
            artboards,
            artboard_sets: Vec::new(),
        }
    }

    #[test]
    fn namespace_prefix_is_stripped_from_the_body() {
        let meta = Metadata {
            qml_properties: Some(vec![
                "horizontalAlignment: QtQuick.Text.AlignHCenter".into(),
            ]),
            ..Default::default()
        };
        let output =
            transform_document(&document(vec![artboard(meta)]), &TranspileOptions::default())
                .unwrap();
        let source = &output.documents[0].source;
        assert!(source.contains("horizontalAlignment: Text.AlignHCenter"));
        assert!(!source.contains("QtQuick.Text"));
    }

    #[test]
    fn import_lines_keep_their_namespace() {
        let meta = Metadata {
            extra_imports: Some(smallvec::smallvec!["import QtQuick.Shapes 1.15".into()]),
            ..Default::default()
        };
        let output =
            transform_document(&document(vec![artboard(meta)]), &TranspileOptions::default())
                .unwrap();
        let source = &output.documents[0].source;
        assert!(source.starts_with("import QtQuick.Shapes 1.15\n"));
    }

    #[test]
    fn enum_marker_is_unwrapped_once_not_recursively() {
        let meta = Metadata {
            qml_properties: Some(vec![
                "easing.type: ENUM(Easing.InOutQuad)".into(),
                "nested: ENUM(outer ENUM(inner))".into(),
            ]),
            ..Default::default()
        };
        let output =
            transform_document(&document(vec![artboard(meta)]), &TranspileOptions::default())
                .unwrap();
        let source = &output.documents[0].source;
        assert!(source.contains("easing.type: Easing.InOutQuad"));
        // Lazy match stops at the first `)`; the inner marker survives the
        // single pass with only its closing paren consumed.
        assert!(source.contains("nested: outer ENUM(inner"));
    }

    #[test]
    fn artboard_sets_get_their_own_named_documents() {
        let doc = BridgeDocument {
            document_info: crate::model::DocumentInfo { name: "Doc".into() },
            artboards: vec![artboard(Metadata::default())],
            artboard_sets: vec![crate::model::ArtboardSet {
                name: "Screens".into(),
                artboards: vec![artboard(Metadata::default())],
            }],
        };
        let output = transform_document(&doc, &TranspileOptions::default()).unwrap();
        let names: Vec<_> = output.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Doc", "Screens"]);
    }

    #[test]
    fn imports_discovered_anywhere_prefix_every_document() {
        // The import is discovered while transpiling the artboard set, but
        // the top-level document is prefixed with it too.
        let set_meta = Metadata {
            extra_imports: Some(smallvec::smallvec!["import QtQuick.Shapes 1.15".into()]),
            ..Default::default()
        };
        let doc = BridgeDocument {
            document_info: crate::model::DocumentInfo { name: "Doc".into() },
            artboards: vec![artboard(Metadata::default())],
            artboard_sets: vec![crate::model::ArtboardSet {
                name: "Screens".into(),
                artboards: vec![artboard(set_meta)],
            }],
        };
        let output = transform_document(&doc, &TranspileOptions::default()).unwrap();
        for document in &output.documents {
            assert!(
                document.source.starts_with("import QtQuick.Shapes 1.15\n"),
                "document `{}` is missing the shared import",
                document.name
            );
        }
    }

    #[test]
    fn identifier_counters_span_the_whole_run() {
        let options = TranspileOptions {
            assign_readable_ids: true,
            ..Default::default()
        };
        let doc = BridgeDocument {
            document_info: crate::model::DocumentInfo { name: "Doc".into() },
            artboards: vec![artboard(Metadata::default())],
            artboard_sets: vec![crate::model::ArtboardSet {
                name: "Screens".into(),
                artboards: vec![artboard(Metadata::default())],
            }],
        };
        let output = transform_document(&doc, &options).unwrap();
        assert!(output.documents[0].source.contains("id: default0"));
        // Not reset between documents.
        assert!(output.documents[1].source.contains("id: default1"));
    }
}
