//! Node transpiler: scene nodes → QML source fragments.
//!
//! One recursive pass, depth-first and pre-order: a node emits its own
//! properties, then its transpiled children, then its closing brace.
//! Imports and fonts discovered along the way are recorded on the
//! `RunContext` as side effects and folded in by the assembler afterward.

use crate::collect::RunContext;
use crate::error::{Result, TranspileError};
use crate::model::{Metadata, SceneNode};
use crate::tables::{AlignAxis, alignment_constant, anchor_directive};
use std::fmt::Write;
use std::path::Path;

/// The `typeName` sentinel that selects vector-path emission.
pub const VECTOR_PATH_TYPE: &str = "SvgPathItem";

/// Boolean options governing one transformation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranspileOptions {
    /// Allocate readable ids via the `IdAllocator` (`qmlId` base, falling
    /// back to `default`). Takes precedence over `force_unique_ids`.
    pub assign_readable_ids: bool,

    /// Emit the node's design-tool `uuid` verbatim as its id. A node
    /// without a `uuid` fails the run with `TranspileError::MissingUuid`.
    pub force_unique_ids: bool,

    /// Emit positioning directives for `metadata.anchors`.
    pub apply_anchors: bool,

    /// Emit the node's layer name as `objectName`.
    pub emit_object_names: bool,

    /// Hand the collected font set to the font consumer after the run.
    pub download_fonts: bool,
}

// ─── Kind resolution ──────────────────────────────────────────────────────

/// The element a node renders as, decided *before* any text is emitted.
///
/// Precedence is last-write-wins over the metadata fields: an asset beats
/// text, text beats a concrete type, a concrete type beats the plain
/// `Item` container. A node carrying several kind-selecting fields still
/// emits the property lines of every matching path — only the element
/// header follows the precedence.
#[derive(Debug)]
enum NodeKind<'a> {
    Item,
    Typed(&'a str),
    VectorShape,
    Text,
    Image,
}

impl NodeKind<'_> {
    fn element_name(&self) -> &str {
        match self {
            NodeKind::Item => "Item",
            NodeKind::Typed(name) => name,
            NodeKind::VectorShape => "Shape",
            NodeKind::Text => "Text",
            NodeKind::Image => "Image",
        }
    }
}

fn resolve_kind(meta: &Metadata) -> NodeKind<'_> {
    let mut kind = match meta.type_name.as_deref() {
        Some(VECTOR_PATH_TYPE) => NodeKind::VectorShape,
        Some(name) => NodeKind::Typed(name),
        None => NodeKind::Item,
    };
    if meta.text_details.is_some() {
        kind = NodeKind::Text;
    }
    if meta.asset_data.is_some() {
        kind = NodeKind::Image;
    }
    kind
}

// ─── Emission ─────────────────────────────────────────────────────────────

/// Transpile one scene node (and its subtree) into a QML fragment.
///
/// The fragment starts with a newline and carries no trailing newline, so
/// fragments concatenate cleanly in the assembler.
///
/// # Errors
/// Fails when `force_unique_ids` is set and a node lacks a `uuid`.
pub fn transpile_node(
    node: &SceneNode,
    options: &TranspileOptions,
    ctx: &mut RunContext,
) -> Result<String> {
    let mut out = String::with_capacity(256);
    emit_node(&mut out, node, 0, options, ctx)?;
    Ok(out)
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}

/// Start a property line: newline plus one indent level below `depth`.
fn open_line(out: &mut String, depth: usize) {
    out.push('\n');
    indent(out, depth + 1);
}

fn emit_node(
    out: &mut String,
    node: &SceneNode,
    depth: usize,
    options: &TranspileOptions,
    ctx: &mut RunContext,
) -> Result<()> {
    let meta = &node.metadata;
    let kind = resolve_kind(meta);

    out.push('\n');
    indent(out, depth);
    write!(out, "{} {{", kind.element_name()).unwrap();

    // Geometry, in fixed order.
    open_line(out, depth);
    write!(out, "x: {}", format_num(node.x)).unwrap();
    open_line(out, depth);
    write!(out, "y: {}", format_num(node.y)).unwrap();
    open_line(out, depth);
    write!(out, "z: {}", node.layer_index).unwrap();
    open_line(out, depth);
    write!(out, "width: {}", format_num(node.width)).unwrap();
    open_line(out, depth);
    write!(out, "height: {}", format_num(node.height)).unwrap();

    // Identifier. Readable ids win over forced unique ids when both are on.
    if options.assign_readable_ids {
        let base = meta.qml_id.as_deref().unwrap_or("default");
        let id = ctx.ids.allocate(base);
        open_line(out, depth);
        write!(out, "id: {id}").unwrap();
    } else if options.force_unique_ids {
        let uuid = meta
            .uuid
            .as_deref()
            .ok_or_else(|| TranspileError::MissingUuid {
                node: node.name.clone(),
            })?;
        open_line(out, depth);
        write!(out, "id: {uuid}").unwrap();
    }

    if options.emit_object_names {
        open_line(out, depth);
        write!(out, "objectName: \"{}\"", node.name).unwrap();
    }

    // Pre-rendered properties. The vector-path type nests them inside a
    // ShapePath block instead of the element body; the path-data entry
    // goes into an inner PathSvg block.
    if meta.type_name.as_deref() == Some(VECTOR_PATH_TYPE) {
        emit_shape_path(out, meta, depth);
    } else if let Some(properties) = &meta.qml_properties {
        for property in properties {
            open_line(out, depth);
            out.push_str(property);
        }
    }

    if let Some(visible) = meta.qml_visible {
        open_line(out, depth);
        write!(out, "visible: {visible}").unwrap();
    }

    if let Some(opacity) = meta.opacity {
        open_line(out, depth);
        write!(out, "opacity: {}", format_num(opacity)).unwrap();
    }

    if options.apply_anchors && let Some(anchors) = &meta.anchors {
        for anchor in anchors {
            // Unrecognized anchor names emit nothing.
            if let Some(directive) = anchor_directive(anchor) {
                open_line(out, depth);
                out.push_str(directive);
            }
        }
    }

    if let Some(imports) = &meta.extra_imports {
        for import in imports {
            ctx.add_import(import);
        }
    }

    if let Some(text) = &meta.text_details {
        open_line(out, depth);
        write!(out, "text: \"{}\"", text.contents).unwrap();
        open_line(out, depth);
        write!(out, "color: \"{}\"", text.text_color).unwrap();
        open_line(out, depth);
        write!(out, "font.family: \"{}\"", text.font_family).unwrap();
        open_line(out, depth);
        write!(out, "font.pixelSize: {}", format_num(text.font_size)).unwrap();
        if let Some(constant) = alignment_constant(AlignAxis::Vertical, &text.vertical_alignment) {
            open_line(out, depth);
            write!(out, "verticalAlignment: {constant}").unwrap();
        }
        if let Some(constant) =
            alignment_constant(AlignAxis::Horizontal, &text.horizontal_alignment)
        {
            open_line(out, depth);
            write!(out, "horizontalAlignment: {constant}").unwrap();
        }
        ctx.add_font(&text.font_family);
    }

    if let Some(transformation) = &meta.transformation {
        open_line(out, depth);
        write!(out, "rotation: {}", format_num(transformation.rotation)).unwrap();
        if transformation.flipped_horizontally || transformation.flipped_vertically {
            // Exactly one scale inversion; horizontal wins when both are set.
            open_line(out, depth);
            if transformation.flipped_horizontally {
                out.push_str("xScale: -1");
            } else {
                out.push_str("yScale: -1");
            }
            open_line(out, depth);
            out.push_str("origin.x: parent.width/2");
            open_line(out, depth);
            out.push_str("origin.y: parent.height/2");
        }
    }

    if let Some(asset) = &meta.asset_data {
        open_line(out, depth);
        write!(
            out,
            "source: \"./Images/{}\"",
            asset_basename(&asset.asset_path)
        )
        .unwrap();
    }

    for child in &node.children {
        emit_node(out, child, depth + 1, options, ctx)?;
    }

    out.push('\n');
    indent(out, depth);
    out.push('}');
    Ok(())
}

/// Emit the nested `ShapePath` / `PathSvg` blocks for a vector-path node.
fn emit_shape_path(out: &mut String, meta: &Metadata, depth: usize) {
    out.push('\n');
    open_line(out, depth);
    out.push_str("ShapePath {");

    let properties = meta.qml_properties.as_deref().unwrap_or(&[]);
    for property in properties {
        if !property.contains("path") {
            open_line(out, depth + 1);
            out.push_str(property);
        }
    }

    // An export with no path-data entry gets an empty Shape rather than
    // a failed run.
    if let Some(path_data) = properties.iter().find(|p| p.contains("path")) {
        out.push('\n');
        open_line(out, depth + 1);
        out.push_str("PathSvg {");
        open_line(out, depth + 2);
        out.push_str(path_data);
        open_line(out, depth + 1);
        out.push('}');
    }

    open_line(out, depth);
    out.push('}');
}

/// File name component of an exported asset path.
fn asset_basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Format a number without a trailing `.0` for whole values.
fn format_num(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
