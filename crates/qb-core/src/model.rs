//! Data model for Qt Bridge `.metadata` documents.
//!
//! The input is a JSON scene graph exported by a design tool: a document
//! header, a list of top-level artboards, and named artboard sets. Every
//! visual element is a `SceneNode` carrying geometry plus an optional
//! `Metadata` bag — which of the optional metadata fields are present
//! decides how the transpiler renders the node (see `transpile`).

use serde::Deserialize;
use smallvec::SmallVec;

// ─── Document ────────────────────────────────────────────────────────────

/// A parsed `.metadata` document — the root of one transformation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeDocument {
    pub document_info: DocumentInfo,

    /// Top-level artboards, emitted into the document named after
    /// `document_info.name`.
    #[serde(default)]
    pub artboards: Vec<SceneNode>,

    /// Named artboard groupings, each emitted into its own document.
    #[serde(default)]
    pub artboard_sets: Vec<ArtboardSet>,
}

/// Document header block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub name: String,
}

/// A named grouping of artboards sharing one output document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtboardSet {
    pub name: String,
    #[serde(default)]
    pub artboards: Vec<SceneNode>,
}

// ─── Scene nodes ─────────────────────────────────────────────────────────

/// One element of the design tree — an artboard or a nested visual node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub x: f64,
    pub y: f64,

    /// Stacking order, emitted as the `z` property.
    pub layer_index: i64,

    pub width: f64,
    pub height: f64,

    /// Design-tool layer name (emitted as `objectName` when requested).
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// Per-node styling and typing metadata. All fields are optional; the
/// combination present on a node selects its emission path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Preferred readable identifier base (e.g. `rectangle`).
    pub qml_id: Option<String>,

    /// Design-tool UUID, used verbatim when unique ids are forced.
    pub uuid: Option<String>,

    /// Concrete element type (e.g. `Rectangle`). The sentinel value
    /// `SvgPathItem` selects the vector-path emission path instead.
    pub type_name: Option<String>,

    /// Pre-rendered property assignments, appended verbatim.
    pub qml_properties: Option<Vec<String>>,

    pub qml_visible: Option<bool>,

    pub opacity: Option<f64>,

    /// Symbolic anchor names (`top`, `left`, ...), resolved via the
    /// anchor table when the anchors option is on.
    pub anchors: Option<SmallVec<[String; 4]>>,

    /// Import statements this node requires (e.g. `import QtQuick.Shapes`).
    pub extra_imports: Option<SmallVec<[String; 2]>>,

    pub text_details: Option<TextDetails>,

    pub transformation: Option<Transformation>,

    pub asset_data: Option<AssetData>,
}

// ─── Metadata payloads ───────────────────────────────────────────────────

/// Text content and font styling for text nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetails {
    pub contents: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub vertical_alignment: String,
    pub horizontal_alignment: String,
}

/// Rotation and mirroring.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub rotation: f64,
    #[serde(default)]
    pub flipped_horizontally: bool,
    #[serde(default)]
    pub flipped_vertically: bool,
}

/// Reference to an exported image asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    /// Path as exported by the design tool. Only the file name matters —
    /// the asset relocator moves the file into `Images/` before emission.
    pub asset_path: String,
}
