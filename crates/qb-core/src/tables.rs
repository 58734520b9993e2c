//! Static lookup tables: symbolic anchor and alignment names → QML.

use phf::phf_map;

/// Anchor name → positioning directive.
///
/// The upstream export format once mapped `top` to `anchors.fill`, but
/// that entry was shadowed by the edge mapping below; only the edge
/// directive is reachable and only it is kept.
static ANCHORS: phf::Map<&'static str, &'static str> = phf_map! {
    "top" => "anchors.top: parent.top",
    "left" => "anchors.left: parent.left",
    "right" => "anchors.right: parent.right",
    "bottom" => "anchors.bottom: parent.bottom",
};

/// Alignment name → `Text.Align*` constant, for the non-axis-dependent names.
static ALIGNMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "top" => "Text.AlignTop",
    "left" => "Text.AlignLeft",
    "right" => "Text.AlignRight",
    "bottom" => "Text.AlignBottom",
    "justify" => "Text.AlignJustify",
};

/// Which alignment property an alignment value is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignAxis {
    Horizontal,
    Vertical,
}

/// Resolve an anchor name to its QML directive. Unrecognized names yield
/// `None` — the transpiler emits nothing for them rather than failing.
#[must_use]
pub fn anchor_directive(anchor: &str) -> Option<&'static str> {
    ANCHORS.get(anchor).copied()
}

/// Resolve an alignment value to its QML constant.
///
/// `center` is axis-dependent and handled outside the table; every other
/// recognized value maps directly. Unrecognized values yield `None`.
#[must_use]
pub fn alignment_constant(axis: AlignAxis, value: &str) -> Option<&'static str> {
    if value == "center" {
        return Some(match axis {
            AlignAxis::Horizontal => "Text.AlignHCenter",
            AlignAxis::Vertical => "Text.AlignVCenter",
        });
    }
    ALIGNMENTS.get(value).copied()
}
