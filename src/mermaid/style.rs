use crate::graph::BlockKind;

/// Shape delimiters and style class for one block kind.
///
/// `shape_open`/`shape_close` wrap the quoted content in the node
/// declaration (`Start("...")`), `class` names the style class attached via
/// `:::`, and `fill` is the literal color emitted in the trailing `classDef`
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    pub shape_open: &'static str,
    pub shape_close: &'static str,
    pub class: &'static str,
    pub fill: &'static str,
}

/// The fixed style table.
///
/// The match is total over the closed [`BlockKind`] enum, which is what
/// keeps rendering infallible: a block cannot be constructed with a kind
/// that has no shape.
pub const fn style_for(kind: BlockKind) -> BlockStyle {
    match kind {
        BlockKind::StartEnd => BlockStyle {
            shape_open: "(",
            shape_close: ")",
            class: "startEndStyle",
            fill: "#FFADAD",
        },
        BlockKind::Process => BlockStyle {
            shape_open: "[",
            shape_close: "]",
            class: "processStyle",
            fill: "#CAFFBF",
        },
        BlockKind::Io => BlockStyle {
            shape_open: "[/",
            shape_close: "\\]",
            class: "ioStyle",
            fill: "#A0C4FF",
        },
        BlockKind::Decision => BlockStyle {
            shape_open: "{",
            shape_close: "}",
            class: "decisionStyle",
            fill: "#FDFFB6",
        },
    }
}
