use std::fmt;

/// The closed set of block types a flowchart can contain.
///
/// Each kind maps to exactly one entry in the Mermaid style table, so every
/// block that exists has a defined shape. There is deliberately no catch-all
/// variant: an unknown kind string arriving from outside is rejected at
/// session import, never carried into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Terminator (start or end of the algorithm), drawn with rounded ends.
    StartEnd,
    /// Processing step, drawn as a rectangle.
    Process,
    /// Input/output step, drawn as a parallelogram.
    Io,
    /// Branching condition, drawn as a diamond.
    Decision,
}

impl BlockKind {
    /// All kinds, in style-table order. The renderer emits one `classDef`
    /// line per entry in this order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::StartEnd,
        BlockKind::Process,
        BlockKind::Io,
        BlockKind::Decision,
    ];

    /// The kind's wire name, as stored in session JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::StartEnd => "start_end",
            BlockKind::Process => "process",
            BlockKind::Io => "io",
            BlockKind::Decision => "decision",
        }
    }

    /// Parses a wire name from session JSON.
    ///
    /// Unknown names yield `None`. That includes the legacy `"loop"` kind,
    /// which has no style-table entry and therefore no drawable shape.
    pub fn from_wire(name: &str) -> Option<BlockKind> {
        match name {
            "start_end" => Some(BlockKind::StartEnd),
            "process" => Some(BlockKind::Process),
            "io" => Some(BlockKind::Io),
            "decision" => Some(BlockKind::Decision),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position and size of a block on the grid canvas, in grid units.
///
/// Mutated freely by drag and resize interactions; the store performs no
/// bounds or overlap validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Default for Layout {
    /// The rectangle a freshly added block occupies before the user drags it.
    fn default() -> Self {
        Layout { x: 0, y: 0, w: 4, h: 2 }
    }
}

/// One node in the flowchart graph, representing a single algorithm step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Unique across all blocks in the graph, stable for the block's
    /// lifetime, and always Mermaid-safe (`[A-Za-z][A-Za-z0-9]*`).
    pub id: String,
    /// Display label shown in the block header; free text.
    pub name: String,
    pub kind: BlockKind,
    /// User-editable text shown inside the block and embedded (escaped) in
    /// the rendered markup.
    pub content: String,
    pub layout: Layout,
}
