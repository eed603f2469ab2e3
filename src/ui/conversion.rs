use ahash::AHashSet;

use super::types::UiSession;
use crate::error::ImportError;
use crate::graph::{Block, BlockKind, Connection, FlowGraph, Layout};

/// A trait for session snapshots that can be converted into a validated
/// [`FlowGraph`].
///
/// This is the seam between foreign wire formats and the typed graph model:
/// everything the store and renderer assume (known kinds, unique
/// Mermaid-safe ids, existing endpoints) is checked here, so that nothing
/// downstream ever has to.
///
/// # Example
///
/// ```rust
/// use nagare::prelude::*;
///
/// let session = UiSession::demo();
/// let graph = session.into_graph()?;
/// assert_eq!(graph.blocks().len(), 7);
/// # Ok::<(), ImportError>(())
/// ```
pub trait IntoGraph {
    /// Consumes the snapshot and converts it into a validated graph.
    fn into_graph(self) -> Result<FlowGraph, ImportError>;
}

impl IntoGraph for UiSession {
    fn into_graph(self) -> Result<FlowGraph, ImportError> {
        let mut seen_ids: AHashSet<String> = AHashSet::with_capacity(self.blocks.len());
        let mut blocks = Vec::with_capacity(self.blocks.len());

        for ui_block in self.blocks {
            let kind = BlockKind::from_wire(&ui_block.kind).ok_or_else(|| {
                ImportError::UnknownBlockKind {
                    block_id: ui_block.id.clone(),
                    kind: ui_block.kind.clone(),
                }
            })?;
            if !is_mermaid_safe(&ui_block.id) {
                return Err(ImportError::UnsafeBlockId(ui_block.id));
            }
            if !seen_ids.insert(ui_block.id.clone()) {
                return Err(ImportError::DuplicateBlockId(ui_block.id));
            }

            blocks.push(Block {
                id: ui_block.id,
                name: ui_block.name,
                kind,
                content: ui_block.content,
                layout: Layout {
                    x: ui_block.layout.x,
                    y: ui_block.layout.y,
                    w: ui_block.layout.w,
                    h: ui_block.layout.h,
                },
            });
        }

        let mut connections = Vec::with_capacity(self.connections.len());
        for ui_connection in self.connections {
            // Unlike interactive edits, imported snapshots carry no
            // guarantee that endpoints were picked from the live block list.
            if !seen_ids.contains(&ui_connection.from) || !seen_ids.contains(&ui_connection.to) {
                return Err(ImportError::DanglingConnection {
                    from: ui_connection.from,
                    to: ui_connection.to,
                });
            }
            connections.push(Connection {
                from: ui_connection.from,
                to: ui_connection.to,
                label: ui_connection.label,
            });
        }

        Ok(FlowGraph::from_parts(blocks, connections))
    }
}

/// Checks the `[A-Za-z][A-Za-z0-9]*` shape the renderer relies on.
fn is_mermaid_safe(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
