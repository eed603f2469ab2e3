//! Action dispatch for one interactive editing session.
//!
//! The canvas UI translates button presses, text edits, and drags into
//! [`EditorAction`] values that carry their target ids explicitly; there are
//! no captured callbacks, so which block or connection an action addresses
//! is never ambiguous.

use crate::error::GraphError;
use crate::graph::{Connection, FlowGraph, BlockKind, Layout};
use crate::mermaid;

/// One user interaction against the session graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// "Add block" sidebar button: a fresh block of the given kind, with the
    /// given display name.
    AddBlock { kind: BlockKind, name: String },
    /// Inline edit of a block's content text.
    UpdateContent { block_id: String, content: String },
    /// Drag or resize on the canvas grid.
    MoveBlock { block_id: String, layout: Layout },
    /// Per-block delete button; cascades to incident connections.
    DeleteBlock { block_id: String },
    /// "Add connection" sidebar form.
    AddConnection {
        from: String,
        to: String,
        label: String,
    },
    /// Per-row delete button in the connection list; structural match.
    DeleteConnection(Connection),
    /// "Clear all" button.
    ClearAll,
}

/// One editing session: a graph plus the dispatch that mutates it.
///
/// Created at session start, dropped at session end; nothing is shared
/// across sessions. Each action fully mutates the graph before the next one
/// is accepted, and the diagram is re-derived in full on every read.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    graph: FlowGraph,
}

impl Editor {
    /// Starts a session with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an imported graph snapshot.
    pub fn with_graph(graph: FlowGraph) -> Self {
        Editor { graph }
    }

    /// Applies one action to the session graph.
    ///
    /// Connection rejections are warnings, not failures: the graph is
    /// unchanged, the rejection is logged for the UI to surface, and the
    /// session continues. Stale ids on update/move/delete are debug-logged
    /// no-ops, matching how the canvas ignores events for widgets that no
    /// longer exist.
    pub fn apply(&mut self, action: EditorAction) -> Result<(), GraphError> {
        match action {
            EditorAction::AddBlock { kind, name } => {
                let block = self.graph.add_block(kind, &name);
                log::debug!("added {} block '{}'", block.kind, block.id);
                Ok(())
            }
            EditorAction::UpdateContent { block_id, content } => {
                if !self.graph.update_content(&block_id, &content) {
                    log::debug!("content edit for unknown block '{block_id}' ignored");
                }
                Ok(())
            }
            EditorAction::MoveBlock { block_id, layout } => {
                if !self.graph.update_layout(&block_id, layout) {
                    log::debug!("move of unknown block '{block_id}' ignored");
                }
                Ok(())
            }
            EditorAction::DeleteBlock { block_id } => {
                if !self.graph.delete_block(&block_id) {
                    log::debug!("delete of unknown block '{block_id}' ignored");
                }
                Ok(())
            }
            EditorAction::AddConnection { from, to, label } => {
                match self.graph.add_connection(&from, &to, &label) {
                    Ok(()) => Ok(()),
                    Err(rejection) => {
                        log::warn!("connection rejected: {rejection}");
                        Err(rejection)
                    }
                }
            }
            EditorAction::DeleteConnection(connection) => {
                if !self.graph.delete_connection(&connection) {
                    log::debug!(
                        "delete of unknown connection '{}' -> '{}' ignored",
                        connection.from,
                        connection.to
                    );
                }
                Ok(())
            }
            EditorAction::ClearAll => {
                self.graph.clear();
                Ok(())
            }
        }
    }

    /// Renders the current graph as Mermaid markup; a full re-render on
    /// every call.
    pub fn diagram(&self) -> String {
        mermaid::render(&self.graph)
    }

    /// Read access to the session graph (e.g. to populate selection lists).
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }
}
