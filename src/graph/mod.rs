//! The authoritative in-memory model of one flowchart editing session.

pub mod block;
pub mod connection;

pub use block::*;
pub use connection::*;

use crate::error::GraphError;
use crate::id;

/// Owns the block and connection collections of one editing session and
/// keeps them mutually consistent.
///
/// Both collections preserve insertion order; the Mermaid renderer walks
/// them in that order, so two graphs built by the same action sequence
/// render byte-identically. A `FlowGraph` is a plain owned value with no
/// interior mutability: one instance exists per session, exactly one logical
/// actor mutates it, and it is dropped when the session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowGraph {
    blocks: Vec<Block>,
    connections: Vec<Connection>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a graph from already-validated parts.
    ///
    /// Callers must have ensured id uniqueness and Mermaid-safety; the
    /// session import layer in [`crate::ui`] is the only producer.
    pub(crate) fn from_parts(blocks: Vec<Block>, connections: Vec<Connection>) -> Self {
        FlowGraph {
            blocks,
            connections,
        }
    }

    /// Appends a new block of the given kind and returns a copy of it.
    ///
    /// The id is derived from the kind's wire name plus a random suffix and
    /// re-rolled on the unlikely collision, so ids stay pairwise distinct
    /// for the life of the graph. The block starts with placeholder content
    /// and the default layout rectangle.
    pub fn add_block(&mut self, kind: BlockKind, name: &str) -> Block {
        let mut new_id = id::safe_id(kind.as_str());
        while self.find_block(&new_id).is_some() {
            new_id = id::safe_id(kind.as_str());
        }

        let block = Block {
            id: new_id,
            name: name.to_string(),
            kind,
            content: format!("{name} content placeholder"),
            layout: Layout::default(),
        };
        self.blocks.push(block.clone());
        block
    }

    /// Overwrites the content of the matching block.
    ///
    /// Returns `false` without mutating anything when the id is stale; the
    /// canvas can deliver edits for blocks deleted in the same round trip,
    /// and those must not abort the session.
    pub fn update_content(&mut self, block_id: &str, content: &str) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == block_id) {
            Some(block) => {
                block.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Overwrites the layout rectangle of the matching block (drag/resize).
    /// Same stale-id policy as [`FlowGraph::update_content`].
    pub fn update_layout(&mut self, block_id: &str, layout: Layout) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == block_id) {
            Some(block) => {
                block.layout = layout;
                true
            }
            None => false,
        }
    }

    /// Removes a block together with every connection incident to it.
    ///
    /// The cascade is the one integrity rule between the two collections: no
    /// connection may outlive either of its endpoints. Returns `false` when
    /// the id is stale (and then removes nothing).
    pub fn delete_block(&mut self, block_id: &str) -> bool {
        let blocks_before = self.blocks.len();
        self.blocks.retain(|b| b.id != block_id);
        if self.blocks.len() == blocks_before {
            return false;
        }
        self.connections.retain(|c| !c.is_incident_to(block_id));
        true
    }

    /// Appends a directed connection between two blocks.
    ///
    /// Rejected without mutation when the edge would loop a block onto
    /// itself, or when the source already has an outgoing edge with the same
    /// non-empty label (a decision branch can be wired only once). Duplicate
    /// unlabeled edges and cycles are permitted; cycles are how loops are
    /// modeled.
    ///
    /// Endpoint existence is not checked here: interactive callers pick both
    /// ends from the live block list, so a dangling endpoint cannot occur.
    /// Snapshots arriving from outside go through [`crate::ui::IntoGraph`],
    /// which does verify endpoints.
    pub fn add_connection(&mut self, from: &str, to: &str, label: &str) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop {
                block_id: from.to_string(),
            });
        }
        if !label.is_empty()
            && self
                .connections
                .iter()
                .any(|c| c.from == from && c.label == label)
        {
            return Err(GraphError::DuplicateBranchLabel {
                from: from.to_string(),
                label: label.to_string(),
            });
        }

        self.connections.push(Connection::new(from, to, label));
        Ok(())
    }

    /// Removes the first connection structurally equal to the given one.
    /// Returns `false` when no match exists.
    pub fn delete_connection(&mut self, connection: &Connection) -> bool {
        match self.connections.iter().position(|c| c == connection) {
            Some(index) => {
                self.connections.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every block and connection ("clear all").
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.connections.clear();
    }

    /// The blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn find_block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.connections.is_empty()
    }
}
