/// A directed, optionally labeled edge between two blocks.
///
/// Connections are compared structurally; "delete connection" removes the
/// first exact match, which is how the sidebar's per-row delete buttons
/// address them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Id of the source block.
    pub from: String,
    /// Id of the target block.
    pub to: String,
    /// Branch label; the empty string means an unlabeled edge. Non-empty
    /// labels distinguish the outgoing edges of a decision block
    /// (conventionally "Yes"/"No").
    pub label: String,
}

impl Connection {
    pub fn new(from: &str, to: &str, label: &str) -> Self {
        Connection {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        }
    }

    /// True when the connection references the block as either endpoint.
    /// Deleting a block cascade-deletes every incident connection.
    pub fn is_incident_to(&self, block_id: &str) -> bool {
        self.from == block_id || self.to == block_id
    }
}
