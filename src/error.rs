use thiserror::Error;

/// Rejections raised by graph store mutations.
///
/// These represent invalid user input, not internal failures: the store is
/// left untouched and the editor surfaces them as non-fatal warnings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("a connection from block '{block_id}' to itself is not allowed")]
    SelfLoop { block_id: String },

    #[error("the '{label}' branch of block '{from}' is already connected")]
    DuplicateBranchLabel { from: String, label: String },
}

/// Errors that can occur when converting a session snapshot into a `FlowGraph`.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("block '{block_id}' has an unknown kind '{kind}'")]
    UnknownBlockKind { block_id: String, kind: String },

    #[error("block id '{0}' appears more than once in the session")]
    DuplicateBlockId(String),

    #[error("block id '{0}' is not Mermaid-safe (expected [A-Za-z][A-Za-z0-9]*)")]
    UnsafeBlockId(String),

    #[error("connection from '{from}' to '{to}' references a block that does not exist")]
    DanglingConnection { from: String, to: String },

    #[error("failed to parse session JSON: {0}")]
    Json(#[from] serde_json::Error),
}
