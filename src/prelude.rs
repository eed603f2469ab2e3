//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the nagare
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = UiSession::demo().into_graph()?;
//! let markup = render(&graph);
//! assert!(markup.starts_with("graph TD"));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Graph model and store
pub use crate::graph::{Block, BlockKind, Connection, FlowGraph, Layout};

// Session editing
pub use crate::editor::{Editor, EditorAction};

// Rendering
pub use crate::mermaid::render;

// Session snapshots
pub use crate::ui::{IntoGraph, UiBlock, UiConnection, UiLayout, UiSession};

// Error types
pub use crate::error::{GraphError, ImportError};

// Identifier generation
pub use crate::id::safe_id;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
