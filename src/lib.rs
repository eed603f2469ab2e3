//! # Nagare - Flowchart Graph and Mermaid Rendering Engine
//!
//! **Nagare** is the core of a block-based flowchart editor: it owns the
//! in-memory graph of typed blocks and labeled directed connections,
//! generates collision-resistant Mermaid-safe block identifiers, and
//! deterministically serializes the graph into Mermaid `graph TD` markup for
//! a downstream rendering viewer.
//!
//! ## Core Workflow
//!
//! The engine is UI-toolkit agnostic. A canvas front end translates user
//! interactions into explicit values; everything else happens here:
//!
//! 1.  **Mutate**: apply [`editor::EditorAction`] values (or call
//!     [`graph::FlowGraph`] directly) to add, edit, move, connect, and
//!     delete blocks. The store keeps the two collections consistent:
//!     deleting a block cascade-deletes its incident connections.
//! 2.  **Render**: [`mermaid::render`] re-derives the full markup string
//!     from the current snapshot on every read. Same graph, same bytes.
//! 3.  **Import/export**: [`ui::UiSession`] is the serde mirror of the
//!     canvas's JSON state; [`ui::IntoGraph`] validates it into a graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::graph::{BlockKind, FlowGraph};
//! use nagare::mermaid;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = FlowGraph::new();
//!
//!     // Add two blocks; ids are generated, unique, and Mermaid-safe.
//!     let start = graph.add_block(BlockKind::StartEnd, "Start");
//!     let step = graph.add_block(BlockKind::Process, "Step");
//!     graph.update_content(&step.id, "add one to the counter");
//!
//!     // Connect them with an unlabeled edge.
//!     graph.add_connection(&start.id, &step.id, "")?;
//!
//!     // Render the whole graph as Mermaid markup.
//!     let markup = mermaid::render(&graph);
//!     assert!(markup.starts_with("graph TD\n"));
//!     assert!(markup.contains(" --> "));
//!
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod id;
pub mod mermaid;
pub mod prelude;
pub mod ui;
