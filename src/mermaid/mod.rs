//! Serialization of a flowchart graph into Mermaid `graph TD` markup.
//!
//! The renderer is a pure function over a graph snapshot: the same blocks
//! and connections, in the same order, always produce a byte-identical
//! string. There is no hidden state and no caching; the editor re-renders
//! from scratch after every action.

pub mod style;

pub use style::{BlockStyle, style_for};

use crate::graph::{Block, BlockKind, Connection, FlowGraph};
use std::fmt::Write;

const HEADER: &str = "graph TD";
const INDENT: &str = "    ";

/// Renders the graph as a top-to-bottom Mermaid flowchart.
///
/// Output layout, in order: the `graph TD` header, one node declaration per
/// block, one edge line per connection, and one `classDef` line per entry in
/// the style table.
pub fn render(graph: &FlowGraph) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for block in graph.blocks() {
        write_node_line(&mut output, block);
    }
    for connection in graph.connections() {
        write_edge_line(&mut output, connection);
    }
    for kind in BlockKind::ALL {
        let style = style_for(kind);
        // Writing into a String cannot fail.
        writeln!(
            &mut output,
            "{INDENT}classDef {} fill:{},stroke:#333,stroke-width:2px",
            style.class, style.fill
        )
        .unwrap();
    }

    output
}

/// Emits one node declaration, e.g. `Start("game start"):::startEndStyle`.
fn write_node_line(output: &mut String, block: &Block) {
    let style = style_for(block.kind);
    writeln!(
        output,
        "{INDENT}{}{}\"{}\"{}:::{}",
        block.id,
        style.shape_open,
        escape_content(&block.content),
        style.shape_close,
        style.class
    )
    .unwrap();
}

/// Emits one edge line, with the label quoted when present.
fn write_edge_line(output: &mut String, connection: &Connection) {
    if connection.label.is_empty() {
        writeln!(output, "{INDENT}{} --> {}", connection.from, connection.to)
    } else {
        writeln!(
            output,
            "{INDENT}{} -- \"{}\" --> {}",
            connection.from, connection.label, connection.to
        )
    }
    .unwrap();
}

/// Escapes block content for embedding between the shape's quote marks.
///
/// Only literal double quotes are rewritten to their entity form. Known gap:
/// backslashes, newlines, and Mermaid control characters pass through
/// unescaped.
fn escape_content(content: &str) -> String {
    content.replace('"', "&quot;")
}
