use serde::{Deserialize, Serialize};

use crate::graph::FlowGraph;

/// Grid rectangle as stored in session JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiLayout {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// One block as stored in session JSON.
///
/// `kind` stays a plain string here; the wire format is foreign input and is
/// only narrowed to [`crate::graph::BlockKind`] during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiBlock {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub layout: UiLayout,
}

/// One connection as stored in session JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConnection {
    pub from: String,
    pub to: String,
    /// Absent labels deserialize as the empty string (unlabeled edge).
    #[serde(default)]
    pub label: String,
}

/// A complete editing-session snapshot: the shape the canvas UI reads and
/// writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSession {
    #[serde(default)]
    pub blocks: Vec<UiBlock>,
    #[serde(default)]
    pub connections: Vec<UiConnection>,
}

impl UiSession {
    /// Parses a session snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, crate::error::ImportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Snapshots a live graph, e.g. to hand the current state back to the
    /// canvas.
    pub fn from_graph(graph: &FlowGraph) -> Self {
        UiSession {
            blocks: graph
                .blocks()
                .iter()
                .map(|b| UiBlock {
                    id: b.id.clone(),
                    name: b.name.clone(),
                    kind: b.kind.as_str().to_string(),
                    content: b.content.clone(),
                    layout: UiLayout {
                        x: b.layout.x,
                        y: b.layout.y,
                        w: b.layout.w,
                        h: b.layout.h,
                    },
                })
                .collect(),
            connections: graph
                .connections()
                .iter()
                .map(|c| UiConnection {
                    from: c.from.clone(),
                    to: c.to.clone(),
                    label: c.label.clone(),
                })
                .collect(),
        }
    }

    /// The built-in demo session: a number-guessing game flowchart with one
    /// decision branch and one loop back to the input step. Used by the CLI
    /// when no session file is given, and as seed data in tests.
    pub fn demo() -> Self {
        fn block(
            id: &str,
            name: &str,
            kind: &str,
            content: &str,
            layout: (u32, u32, u32, u32),
        ) -> UiBlock {
            UiBlock {
                id: id.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                content: content.to_string(),
                layout: UiLayout {
                    x: layout.0,
                    y: layout.1,
                    w: layout.2,
                    h: layout.3,
                },
            }
        }
        fn conn(from: &str, to: &str, label: &str) -> UiConnection {
            UiConnection {
                from: from.to_string(),
                to: to.to_string(),
                label: label.to_string(),
            }
        }

        UiSession {
            blocks: vec![
                block("Start", "Start", "start_end", "Game start", (4, 0, 2, 1)),
                block(
                    "Process1",
                    "Process",
                    "process",
                    "Pick the answer number (e.g. 7)",
                    (2, 1, 6, 2),
                ),
                block("Input1", "Input", "io", "Read a guessed number", (2, 3, 6, 2)),
                block(
                    "Decision1",
                    "Condition",
                    "decision",
                    "Is the guess equal to the answer?",
                    (2, 5, 6, 3),
                ),
                block("OutputWin", "Output", "io", "Print 'Correct!'", (0, 8, 4, 2)),
                block(
                    "OutputRetry",
                    "Output",
                    "io",
                    "Print 'Try again!'",
                    (6, 8, 4, 2),
                ),
                block("End", "End", "start_end", "Game over", (4, 10, 2, 1)),
            ],
            connections: vec![
                conn("Start", "Process1", ""),
                conn("Process1", "Input1", ""),
                conn("Input1", "Decision1", ""),
                conn("Decision1", "OutputWin", "Yes"),
                conn("Decision1", "OutputRetry", "No"),
                conn("OutputWin", "End", ""),
                // Loop back on a wrong guess.
                conn("OutputRetry", "Input1", ""),
            ],
        }
    }
}
