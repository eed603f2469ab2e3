//! Common test utilities for building sessions and graphs with fixed ids.
use nagare::prelude::*;

#[allow(dead_code)]
pub fn ui_block(id: &str, kind: &str, content: &str) -> UiBlock {
    UiBlock {
        id: id.to_string(),
        name: id.to_string(),
        kind: kind.to_string(),
        content: content.to_string(),
        layout: UiLayout { x: 0, y: 0, w: 4, h: 2 },
    }
}

#[allow(dead_code)]
pub fn ui_conn(from: &str, to: &str, label: &str) -> UiConnection {
    UiConnection {
        from: from.to_string(),
        to: to.to_string(),
        label: label.to_string(),
    }
}

/// A start/end block "A" and a process block "B" joined by one unlabeled
/// edge. Ids are fixed so renderer output can be asserted byte for byte.
#[allow(dead_code)]
pub fn two_block_graph() -> FlowGraph {
    let session = UiSession {
        blocks: vec![
            ui_block("A", "start_end", "game start"),
            ui_block("B", "process", "do things"),
        ],
        connections: vec![ui_conn("A", "B", "")],
    };
    session.into_graph().expect("two-block session is valid")
}

/// A decision block "D" with "Yes"/"No" branches to two io blocks.
#[allow(dead_code)]
pub fn decision_graph() -> FlowGraph {
    let session = UiSession {
        blocks: vec![
            ui_block("D", "decision", "is it done?"),
            ui_block("Win", "io", "print done"),
            ui_block("Retry", "io", "print retry"),
        ],
        connections: vec![ui_conn("D", "Win", "Yes"), ui_conn("D", "Retry", "No")],
    };
    session.into_graph().expect("decision session is valid")
}
