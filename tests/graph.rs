//! Store-invariant tests: id uniqueness, cascade deletion, and connection
//! rejection rules.
mod common;
use common::*;
use nagare::prelude::*;
use std::collections::HashSet;

#[test]
fn test_generated_ids_are_pairwise_distinct() {
    let mut graph = FlowGraph::new();
    let mut ids = HashSet::new();
    for _ in 0..100 {
        let block = graph.add_block(BlockKind::Process, "Process");
        assert!(ids.insert(block.id.clone()), "duplicate id: {}", block.id);
    }
    assert_eq!(graph.blocks().len(), 100);
}

#[test]
fn test_add_block_defaults() {
    let mut graph = FlowGraph::new();
    let block = graph.add_block(BlockKind::Decision, "Condition");

    assert_eq!(block.kind, BlockKind::Decision);
    assert_eq!(block.name, "Condition");
    assert_eq!(block.content, "Condition content placeholder");
    assert_eq!(block.layout, Layout { x: 0, y: 0, w: 4, h: 2 });
    // The returned block is the one that was stored.
    assert_eq!(graph.find_block(&block.id), Some(&block));
}

#[test]
fn test_update_content() {
    let mut graph = two_block_graph();
    assert!(graph.update_content("A", "new text"));
    assert_eq!(graph.find_block("A").unwrap().content, "new text");

    // Stale id: signalled, nothing mutated.
    assert!(!graph.update_content("Missing", "x"));
    assert_eq!(graph.blocks().len(), 2);
}

#[test]
fn test_update_layout() {
    let mut graph = two_block_graph();
    let moved = Layout { x: 3, y: 7, w: 6, h: 1 };
    assert!(graph.update_layout("B", moved));
    assert_eq!(graph.find_block("B").unwrap().layout, moved);
    assert!(!graph.update_layout("Missing", moved));
}

#[test]
fn test_delete_block_cascades_to_incident_connections() {
    let session = UiSession {
        blocks: vec![
            ui_block("A", "start_end", "start"),
            ui_block("B", "process", "step"),
            ui_block("C", "start_end", "end"),
        ],
        connections: vec![
            ui_conn("A", "B", ""),
            ui_conn("B", "C", ""),
            ui_conn("A", "C", ""),
        ],
    };
    let mut graph = session.into_graph().unwrap();

    assert!(graph.delete_block("B"));

    assert!(graph.find_block("B").is_none());
    assert!(
        graph
            .connections()
            .iter()
            .all(|c| !c.is_incident_to("B"))
    );
    // The unrelated edge survives.
    assert_eq!(graph.connections(), &[Connection::new("A", "C", "")]);
}

#[test]
fn test_delete_block_with_stale_id_is_a_no_op() {
    let mut graph = two_block_graph();
    assert!(!graph.delete_block("Missing"));
    assert_eq!(graph.blocks().len(), 2);
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_self_loop_is_rejected() {
    let mut graph = two_block_graph();
    let result = graph.add_connection("A", "A", "");
    assert_eq!(
        result,
        Err(GraphError::SelfLoop { block_id: "A".to_string() })
    );
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_duplicate_branch_label_is_rejected() {
    let mut graph = decision_graph();

    // Same source and label again, even toward a different target.
    let result = graph.add_connection("D", "Retry", "Yes");
    assert_eq!(
        result,
        Err(GraphError::DuplicateBranchLabel {
            from: "D".to_string(),
            label: "Yes".to_string(),
        })
    );
    assert_eq!(graph.connections().len(), 2);

    // The second rejection is just as much of a no-op as the first.
    assert!(graph.add_connection("D", "Win", "Yes").is_err());
    assert_eq!(graph.connections().len(), 2);
}

#[test]
fn test_duplicate_unlabeled_edges_and_cycles_are_permitted() {
    let mut graph = two_block_graph();
    // A second identical unlabeled edge.
    graph.add_connection("A", "B", "").unwrap();
    // A cycle back; loops are modeled this way.
    graph.add_connection("B", "A", "").unwrap();
    assert_eq!(graph.connections().len(), 3);
}

#[test]
fn test_same_label_from_different_sources_is_permitted() {
    let mut graph = decision_graph();
    graph.add_connection("Win", "Retry", "Yes").unwrap();
    assert_eq!(graph.connections().len(), 3);
}

#[test]
fn test_delete_connection_removes_first_structural_match() {
    let mut graph = two_block_graph();
    graph.add_connection("A", "B", "").unwrap();
    assert_eq!(graph.connections().len(), 2);

    let target = Connection::new("A", "B", "");
    assert!(graph.delete_connection(&target));
    assert_eq!(graph.connections().len(), 1);

    assert!(graph.delete_connection(&target));
    assert!(graph.connections().is_empty());

    assert!(!graph.delete_connection(&target));
}

#[test]
fn test_clear() {
    let mut graph = two_block_graph();
    graph.clear();
    assert!(graph.is_empty());
    assert!(graph.blocks().is_empty());
    assert!(graph.connections().is_empty());
}
