// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use crate::model::fixtures::{chain_abc, edge, eid, nid, node};
use crate::model::{DrawingSettings, EdgeType, MarkerKind, NodeType, Position, Theme};

use super::{
    apply_edge_changes, apply_node_changes, connect, ChangedItem, ConnectError, Connection,
    Dimensions, EdgeChange, EdgeDefaults, Endpoint, NodeChange,
};

fn defaults(settings: &DrawingSettings) -> EdgeDefaults<'_> {
    EdgeDefaults { edge_type: EdgeType::SmoothStep, drawing: settings }
}

#[test]
fn position_change_moves_only_the_named_node() {
    let graph = chain_abc();
    let changes = [NodeChange::Position {
        id: nid("A"),
        position: Some(Position::new(10.0, 20.0)),
        dragging: Some(true),
    }];

    let result = apply_node_changes(&graph, &changes);

    let moved = result.graph.node(&nid("A")).expect("A");
    assert_eq!(moved.position(), Position::new(10.0, 20.0));
    assert!(moved.dragging());
    assert_eq!(result.graph.node(&nid("B")), graph.node(&nid("B")));
    assert_eq!(result.graph.node(&nid("C")), graph.node(&nid("C")));
    assert_eq!(result.delta.updated, vec![ChangedItem::Node(nid("A"))]);
    assert_eq!(result.applied, 1);
}

#[test]
fn input_graph_is_left_untouched() {
    let graph = chain_abc();
    let before = graph.clone();

    let _ = apply_node_changes(&graph, &[NodeChange::Remove { id: nid("B") }]);
    let _ = apply_edge_changes(&graph, &[EdgeChange::Remove { id: eid("ab") }]);

    assert_eq!(graph, before);
}

#[test]
fn unknown_ids_are_skipped_without_error() {
    let graph = chain_abc();
    let changes = [
        NodeChange::Select { id: nid("ghost"), selected: true },
        NodeChange::Remove { id: nid("ghost") },
        NodeChange::Dimensions {
            id: nid("ghost"),
            dimensions: Dimensions { width: 1.0, height: 1.0 },
        },
    ];

    let result = apply_node_changes(&graph, &changes);

    assert_eq!(result.graph, graph);
    assert_eq!(result.skipped, 3);
    assert!(!result.changed());
}

fn move_to(id: &str, x: f64, y: f64) -> NodeChange {
    NodeChange::Position { id: nid(id), position: Some(Position::new(x, y)), dragging: None }
}

#[test]
fn later_changes_win_over_earlier_ones() {
    let graph = chain_abc();
    let changes = [
        move_to("B", 1.0, 1.0),
        move_to("B", 2.0, 3.0),
        NodeChange::Select { id: nid("B"), selected: true },
        NodeChange::Select { id: nid("B"), selected: false },
    ];

    let result = apply_node_changes(&graph, &changes);

    let b = result.graph.node(&nid("B")).expect("B");
    assert_eq!(b.position(), Position::new(2.0, 3.0));
    assert!(!b.selected());
    assert_eq!(result.delta.updated.len(), 1);
}

#[test]
fn node_remove_through_changes_does_not_cascade() {
    let graph = chain_abc();

    let result = apply_node_changes(&graph, &[NodeChange::Remove { id: nid("B") }]);

    assert!(!result.graph.contains_node(&nid("B")));
    assert_eq!(result.graph.edge_count(), 2);
    assert_eq!(result.delta.removed, vec![ChangedItem::Node(nid("B"))]);
}

#[test]
fn add_then_remove_in_one_batch_reports_nothing() {
    let graph = chain_abc();
    let changes = [
        NodeChange::Add { item: node("D", NodeType::Redis) },
        NodeChange::Remove { id: nid("D") },
    ];

    let result = apply_node_changes(&graph, &changes);

    assert_eq!(result.graph.node_count(), 3);
    assert!(result.delta.is_empty());
    assert_eq!(result.applied, 2);
}

#[test]
fn reset_replaces_existing_node_in_place() {
    let graph = chain_abc();
    let mut replacement = node("B", NodeType::Microservice);
    replacement.data_mut().set_label("Orders");

    let result = apply_node_changes(&graph, &[NodeChange::Reset { item: replacement }]);

    let ids = result.graph.node_ids().map(|id| id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert_eq!(result.graph.node(&nid("B")).expect("B").data().label(), "Orders");
    assert_eq!(result.delta.updated, vec![ChangedItem::Node(nid("B"))]);
}

#[test]
fn edge_select_and_remove() {
    let graph = chain_abc();
    let changes = [
        EdgeChange::Select { id: eid("ab"), selected: true },
        EdgeChange::Remove { id: eid("bc") },
        EdgeChange::Remove { id: eid("missing") },
    ];

    let result = apply_edge_changes(&graph, &changes);

    assert!(result.graph.edge(&eid("ab")).expect("ab").selected());
    assert!(!result.graph.contains_edge(&eid("bc")));
    assert_eq!(result.skipped, 1);
    assert_eq!(result.delta.removed, vec![ChangedItem::Edge(eid("bc"))]);
}

#[test]
fn dangling_edge_add_is_kept() {
    let graph = chain_abc();

    let result =
        apply_edge_changes(&graph, &[EdgeChange::Add { item: edge("ax", "A", "nowhere") }]);

    assert!(result.graph.contains_edge(&eid("ax")));
    assert_eq!(result.delta.added, vec![ChangedItem::Edge(eid("ax"))]);
}

#[test]
fn connect_styles_the_edge_from_current_settings() {
    let graph = chain_abc();
    let settings = DrawingSettings::for_theme(Theme::Light);

    let connection = Connection::new(nid("A"), nid("C"));
    let (next, edge_id) = connect(&graph, &connection, &defaults(&settings)).expect("connect");

    assert_eq!(next.edge_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(edge_id.as_str().starts_with("e-"));
    let created = next.edge(&edge_id).expect("new edge");
    assert_eq!(created.source(), &nid("A"));
    assert_eq!(created.target(), &nid("C"));
    assert_eq!(created.edge_type(), EdgeType::SmoothStep);
    assert!(created.animated());
    assert_eq!(created.stroke_color(), Some("#2563eb"));
    let marker = created.marker_end().expect("marker");
    assert_eq!(marker.kind, MarkerKind::ArrowClosed);
    assert_eq!(marker.color, "#2563eb");
    assert_eq!(created.style().expect("style").stroke_width, 2.0);
}

#[test]
fn connecting_twice_yields_two_distinct_edges() {
    let graph = chain_abc();
    let settings = DrawingSettings::default();
    let connection = Connection::new(nid("A"), nid("B"));

    let (once, first) = connect(&graph, &connection, &defaults(&settings)).expect("first");
    let (twice, second) = connect(&once, &connection, &defaults(&settings)).expect("second");

    assert_ne!(first, second);
    assert_eq!(twice.edge_count(), 4);
}

#[test]
fn self_loop_is_allowed() {
    let graph = chain_abc();
    let settings = DrawingSettings::default();

    let (next, edge_id) =
        connect(&graph, &Connection::new(nid("B"), nid("B")), &defaults(&settings)).expect("loop");

    let created = next.edge(&edge_id).expect("loop edge");
    assert_eq!(created.source(), created.target());
}

#[rstest]
#[case("ghost", "A", Endpoint::Source)]
#[case("A", "ghost", Endpoint::Target)]
fn connect_rejects_dangling_endpoints(
    #[case] source: &str,
    #[case] target: &str,
    #[case] side: Endpoint,
) {
    let graph = chain_abc();
    let settings = DrawingSettings::default();

    let err = connect(&graph, &Connection::new(nid(source), nid(target)), &defaults(&settings))
        .expect_err("dangling");

    assert_eq!(err, ConnectError::DanglingEndpoint { side, node_id: nid("ghost") });
}

#[test]
fn node_change_wire_format_is_tagged_by_type() {
    let parsed: Vec<NodeChange> = serde_json::from_str(
        r#"[
            {"type":"position","id":"A","position":{"x":5,"y":6},"dragging":false},
            {"type":"select","id":"A","selected":true},
            {"type":"dimensions","id":"A","dimensions":{"width":150,"height":40}},
            {"type":"remove","id":"C"}
        ]"#,
    )
    .expect("changes");

    let result = apply_node_changes(&chain_abc(), &parsed);

    let a = result.graph.node(&nid("A")).expect("A");
    assert_eq!(a.position(), Position::new(5.0, 6.0));
    assert!(a.selected());
    assert_eq!(a.dimensions(), Some((150.0, 40.0)));
    assert!(!result.graph.contains_node(&nid("C")));
}
