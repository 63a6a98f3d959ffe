// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use sysboard::model::{DrawingSettings, EdgeType, Graph, Position, Theme};
use sysboard::ops::{
    apply_edge_changes, apply_node_changes, connect, ApplyResult, Connection, EdgeChange,
    EdgeDefaults, NodeChange,
};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `ops.node_changes`, `ops.edge_changes`, `ops.connect`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `drag_small`, `remove_large`).
fn checksum_apply_result(result: &ApplyResult) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(result.applied as u64);
    acc = acc.wrapping_mul(131).wrapping_add(result.skipped as u64);
    acc = acc.wrapping_mul(131).wrapping_add(result.delta.added.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(result.delta.updated.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(result.delta.removed.len() as u64);
    acc
}

/// One drag gesture: a stream of position updates for a single node.
fn drag_changes(graph: &Graph, steps: usize) -> Vec<NodeChange> {
    let Some(node) = graph.nodes().next() else {
        return Vec::new();
    };
    (0..steps)
        .map(|step| NodeChange::Position {
            id: node.id().clone(),
            position: Some(Position::new(step as f64 * 2.0, step as f64)),
            dragging: Some(step + 1 < steps),
        })
        .collect()
}

fn select_all_changes(graph: &Graph) -> Vec<NodeChange> {
    graph
        .nodes()
        .map(|node| NodeChange::Select { id: node.id().clone(), selected: true })
        .collect()
}

fn remove_edge_changes(graph: &Graph, every: usize) -> Vec<EdgeChange> {
    graph
        .edges()
        .step_by(every.max(1))
        .map(|edge| EdgeChange::Remove { id: edge.id().clone() })
        .collect()
}

fn benches_ops(c: &mut Criterion) {
    let cases = [
        ("small", fixtures::Case::Small),
        ("medium", fixtures::Case::Medium),
        ("large", fixtures::Case::Large),
    ];

    let mut group = c.benchmark_group("ops.node_changes");
    for (name, case) in cases {
        let graph = fixtures::graph(case);

        let drag = drag_changes(&graph, 60);
        group.throughput(Throughput::Elements(drag.len() as u64));
        group.bench_function(format!("drag_{name}"), |b| {
            b.iter(|| {
                let result = apply_node_changes(black_box(&graph), black_box(&drag));
                black_box(checksum_apply_result(&result))
            })
        });

        let select = select_all_changes(&graph);
        group.throughput(Throughput::Elements(select.len() as u64));
        group.bench_function(format!("select_all_{name}"), |b| {
            b.iter(|| {
                let result = apply_node_changes(black_box(&graph), black_box(&select));
                black_box(checksum_apply_result(&result))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ops.edge_changes");
    for (name, case) in cases {
        let graph = fixtures::graph(case);
        let remove = remove_edge_changes(&graph, 3);
        group.throughput(Throughput::Elements(remove.len() as u64));
        group.bench_function(format!("remove_{name}"), |b| {
            b.iter(|| {
                let result = apply_edge_changes(black_box(&graph), black_box(&remove));
                black_box(checksum_apply_result(&result))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ops.connect");
    let drawing = DrawingSettings::for_theme(Theme::Light);
    let defaults = EdgeDefaults { edge_type: EdgeType::SmoothStep, drawing: &drawing };
    for (name, case) in cases {
        let graph = fixtures::graph(case);
        let connection = Connection::new(fixtures::node_id(0), fixtures::node_id(1));
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("single_{name}"), |b| {
            b.iter(|| {
                let (graph, edge_id) =
                    connect(black_box(&graph), black_box(&connection), &defaults).expect("connect");
                black_box((graph.edge_count(), edge_id))
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
