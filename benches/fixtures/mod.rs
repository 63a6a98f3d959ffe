// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use sysboard::model::{
    DesignSnapshot, Edge, EdgeId, Graph, Node, NodeId, NodeType, Position, SystemNodeData,
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("sysboard_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    fn node_count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 120,
            Self::Large => 1_200,
        }
    }

    /// Extra edges per node on top of the spanning chain.
    fn fan_out(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

pub fn node_id(idx: usize) -> NodeId {
    NodeId::new(format!("bench_node_{idx:05}")).expect("node id")
}

pub fn edge_id(label: &str, idx: usize) -> EdgeId {
    EdgeId::new(format!("bench_{label}_{idx:06}")).expect("edge id")
}

/// A grid of nodes cycling through the palette, chained in order plus deterministic cross links.
pub fn graph(case: Case) -> Graph {
    let count = case.node_count();
    let columns = (count as f64).sqrt().ceil() as usize;

    let nodes = (0..count).map(|idx| {
        let kind = NodeType::ALL[idx % NodeType::ALL.len()];
        let (column, row) = (idx % columns, idx / columns);
        let position = Position::new(column as f64 * 180.0, row as f64 * 120.0);
        Node::new(node_id(idx), position, SystemNodeData::from_palette(kind))
    });

    let mut edges = Vec::new();
    for idx in 1..count {
        edges.push(Edge::new(edge_id("chain", idx), node_id(idx - 1), node_id(idx)));
    }
    for idx in 0..count {
        for hop in 1..=case.fan_out() {
            let target = (idx.wrapping_mul(7).wrapping_add(hop * 13)) % count;
            if target == idx {
                continue;
            }
            let id = edge_id("cross", idx * 10 + hop);
            edges.push(Edge::new(id, node_id(idx), node_id(target)));
        }
    }

    Graph::from_parts(nodes, edges)
}

pub fn design(case: Case) -> DesignSnapshot {
    DesignSnapshot::from(&graph(case))
}
