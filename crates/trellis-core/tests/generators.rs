//! Proptest generators for DAG construction plans.
//!
//! A plan is a vertex payload list plus a sequence of candidate edges.
//! `forward` plans only propose edges from earlier-created to later-created
//! vertices, so every insertion succeeds and the built graph is a known-good
//! DAG. `unrestricted` plans propose arbitrary ordered pairs (self-loops
//! included) and let the cycle guard sort them out.

use proptest::prelude::*;
use trellis_core::{Dag, VertexId};

/// A reproducible graph construction plan.
#[derive(Debug, Clone)]
pub struct GraphPlan {
    /// Vertex payloads, created in order.
    pub weights: Vec<i64>,
    /// Candidate edges as (from-index, to-index, weight).
    pub edges: Vec<(usize, usize, i64)>,
}

impl GraphPlan {
    /// Build the graph, asserting every insertion succeeds. Only valid for
    /// forward plans.
    pub fn build(&self) -> (Dag<i64>, Vec<VertexId>) {
        let mut dag = Dag::new();
        let ids: Vec<VertexId> = self.weights.iter().map(|&w| dag.add_vertex(w)).collect();
        for &(from, to, w) in &self.edges {
            dag.add_edge(ids[from], ids[to], w).expect("forward edge");
        }
        (dag, ids)
    }

    /// Build the graph, silently dropping rejected edges. Valid for any
    /// plan; the result is acyclic by construction.
    pub fn build_guarded(&self) -> (Dag<i64>, Vec<VertexId>) {
        let mut dag = Dag::new();
        let ids: Vec<VertexId> = self.weights.iter().map(|&w| dag.add_vertex(w)).collect();
        for &(from, to, w) in &self.edges {
            let _ = dag.add_edge(ids[from], ids[to], w);
        }
        (dag, ids)
    }
}

/// Plans whose edges all point from an earlier vertex to a later one —
/// acyclic by construction, so `build` cannot fail.
pub fn arb_forward_plan(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = GraphPlan> {
    (2..=max_vertices)
        .prop_flat_map(move |n| {
            let weights = prop::collection::vec(-100i64..100, n);
            let edges = prop::collection::vec(
                (0..n - 1).prop_flat_map(move |from| {
                    ((from + 1)..n).prop_map(move |to| (from, to))
                }),
                0..=max_edges,
            );
            let edge_weights = prop::collection::vec(-100i64..100, max_edges);
            (weights, edges, edge_weights)
        })
        .prop_map(|(weights, edges, edge_weights)| GraphPlan {
            weights,
            edges: edges
                .into_iter()
                .zip(edge_weights)
                .map(|((from, to), w)| (from, to, w))
                .collect(),
        })
}

/// Plans with arbitrary ordered pairs, self-loops included. Insertions may
/// be rejected by the cycle guard.
pub fn arb_unrestricted_plan(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = GraphPlan> {
    (2..=max_vertices)
        .prop_flat_map(move |n| {
            let weights = prop::collection::vec(-100i64..100, n);
            let edges = prop::collection::vec((0..n, 0..n, -100i64..100), 0..=max_edges);
            (weights, edges)
        })
        .prop_map(|(weights, edges)| GraphPlan { weights, edges })
}
