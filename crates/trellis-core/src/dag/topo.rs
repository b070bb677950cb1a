//! Topological ordering via Kahn's algorithm.
//!
//! # Algorithm
//!
//! 1. Snapshot the in-degree of every vertex into a working array.
//! 2. Seed a FIFO frontier with the zero-in-degree vertices in creation
//!    order.
//! 3. Dequeue a vertex, append it to the output, and for each of its
//!    outgoing edges decrement the target's working in-degree; a target
//!    reaching zero joins the frontier.
//! 4. When the frontier drains, the output is a valid order iff every live
//!    edge was consumed.
//!
//! The pass never touches the graph itself: edge consumption is simulated
//! with a counter over the immutable adjacency lists, so the caller's
//! in-degree bookkeeping and edge lists survive the sort untouched.
//!
//! # Determinism
//!
//! FIFO frontier with ties broken by discovery order, which is itself fixed
//! by the creation order of vertices and the insertion order of edges — two
//! graphs built by the same call sequence sort identically.

use std::collections::VecDeque;

use tracing::trace;

use super::store::{Dag, VertexId};

impl<T> Dag<T> {
    /// Compute a topological ordering of all vertices, or `None` if a cycle
    /// is present.
    ///
    /// Every edge `(u, v)` has `u` strictly before `v` in the returned
    /// sequence. With the cycle guard enforcing acyclicity at insertion
    /// time, `None` is unreachable in normal use; it is reported rather
    /// than a partial order so a guard bypass cannot masquerade as a valid
    /// sort.
    ///
    /// O(V+E).
    #[must_use]
    pub fn topological_ordering(&self) -> Option<Vec<VertexId>> {
        let mut in_counts: Vec<usize> = self.vertices().map(|v| self.in_count(v)).collect();
        let mut frontier: VecDeque<VertexId> = self
            .vertices()
            .filter(|&v| self.in_count(v) == 0)
            .collect();

        let mut order = Vec::with_capacity(self.vertex_count());
        let mut consumed = 0_usize;

        while let Some(v) = frontier.pop_front() {
            order.push(v);

            for edge in self.out_edges(v) {
                consumed += 1;
                let count = &mut in_counts[edge.to.index()];
                *count = count.saturating_sub(1);
                if *count == 0 {
                    frontier.push_back(edge.to);
                }
            }
        }

        if consumed == self.edge_count() {
            Some(order)
        } else {
            trace!(
                consumed,
                live = self.edge_count(),
                "edges left unconsumed after Kahn pass"
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
