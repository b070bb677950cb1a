//! Arena-backed graph store and cycle guard.
//!
//! # Overview
//!
//! Vertices live in a dense arena in creation order; a [`VertexId`] is a
//! small copyable index into it. Each vertex carries its payload weight, an
//! adjacency list of outgoing edges in insertion order, and a tracked
//! in-degree. Edge insertion runs a reachability check first and fails with
//! [`CyclicGraphError`] when the new edge would close a directed cycle, so
//! the structure is acyclic at all times.
//!
//! # Handles
//!
//! Handles are plain indices — identity is positional, not by payload value,
//! and two vertices with equal payloads are distinct. A handle minted by a
//! *different* graph is not detected; if it happens to be in range it
//! addresses whatever vertex sits at that index (memory-safe but
//! unspecified). Queries treat an out-of-range handle as an unknown vertex
//! and return an empty/zero result; mutations panic on out-of-range
//! handles.
//!
//! # Parallel edges
//!
//! Multiple edges between the same ordered pair are permitted and not
//! deduplicated. [`Dag::find_edge`] returns the first matching adjacency
//! entry; [`Dag::remove_edge`] removes one edge per call.

#![allow(clippy::must_use_candidate, clippy::missing_const_for_fn)]

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// VertexId / Edge / CyclicGraphError
// ---------------------------------------------------------------------------

/// Handle to a vertex in a [`Dag`].
///
/// Cheap to copy, compare, and hash. Valid only for the graph that created
/// it (see the module docs on handle identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// The arena index behind this handle. Stable for the lifetime of the
    /// graph — vertices are never removed.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A directed edge `from → to` carrying a payload weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    /// Source vertex.
    pub from: VertexId,
    /// Target vertex.
    pub to: VertexId,
    /// Payload weight of the edge.
    pub weight: T,
}

/// Returned by [`Dag::add_edge`] when the requested edge would close a
/// directed cycle. The graph is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("adding edge {from} → {to} would close a cycle")]
pub struct CyclicGraphError {
    /// Source of the rejected edge.
    pub from: VertexId,
    /// Target of the rejected edge.
    pub to: VertexId,
}

// ---------------------------------------------------------------------------
// Dag
// ---------------------------------------------------------------------------

/// An in-memory weighted DAG.
///
/// Generic over the payload weight type `T`. The store itself places no
/// bounds on `T`; path-weight aggregation additionally requires
/// `T: `[`Weight`](crate::weight::Weight).
///
/// # Invariants
///
/// - **Acyclicity**: no directed cycle exists among the edges present.
///   Enforced exclusively at edge-insertion time.
/// - **In-degree consistency**: for every vertex `v`, [`Dag::in_count`]
///   equals the number of live edges whose target is `v`.
#[derive(Debug, Clone)]
pub struct Dag<T> {
    /// Vertex payloads in creation order. This order seeds the topological
    /// sorter's zero-in-degree frontier.
    weights: Vec<T>,
    /// Outgoing edges per vertex, in insertion order.
    adjacency: Vec<Vec<Edge<T>>>,
    /// Tracked in-degree per vertex.
    in_counts: Vec<usize>,
    /// Number of live edges across all adjacency lists.
    edge_count: usize,
}

impl<T> Default for Dag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dag<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
            adjacency: Vec::new(),
            in_counts: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with pre-allocated vertex capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            in_counts: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Add a vertex carrying `weight` and return its handle.
    ///
    /// Vertices are appended in creation order and never removed. The new
    /// vertex starts with an in-degree of 0.
    pub fn add_vertex(&mut self, weight: T) -> VertexId {
        let id = VertexId(self.weights.len());
        self.weights.push(weight);
        self.adjacency.push(Vec::new());
        self.in_counts.push(0);
        trace!(%id, "vertex added");
        id
    }

    /// Add an edge `from → to` carrying `weight`.
    ///
    /// Fails with [`CyclicGraphError`] — leaving the graph unchanged — if
    /// `to` can already reach `from`, since the new edge would then close a
    /// cycle. A self-loop is always rejected (`to` reaches itself).
    ///
    /// The reachability check is O(V+E) per insertion; there is no
    /// amortized cycle bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`CyclicGraphError`] if the edge would close a cycle.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is out of range for this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: T) -> Result<(), CyclicGraphError> {
        assert!(
            from.0 < self.weights.len() && to.0 < self.weights.len(),
            "edge endpoints must be handles created by this graph"
        );

        if self.connected(to, from) {
            debug!(%from, %to, "edge rejected: would close a cycle");
            return Err(CyclicGraphError { from, to });
        }

        self.adjacency[from.0].push(Edge { from, to, weight });
        self.in_counts[to.0] += 1;
        self.edge_count += 1;
        trace!(%from, %to, "edge added");
        Ok(())
    }

    /// Remove the first edge `from → to`, if one exists.
    ///
    /// One call removes one edge: with parallel edges between the same
    /// ordered pair, the earliest-inserted one goes first. The target's
    /// in-degree is decremented (clamped at 0) only when an edge was
    /// actually removed, so removing an edge that was never added is a
    /// no-op on both the edge set and the counter.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range for this graph.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        let list = &mut self.adjacency[from.0];
        let Some(pos) = list.iter().position(|e| e.to == to) else {
            trace!(%from, %to, "remove_edge: no matching edge");
            return;
        };

        list.remove(pos);
        self.edge_count -= 1;
        let count = &mut self.in_counts[to.0];
        *count = count.saturating_sub(1);
        trace!(%from, %to, "edge removed");
    }

    /// Tracked in-degree of `v`, or 0 for an unknown vertex.
    pub fn in_count(&self, v: VertexId) -> usize {
        self.in_counts.get(v.0).copied().unwrap_or(0)
    }

    /// First adjacency-list entry `from → to`, or `None` if no such edge
    /// exists.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge<T>> {
        self.out_edges(from).iter().find(|e| e.to == to)
    }

    /// Returns `true` iff `b` is reachable from `a` following edge
    /// direction.
    ///
    /// Breadth-first search over the adjacency structure. The start vertex
    /// is visited first, so `connected(a, a)` is `true` for any known `a`.
    /// An unknown `a` reaches nothing.
    pub fn connected(&self, a: VertexId, b: VertexId) -> bool {
        if a.0 >= self.weights.len() {
            return false;
        }

        let mut visited = vec![false; self.weights.len()];
        let mut queue = VecDeque::new();
        visited[a.0] = true;
        queue.push_back(a);

        while let Some(v) = queue.pop_front() {
            if v == b {
                return true;
            }
            for edge in &self.adjacency[v.0] {
                if !visited[edge.to.0] {
                    visited[edge.to.0] = true;
                    queue.push_back(edge.to);
                }
            }
        }

        false
    }

    /// Payload weight of `v`, or `None` for an unknown vertex.
    pub fn weight(&self, v: VertexId) -> Option<&T> {
        self.weights.get(v.0)
    }

    /// Outgoing edges of `v` in insertion order; empty for an unknown
    /// vertex.
    pub fn out_edges(&self, v: VertexId) -> &[Edge<T>] {
        self.adjacency.get(v.0).map_or(&[], Vec::as_slice)
    }

    /// All vertex handles in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.weights.len()).map(VertexId)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
