//! Path-weight folding and extremal selection.
//!
//! # Overview
//!
//! A path's weight is the left-to-right fold of its vertex and edge weights
//! under the [`Weight`] algebra: the transformed weight of the first vertex,
//! then alternately the transformed weight of the edge to the next vertex
//! and of that vertex itself. The caller supplies one interpreter for
//! vertex weights and one for edge weights, so the same graph answers
//! different questions without rebuilding (identity for plain sums, a
//! constant for hop counting, and so on).
//!
//! Selection across paths is a running best: the first path's fold seeds
//! it, and a later fold replaces it only when comparing against the current
//! best yields the caller's direction. `Ordering::Greater` keeps the
//! largest fold (longest-path semantics), `Ordering::Less` the smallest.
//!
//! This is exhaustive enumeration plus folding, exponential in the number
//! of paths. That is deliberate: the algebra need not be numeric or
//! monotone (string concatenation is fair game), which rules out the
//! classical shortest/longest-path shortcuts. Callers with numeric,
//! monotone weights who need polynomial time should relax over
//! [`Dag::topological_ordering`](super::store::Dag::topological_ordering)
//! themselves.

use std::cmp::Ordering;

use super::store::{Dag, VertexId};
use crate::weight::Weight;

impl<T: Weight> Dag<T> {
    /// Weight of the longest path from `a` to `b`, or `None` when no path
    /// exists.
    ///
    /// Shorthand for [`Dag::weight_of_path_comp`] with
    /// `Ordering::Greater`.
    pub fn weight_of_longest_path<F, G>(
        &self,
        a: VertexId,
        b: VertexId,
        vertex_fn: F,
        edge_fn: G,
    ) -> Option<T>
    where
        F: Fn(&T) -> T,
        G: Fn(&T) -> T,
    {
        self.weight_of_path_comp(a, b, vertex_fn, edge_fn, Ordering::Greater)
    }

    /// Extremal path weight from `a` to `b` under the caller's comparison
    /// direction.
    ///
    /// Enumerates every path, folds each one with `vertex_fn` / `edge_fn`,
    /// and keeps the fold that wins the comparison: a candidate replaces
    /// the running best iff `candidate.compare(best) == direction`. Ties
    /// therefore keep the earliest-discovered fold. `Ordering::Equal` as a
    /// direction is degenerate and simply keeps the first path's fold.
    ///
    /// Returns `None` when `a` and `b` are unconnected — no answer, not an
    /// error.
    pub fn weight_of_path_comp<F, G>(
        &self,
        a: VertexId,
        b: VertexId,
        vertex_fn: F,
        edge_fn: G,
        direction: Ordering,
    ) -> Option<T>
    where
        F: Fn(&T) -> T,
        G: Fn(&T) -> T,
    {
        let mut best: Option<T> = None;

        for path in self.all_paths(a, b) {
            let Some(folded) = self.fold_path(&path, &vertex_fn, &edge_fn) else {
                continue;
            };

            best = match best {
                None => Some(folded),
                Some(current) => {
                    if folded.compare(&current) == direction {
                        Some(folded)
                    } else {
                        Some(current)
                    }
                }
            };
        }

        best
    }

    /// Fold one path: `vertex_fn(first)`, then per hop `add(edge_fn(edge))`
    /// and `add(vertex_fn(next))`. The edge consulted between consecutive
    /// vertices is the first matching adjacency entry, as
    /// [`Dag::find_edge`](super::store::Dag::find_edge) resolves it.
    ///
    /// `None` for an empty path or a hop with no backing edge; neither
    /// occurs for paths produced by the enumerator.
    fn fold_path<F, G>(&self, path: &[VertexId], vertex_fn: &F, edge_fn: &G) -> Option<T>
    where
        F: Fn(&T) -> T,
        G: Fn(&T) -> T,
    {
        let (&first, rest) = path.split_first()?;
        let mut acc = vertex_fn(self.weight(first)?);
        let mut prev = first;

        for &v in rest {
            let edge = self.find_edge(prev, v)?;
            acc = acc.add(&edge_fn(&edge.weight));
            acc = acc.add(&vertex_fn(self.weight(v)?));
            prev = v;
        }

        Some(acc)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
