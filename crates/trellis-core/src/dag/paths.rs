//! Enumeration of all simple directed paths between two vertices.
//!
//! Breadth-first expansion over partial paths: the queue starts with the
//! singleton path `[a]`, and every dequeued path is extended along each
//! outgoing edge of its last vertex. A path ending at the goal is emitted
//! and still expanded — the termination condition is "last vertex is the
//! goal", not "stop at the goal" — but acyclicity means no extension can
//! reach the goal a second time, so each emitted path is maximal exactly
//! once. Acyclicity also bounds every candidate path, which guarantees
//! termination.

use std::collections::VecDeque;

use super::store::{Dag, VertexId};

impl<T> Dag<T> {
    /// All simple directed paths from `a` to `b`, each an ordered vertex
    /// sequence including both endpoints.
    ///
    /// Results follow discovery (BFS) order: shorter paths generally come
    /// first, though not strictly length-sorted under uneven branching.
    /// `all_paths(a, a)` is the singleton `[[a]]` for a known `a`. When no
    /// path exists — or `a` is unknown — the result is empty; absence of an
    /// answer is not an error.
    ///
    /// Running time is proportional to the number of partial paths
    /// explored, which is exponential in graphs with heavy fan-out; bound
    /// the graph, not the call.
    #[must_use]
    pub fn all_paths(&self, a: VertexId, b: VertexId) -> Vec<Vec<VertexId>> {
        if self.weight(a).is_none() {
            return Vec::new();
        }

        let mut complete = Vec::new();
        let mut queue: VecDeque<Vec<VertexId>> = VecDeque::new();
        queue.push_back(vec![a]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else { continue };

            if last == b {
                complete.push(path.clone());
            }

            for edge in self.out_edges(last) {
                let mut longer = path.clone();
                longer.push(edge.to);
                queue.push_back(longer);
            }
        }

        complete
    }
}

#[cfg(test)]
mod tests {
    use crate::dag::Dag;

    #[test]
    fn no_route_yields_empty() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(1i64);
        let b = dag.add_vertex(2);
        assert!(dag.all_paths(a, b).is_empty());
        // Direction matters.
        dag.add_edge(a, b, 0).expect("a→b");
        assert!(dag.all_paths(b, a).is_empty());
    }

    #[test]
    fn path_to_self_is_the_singleton() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(1i64);
        let b = dag.add_vertex(2);
        dag.add_edge(a, b, 0).expect("a→b");
        assert_eq!(dag.all_paths(a, a), vec![vec![a]]);
    }

    #[test]
    fn diamond_yields_both_routes() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(0i64);
        let b = dag.add_vertex(0);
        let c = dag.add_vertex(0);
        let d = dag.add_vertex(0);
        dag.add_edge(a, b, 0).expect("a→b");
        dag.add_edge(a, c, 0).expect("a→c");
        dag.add_edge(b, d, 0).expect("b→d");
        dag.add_edge(c, d, 0).expect("c→d");

        let paths = dag.all_paths(a, d);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec![a, b, d]));
        assert!(paths.contains(&vec![a, c, d]));
    }

    #[test]
    fn shorter_paths_are_discovered_first() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(0i64);
        let b = dag.add_vertex(0);
        let c = dag.add_vertex(0);
        dag.add_edge(a, b, 0).expect("a→b");
        dag.add_edge(b, c, 0).expect("b→c");
        dag.add_edge(a, c, 0).expect("a→c");

        let paths = dag.all_paths(a, c);
        assert_eq!(paths, vec![vec![a, c], vec![a, b, c]]);
    }

    #[test]
    fn four_routes_through_layered_fan() {
        // a → {b,c}, {b,c} → {d,e}, {d,e} → f: 4 paths a→f.
        let mut dag = Dag::new();
        let a = dag.add_vertex(0i64);
        let b = dag.add_vertex(0);
        let c = dag.add_vertex(0);
        let d = dag.add_vertex(0);
        let e = dag.add_vertex(0);
        let f = dag.add_vertex(0);
        for mid in [b, c] {
            dag.add_edge(a, mid, 0).expect("first layer");
            for out in [d, e] {
                dag.add_edge(mid, out, 0).expect("second layer");
            }
        }
        dag.add_edge(d, f, 0).expect("d→f");
        dag.add_edge(e, f, 0).expect("e→f");

        let paths = dag.all_paths(a, f);
        assert_eq!(paths.len(), 4);
        for path in &paths {
            assert_eq!(path.first(), Some(&a));
            assert_eq!(path.last(), Some(&f));
            assert_eq!(path.len(), 4);
        }
    }

    #[test]
    fn parallel_edges_multiply_paths() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(0i64);
        let b = dag.add_vertex(0);
        dag.add_edge(a, b, 1).expect("first");
        dag.add_edge(a, b, 2).expect("second");

        // Two edges, two discoveries of the same vertex sequence.
        assert_eq!(dag.all_paths(a, b), vec![vec![a, b], vec![a, b]]);
    }

    #[test]
    fn paths_continue_past_the_goal_without_revisiting_it() {
        // b has outgoing edges, but no extension of a→b can reach b again.
        let mut dag = Dag::new();
        let a = dag.add_vertex(0i64);
        let b = dag.add_vertex(0);
        let c = dag.add_vertex(0);
        dag.add_edge(a, b, 0).expect("a→b");
        dag.add_edge(b, c, 0).expect("b→c");

        assert_eq!(dag.all_paths(a, b), vec![vec![a, b]]);
    }
}
