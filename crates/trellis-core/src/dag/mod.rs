//! Weighted directed-acyclic-graph engine.
//!
//! The graph is built incrementally through [`Dag::add_vertex`] and
//! [`Dag::add_edge`]; the cycle guard rejects any edge whose insertion would
//! close a directed cycle, so the acyclicity invariant holds at all times.
//! Queries read the live structure without mutating it.
//!
//! # Sub-modules
//!
//! - [`store`]: Arena-backed graph store and cycle guard.
//!   ([`Dag`], [`VertexId`], [`Edge`], [`CyclicGraphError`])
//! - [`topo`]: Topological ordering via Kahn's algorithm.
//!   ([`Dag::topological_ordering`])
//! - [`paths`]: Enumeration of all simple directed paths between two
//!   vertices. ([`Dag::all_paths`])
//! - [`fold`]: Path-weight folding and extremal selection.
//!   ([`Dag::weight_of_longest_path`], [`Dag::weight_of_path_comp`])

pub mod fold;
pub mod paths;
pub mod store;
pub mod topo;

pub use store::{CyclicGraphError, Dag, Edge, VertexId};
