#![forbid(unsafe_code)]
//! trellis-core: a generic, in-memory weighted-DAG engine.
//!
//! The engine lets a caller build a directed graph incrementally while
//! guaranteeing it never becomes cyclic, and answers three kinds of queries
//! over the result: a topological ordering of the vertices, the set of all
//! simple directed paths between two vertices, and the extremal (longest or
//! shortest) path weight under a pluggable weight algebra.
//!
//! The two halves of the crate:
//!
//! - [`dag`] — the graph store, cycle guard, topological sorter, path
//!   enumerator, and weight aggregator. Entry point: [`Dag`].
//! - [`weight`] — the [`Weight`] capability every payload type must supply
//!   to participate in path-weight aggregation, plus ready-made algebras
//!   for integers and concatenated strings.
//!
//! # Conventions
//!
//! - **Errors**: the only signaled failure is [`CyclicGraphError`], returned
//!   when an edge insertion would close a cycle. Every other boundary
//!   condition (no path, unknown vertex in a query, empty path set) returns
//!   an empty or `None` result rather than an error.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`) on mutation and
//!   query entry points.

pub mod dag;
pub mod weight;

pub use dag::{CyclicGraphError, Dag, Edge, VertexId};
pub use weight::{StrWeight, Weight};
