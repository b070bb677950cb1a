//! `trl ints` — integer weights over a branching eight-vertex graph.

use std::cmp::Ordering;
use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use trellis_core::Dag;

use crate::output::{OutputMode, render};

/// Arguments for `trl ints`.
#[derive(Args, Debug, Default)]
pub struct IntsArgs {}

#[derive(Debug, Serialize)]
struct IntsOutput {
    /// Vertex payloads in topological order.
    topological_order: Vec<i64>,
    path_count: usize,
    longest_path_weight: i64,
    shortest_path_weight: i64,
}

/// Execute `trl ints`.
pub fn run(_args: &IntsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let payload = build()?;
    render(mode, &payload, render_human)
}

fn build() -> anyhow::Result<IntsOutput> {
    let mut dag = Dag::new();
    let ids: Vec<_> = [1i64, 2, 2, 6, 5, 15, 20, 25]
        .iter()
        .map(|&w| dag.add_vertex(w))
        .collect();
    let (a, b, c, d, e, g) = (ids[0], ids[1], ids[2], ids[3], ids[4], ids[6]);

    dag.add_edge(a, b, 1)?;
    dag.add_edge(a, d, 2)?;
    dag.add_edge(b, c, 2)?;
    dag.add_edge(b, d, 5)?;
    dag.add_edge(b, e, 6)?;
    dag.add_edge(c, e, 3)?;
    dag.add_edge(c, ids[7], 2)?;
    dag.add_edge(d, e, 7)?;
    dag.add_edge(e, ids[5], 8)?;
    dag.add_edge(e, g, 4)?;

    let order = dag
        .topological_ordering()
        .ok_or_else(|| anyhow::anyhow!("demo graph reported a residual cycle"))?;
    let topological_order = order
        .iter()
        .map(|&v| dag.weight(v).copied())
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| anyhow::anyhow!("ordering referenced an unknown vertex"))?;

    let path_count = dag.all_paths(a, g).len();
    let longest = dag
        .weight_of_longest_path(a, g, Clone::clone, Clone::clone)
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;
    let shortest = dag
        .weight_of_path_comp(a, g, Clone::clone, Clone::clone, Ordering::Less)
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;

    Ok(IntsOutput {
        topological_order,
        path_count,
        longest_path_weight: longest,
        shortest_path_weight: shortest,
    })
}

fn render_human(payload: &IntsOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Topological order: {:?}", payload.topological_order)?;
    writeln!(w, "Paths a → g: {}", payload.path_count)?;
    writeln!(w, "Longest path weight: {}", payload.longest_path_weight)?;
    writeln!(w, "Shortest path weight: {}", payload.shortest_path_weight)
}
