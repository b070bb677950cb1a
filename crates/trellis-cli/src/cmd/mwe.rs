//! `trl mwe` — the minimal three-vertex example.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use trellis_core::Dag;

use crate::output::{OutputMode, render};

/// Arguments for `trl mwe`.
#[derive(Args, Debug, Default)]
pub struct MweArgs {}

#[derive(Debug, Serialize)]
struct MweOutput {
    vertex_weights: Vec<i64>,
    longest_path_weight: i64,
}

/// Execute `trl mwe`.
pub fn run(_args: &MweArgs, mode: OutputMode) -> anyhow::Result<()> {
    let payload = build()?;
    render(mode, &payload, render_human)
}

fn build() -> anyhow::Result<MweOutput> {
    let mut dag = Dag::new();
    let a = dag.add_vertex(1i64);
    let b = dag.add_vertex(2);
    let c = dag.add_vertex(3);

    dag.add_edge(a, b, 2)?;
    dag.add_edge(b, c, 3)?;
    dag.add_edge(a, c, 10)?;

    let longest = dag
        .weight_of_longest_path(a, c, Clone::clone, Clone::clone)
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;

    Ok(MweOutput {
        vertex_weights: vec![1, 2, 3],
        longest_path_weight: longest,
    })
}

fn render_human(payload: &MweOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Vertices: {:?}", payload.vertex_weights)?;
    writeln!(w, "Longest path weight a → c: {}", payload.longest_path_weight)
}
