//! `trl strings` — a non-numeric weight algebra: concatenation with
//! length-then-lexicographic comparison.

use std::cmp::Ordering;
use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use trellis_core::{Dag, StrWeight};

use crate::output::{OutputMode, render};

/// Arguments for `trl strings`.
#[derive(Args, Debug, Default)]
pub struct StringsArgs {}

#[derive(Debug, Serialize)]
struct StringsOutput {
    shortest_path_weight: String,
    longest_path_weight: String,
    /// Longest path with a constant `"|"` edge interpreter marking hops.
    piped_path_weight: String,
}

/// Execute `trl strings`.
pub fn run(_args: &StringsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let payload = build()?;
    render(mode, &payload, render_human)
}

fn build() -> anyhow::Result<StringsOutput> {
    let mut dag = Dag::new();
    let a = dag.add_vertex(StrWeight::from("a"));
    let bb = dag.add_vertex(StrWeight::from("bb"));
    let ca = dag.add_vertex(StrWeight::from("ca"));

    dag.add_edge(a, bb, StrWeight::from(""))?;
    dag.add_edge(bb, ca, StrWeight::from(""))?;
    dag.add_edge(a, ca, StrWeight::from(""))?;

    let shortest = dag
        .weight_of_path_comp(a, ca, Clone::clone, Clone::clone, Ordering::Less)
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;
    let longest = dag
        .weight_of_longest_path(a, ca, Clone::clone, Clone::clone)
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;
    let piped = dag
        .weight_of_longest_path(a, ca, Clone::clone, |_| StrWeight::from("|"))
        .ok_or_else(|| anyhow::anyhow!("demo vertices are unconnected"))?;

    Ok(StringsOutput {
        shortest_path_weight: shortest.as_str().to_string(),
        longest_path_weight: longest.as_str().to_string(),
        piped_path_weight: piped.as_str().to_string(),
    })
}

fn render_human(payload: &StringsOutput, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Shortest path weight: {}", payload.shortest_path_weight)?;
    writeln!(w, "Longest path weight:  {}", payload.longest_path_weight)?;
    writeln!(w, "With '|' edge marks:  {}", payload.piped_path_weight)
}
