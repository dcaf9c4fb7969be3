use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ergode_graph::read_graph;
use ergode_hasse::{class_of, condense, reduce_transitive};
use ergode_mermaid::{render_graph, render_hasse};
use ergode_tarjan::decompose;

use crate::cli::RenderArgs;

/// Write the graph and Hasse mermaid diagrams next to the input (or into
/// `--output-dir`).
pub fn run(args: RenderArgs) -> Result<()> {
    let graph = read_graph(&args.input)
        .with_context(|| format!("cannot load graph {}", args.input.display()))?;

    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    let dir = match &args.output_dir {
        Some(d) => d.clone(),
        None => args
            .input
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };

    let graph_path = dir.join(format!("{stem}.mermaid.mmd"));
    fs::write(&graph_path, render_graph(&graph))
        .with_context(|| format!("failed to write {}", graph_path.display()))?;
    info!(path = %graph_path.display(), "graph diagram written");

    let partition = decompose(&graph);
    let mut edges = condense(&graph, &class_of(&partition, graph.n_states()));
    if !args.keep_redundant {
        reduce_transitive(&mut edges);
    }

    let hasse_path = dir.join(format!("{stem}.hasse.mmd"));
    fs::write(&hasse_path, render_hasse(&partition, &edges))
        .with_context(|| format!("failed to write {}", hasse_path.display()))?;
    info!(path = %hasse_path.display(), "hasse diagram written");

    Ok(())
}
