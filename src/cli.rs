use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use ergode_matrix::InitialDistribution;

/// Ergode Markov chain analyzer.
#[derive(Parser)]
#[command(
    name = "ergode",
    version,
    about = "Structural and long-run analysis of finite Markov chains"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline on an input graph.
    Analyze(AnalyzeArgs),
    /// Write the graph and Hasse mermaid diagrams.
    Render(RenderArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the input graph file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file (default: ergode.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Initial distribution strategy:
    /// `single:<state>`, `weighted:<state>=<w>,...`, `uniform`, or `random`.
    #[arg(short, long, value_parser = parse_distribution)]
    pub dist: Option<InitialDistribution>,

    /// Number of steps to propagate the initial distribution.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Keep transitively implied condensation edges.
    #[arg(long)]
    pub keep_redundant: bool,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to the input graph file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the diagram files (default: alongside the input).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Keep transitively implied condensation edges in the Hasse diagram.
    #[arg(long)]
    pub keep_redundant: bool,
}

/// Parses a distribution spec such as `single:3` or `weighted:1=0.5,2=0.5`.
pub fn parse_distribution(spec: &str) -> Result<InitialDistribution> {
    match spec.split_once(':') {
        None => match spec {
            "uniform" => Ok(InitialDistribution::Uniform),
            "random" => Ok(InitialDistribution::Random),
            other => bail!("unknown distribution strategy {other:?}"),
        },
        Some(("single", state)) => {
            let state: usize = state
                .parse()
                .with_context(|| format!("invalid state id {state:?}"))?;
            Ok(InitialDistribution::SingleState(state))
        }
        Some(("weighted", entries)) => {
            let mut weights = Vec::new();
            for entry in entries.split(',') {
                let (state, weight) = entry
                    .split_once('=')
                    .with_context(|| format!("expected <state>=<weight>, got {entry:?}"))?;
                let state: usize = state
                    .parse()
                    .with_context(|| format!("invalid state id {state:?}"))?;
                let weight: f64 = weight
                    .parse()
                    .with_context(|| format!("invalid weight {weight:?}"))?;
                weights.push((state, weight));
            }
            Ok(InitialDistribution::Weighted(weights))
        }
        Some((other, _)) => bail!("unknown distribution strategy {other:?}"),
    }
}
