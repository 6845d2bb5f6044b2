use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use pagerank_core::{write_random_graph, GeneratorConfig, GraphBuilder, GraphStats, PageRankOptions};

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(about = "PageRank weights for edge-list graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the nodes of an edge-list file
    Rank {
        /// Edge-list file, one `from -> to` per line
        file: PathBuf,
        /// Stop when the average weight change per node is at or below this
        #[arg(long, default_value_t = 0.1)]
        min_weight_diff: f64,
        /// Maximum number of iterations
        #[arg(long, default_value_t = 10)]
        max_iterations: usize,
        /// Reserved, currently has no effect
        #[arg(long)]
        include_teleport: bool,
        /// Hide per-iteration progress
        #[arg(long, short)]
        quiet: bool,
        /// Only print the N heaviest nodes
        #[arg(long)]
        top: Option<usize>,
    },
    /// Write a random edge-list file
    Generate {
        #[arg(long, default_value_t = 100)]
        nodes: u32,
        #[arg(long, default_value_t = 130)]
        edges: usize,
        /// Seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, short, default_value = "./random_data.txt")]
        output: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let quiet = matches!(cli.command, Commands::Rank { quiet: true, .. });
    init_logging(if quiet { LevelFilter::Warn } else { LevelFilter::Info });

    match cli.command {
        Commands::Rank {
            file,
            min_weight_diff,
            max_iterations,
            include_teleport,
            quiet,
            top,
        } => {
            let options = PageRankOptions {
                min_weight_diff,
                max_iterations,
                include_teleport,
                verbose: !quiet,
            };
            run_rank(&file, &options, top)
        }
        Commands::Generate {
            nodes,
            edges,
            seed,
            output,
        } => {
            let config = GeneratorConfig {
                node_count: nodes,
                edge_count: edges,
                seed,
                output,
            };
            let written = write_random_graph(&config)?;
            println!(
                "{} {} edges to {}",
                "Wrote".green().bold(),
                written,
                config.output.display()
            );
            Ok(())
        }
    }
}

fn run_rank(file: &Path, options: &PageRankOptions, top: Option<usize>) -> Result<()> {
    let builder = GraphBuilder::from_path(file)
        .with_context(|| format!("failed to load graph from {}", file.display()))?;
    if !builder.skipped().is_empty() {
        eprintln!(
            "{} skipped {} malformed line(s)",
            "warning:".yellow().bold(),
            builder.skipped().len()
        );
    }

    let mut graph = builder.build();
    let stats = GraphStats::from_graph(&graph);
    println!(
        "{} nodes, {} edges ({} dangling)",
        stats.total_nodes.to_string().bold(),
        stats.total_edges.to_string().bold(),
        stats.dangling_nodes
    );

    let ranking = graph.pagerank(options)?;
    let status = if ranking.converged {
        "converged".green()
    } else {
        "iteration cap reached".yellow()
    };
    println!(
        "{} after {} iteration(s), average change {:.6}",
        status, ranking.iterations, ranking.average_diff
    );

    let shown = top.unwrap_or(graph.node_count());
    for node in graph.top_nodes(shown) {
        println!("{:>12.6}  {}", node.weight(), node.id().cyan());
    }
    Ok(())
}

fn init_logging(default_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
