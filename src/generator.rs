//! Random edge-list generation for testing and benchmarks.

use std::fs;
use std::path::PathBuf;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::edge::EDGE_ID_SEPARATOR;
use crate::error::{PageRankError, Result};

/// Settings for [`generate_edges`] and [`write_random_graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Node ids are drawn from `1..=node_count`.
    pub node_count: u32,
    /// Number of distinct edges to emit.
    pub edge_count: usize,
    /// Fixed seed for a reproducible edge list; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Destination of [`write_random_graph`].
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 100,
            edge_count: 130,
            seed: None,
            output: PathBuf::from("./random_data.txt"),
        }
    }
}

impl GeneratorConfig {
    /// Largest number of distinct edges without self-loops.
    pub fn max_edges(&self) -> u64 {
        let n = u64::from(self.node_count);
        n * n.saturating_sub(1)
    }

    fn validate(&self) -> Result<()> {
        if self.edge_count as u64 > self.max_edges() {
            return Err(PageRankError::InvalidConfig(format!(
                "{} nodes allow at most {} distinct edges, {} requested",
                self.node_count,
                self.max_edges(),
                self.edge_count
            )));
        }
        Ok(())
    }
}

/// Sample `edge_count` distinct `(from, to)` pairs with `from != to`.
///
/// Pairs are returned in the order they were drawn.
pub fn generate_edges(config: &GeneratorConfig) -> Result<Vec<(u32, u32)>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
    let mut edges = Vec::with_capacity(config.edge_count);

    while edges.len() < config.edge_count {
        let next = (
            rng.gen_range(1..=config.node_count),
            rng.gen_range(1..=config.node_count),
        );
        if next.0 == next.1 {
            continue;
        }
        if seen.insert(next) {
            edges.push(next);
        }
    }

    Ok(edges)
}

/// Render edges in the edge-list text format.
pub fn render_edge_list(edges: &[(u32, u32)]) -> String {
    edges
        .iter()
        .map(|(from, to)| format!("{} {} {}\n", from, EDGE_ID_SEPARATOR, to))
        .collect()
}

/// Generate a random edge list and write it to `config.output`.
///
/// Returns the number of edges written.
pub fn write_random_graph(config: &GeneratorConfig) -> Result<usize> {
    let edges = generate_edges(config)?;
    fs::write(&config.output, render_edge_list(&edges)).map_err(|source| PageRankError::Io {
        source,
        path: config.output.clone(),
    })?;

    info!(
        "Wrote {} edges over {} nodes to {}",
        edges.len(),
        config.node_count,
        config.output.display()
    );
    Ok(edges.len())
}
