//! # PageRank Core
//!
//! PageRank weight propagation over directed link graphs.
//!
//! A [`Graph`] is built from edge-list text (`page1 -> page2`, one link per
//! line) by [`GraphBuilder`]. [`Graph::pagerank`] then repeatedly pushes
//! every node's weight along its outgoing links until the average change per
//! node drops to a threshold or a round cap is hit.
//!
//! ## Features
//!
//! - **Graph model**: deduplicated nodes and edges with O(1) id lookup
//! - **PageRank**: synchronous rounds with early stopping
//! - **Edge-list I/O**: tolerant parser and a random graph generator
//! - **Statistics**: degree summary and top-N ranking
//! - **Python bindings** (feature `python`)
//!
//! ## Usage
//!
//! ```
//! use pagerank_core::{GraphBuilder, PageRankOptions};
//!
//! let mut graph = GraphBuilder::from_text("A -> B\nB -> C\nC -> A\n")?.build();
//! let options = PageRankOptions::default().min_weight_diff(0.0).max_iterations(5);
//! let ranking = graph.pagerank(&options)?;
//!
//! assert!(ranking.nodes.iter().all(|node| node.weight() == 1.0));
//! # Ok::<(), pagerank_core::PageRankError>(())
//! ```
//!
//! ## Python Usage
//!
//! ```python
//! from pagerank._pagerank_core import rank_edge_list
//!
//! weights = rank_edge_list("A -> B\nB -> A\n", min_weight_diff=0.0)
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod generator;
pub mod graph;
pub mod node;
pub mod pagerank;
pub mod stats;

pub use builder::{parse_edge_line, GraphBuilder, SkippedLine};
pub use edge::{edge_id, Edge, EdgeIndex, EdgeKind, EDGE_ID_SEPARATOR};
pub use error::{PageRankError, Result};
pub use generator::{generate_edges, render_edge_list, write_random_graph, GeneratorConfig};
pub use graph::Graph;
pub use node::{Endpoint, Node, NodeIndex, DEFAULT_NODE_WEIGHT};
pub use pagerank::{PageRankOptions, Ranking};
pub use stats::GraphStats;

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::{PyIOError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::{PyDict, PyList};

    use crate::{
        generate_edges, render_edge_list, GeneratorConfig, Graph, GraphBuilder, GraphStats,
        PageRankError, PageRankOptions,
    };

    impl From<PageRankError> for PyErr {
        fn from(err: PageRankError) -> PyErr {
            match err {
                PageRankError::Io { .. } => PyIOError::new_err(err.to_string()),
                other => PyValueError::new_err(other.to_string()),
            }
        }
    }

    fn ranked_graph(text: &str, options: &PageRankOptions) -> Result<Graph, PageRankError> {
        let mut graph = GraphBuilder::from_text(text)?.build();
        graph.pagerank(options)?;
        Ok(graph)
    }

    /// Compute PageRank weights for an edge list.
    ///
    /// # Arguments
    ///
    /// * `text` - Edge-list text, one `from -> to` per line
    /// * `min_weight_diff` - Convergence threshold (default: 0.1)
    /// * `max_iterations` - Maximum iterations (default: 10)
    /// * `include_teleport` - Reserved, no effect (default: False)
    /// * `verbose` - Log per-iteration progress (default: True)
    ///
    /// # Returns
    ///
    /// Dictionary mapping node id to weight.
    #[pyfunction]
    #[pyo3(signature = (text, min_weight_diff=0.1, max_iterations=10, include_teleport=false, verbose=true))]
    fn rank_edge_list(
        py: Python<'_>,
        text: &str,
        min_weight_diff: f64,
        max_iterations: usize,
        include_teleport: bool,
        verbose: bool,
    ) -> PyResult<Py<PyDict>> {
        let options = PageRankOptions {
            min_weight_diff,
            max_iterations,
            include_teleport,
            verbose,
        };

        // Release GIL during computation
        let graph = py.allow_threads(|| ranked_graph(text, &options))?;

        let dict = PyDict::new_bound(py);
        for node in graph.nodes() {
            dict.set_item(node.id(), node.weight())?;
        }

        Ok(dict.into())
    }

    /// Rank an edge list and return the heaviest nodes.
    ///
    /// # Returns
    ///
    /// List of (node_id, weight, in_degree) tuples, heaviest first.
    #[pyfunction]
    #[pyo3(signature = (text, top_n=10, min_weight_diff=0.1, max_iterations=10))]
    fn top_nodes(
        py: Python<'_>,
        text: &str,
        top_n: usize,
        min_weight_diff: f64,
        max_iterations: usize,
    ) -> PyResult<Py<PyList>> {
        let options = PageRankOptions::default()
            .min_weight_diff(min_weight_diff)
            .max_iterations(max_iterations)
            .verbose(false);

        let results: Vec<(String, f64, usize)> = py.allow_threads(|| {
            let graph = ranked_graph(text, &options)?;
            Ok::<_, PageRankError>(
                graph
                    .top_nodes(top_n)
                    .into_iter()
                    .map(|node| (node.id().to_string(), node.weight(), node.in_degree()))
                    .collect(),
            )
        })?;

        let list = PyList::new_bound(py, results);
        Ok(list.into())
    }

    /// Degree statistics of an edge list.
    #[pyfunction]
    fn graph_stats(py: Python<'_>, text: &str) -> PyResult<Py<PyDict>> {
        let stats = py.allow_threads(|| {
            GraphBuilder::from_text(text).map(|builder| GraphStats::from_graph(builder.graph()))
        })?;

        let dict = PyDict::new_bound(py);
        dict.set_item("total_nodes", stats.total_nodes)?;
        dict.set_item("total_edges", stats.total_edges)?;
        dict.set_item("avg_in_degree", stats.avg_in_degree)?;
        dict.set_item("avg_out_degree", stats.avg_out_degree)?;
        dict.set_item("max_in_degree", stats.max_in_degree)?;
        dict.set_item("max_out_degree", stats.max_out_degree)?;
        dict.set_item("isolated_nodes", stats.isolated_nodes)?;
        dict.set_item("dangling_nodes", stats.dangling_nodes)?;

        Ok(dict.into())
    }

    /// Generate a random edge list as text.
    #[pyfunction]
    #[pyo3(signature = (n_nodes=100, n_edges=130, seed=None))]
    fn generate_edge_list(n_nodes: u32, n_edges: usize, seed: Option<u64>) -> PyResult<String> {
        let config = GeneratorConfig {
            node_count: n_nodes,
            edge_count: n_edges,
            seed,
            ..GeneratorConfig::default()
        };
        Ok(render_edge_list(&generate_edges(&config)?))
    }

    /// Python module definition.
    #[pymodule]
    fn _pagerank_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(rank_edge_list, m)?)?;
        m.add_function(wrap_pyfunction!(top_nodes, m)?)?;
        m.add_function(wrap_pyfunction!(graph_stats, m)?)?;
        m.add_function(wrap_pyfunction!(generate_edge_list, m)?)?;

        // Version info
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;

        Ok(())
    }
}
