//! PageRank computation by synchronous weight propagation.
//!
//! Each round first recomputes every edge weight from the node weights of the
//! previous round, then sets every node weight to the sum of its incoming
//! edge weights. Nodes are never updated while edges are still reading them,
//! so the result does not depend on iteration order.

use log::{debug, log, warn, Level};

use crate::error::{PageRankError, Result};
use crate::graph::Graph;
use crate::node::Node;

/// Options for [`Graph::pagerank`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankOptions {
    /// Stop once the average per-node weight change of a round is at or
    /// below this value.
    pub min_weight_diff: f64,
    /// Hard cap on the number of rounds.
    pub max_iterations: usize,
    /// Reserved for a teleportation model. Currently has no effect.
    pub include_teleport: bool,
    /// Log per-round progress at `info` instead of `debug`.
    pub verbose: bool,
}

impl Default for PageRankOptions {
    fn default() -> Self {
        Self {
            min_weight_diff: 0.1,
            max_iterations: 10,
            include_teleport: false,
            verbose: true,
        }
    }
}

impl PageRankOptions {
    pub fn min_weight_diff(mut self, value: f64) -> Self {
        self.min_weight_diff = value;
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }

    pub fn include_teleport(mut self, value: bool) -> Self {
        self.include_teleport = value;
        self
    }

    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }
}

/// Result of a [`Graph::pagerank`] run.
#[derive(Debug, Clone, Copy)]
pub struct Ranking<'g> {
    /// All nodes of the graph with their final weights.
    pub nodes: &'g [Node],
    /// Number of rounds actually run.
    pub iterations: usize,
    /// Whether the run stopped early on the convergence threshold.
    pub converged: bool,
    /// Average per-node weight change of the last round (0 if none ran).
    pub average_diff: f64,
}

impl Ranking<'_> {
    /// Final weights by node id, in graph order.
    pub fn weights(&self) -> Vec<(String, f64)> {
        self.nodes
            .iter()
            .map(|node| (node.id().to_string(), node.weight()))
            .collect()
    }
}

impl Graph {
    /// Run PageRank in place, updating every node and edge weight.
    ///
    /// # Arguments
    ///
    /// * `options` - Convergence threshold, round cap and logging options
    ///
    /// # Errors
    ///
    /// [`PageRankError::EmptyGraph`] if the graph has no nodes.
    pub fn pagerank(&mut self, options: &PageRankOptions) -> Result<Ranking<'_>> {
        if self.nodes.is_empty() {
            return Err(PageRankError::EmptyGraph);
        }
        if options.include_teleport {
            warn!("include_teleport is reserved and has no effect");
        }

        let level = if options.verbose { Level::Info } else { Level::Debug };
        let n = self.nodes.len() as f64;
        let mut iterations = 0;
        let mut converged = false;
        let mut average_diff = 0.0;

        for round in 1..=options.max_iterations {
            // Edges first, from last round's node weights
            for edge in &mut self.edges {
                let source = &self.nodes[edge.source().index()];
                edge.update_weight(source)?;
            }

            let mut total_diff = 0.0;
            for node in &mut self.nodes {
                let old_weight = node.weight();
                let new_weight: f64 = node
                    .in_edges()
                    .map(|idx| self.edges[idx.index()].weight())
                    .sum();
                node.set_weight(new_weight)?;
                total_diff += (old_weight - new_weight).abs();
            }

            iterations = round;
            average_diff = total_diff / n;
            log!(level, "Average weight change at iteration {}: {}", round, average_diff);

            if average_diff <= options.min_weight_diff {
                log!(level, "Early stopping criterion met after {} iterations", round);
                converged = true;
                break;
            }
        }

        if !converged {
            debug!("Stopped after {} iterations without converging", iterations);
        }

        Ok(Ranking {
            nodes: &self.nodes,
            iterations,
            converged,
            average_diff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn graph_from(edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::new();
        for (from, to) in edges {
            graph.connect(from, to).unwrap();
        }
        graph
    }

    fn weight(graph: &Graph, id: &str) -> f64 {
        graph.get_node(id).unwrap().weight()
    }

    #[test]
    fn test_default_options() {
        let options = PageRankOptions::default();
        assert_eq!(options.min_weight_diff, 0.1);
        assert_eq!(options.max_iterations, 10);
        assert!(!options.include_teleport);
        assert!(options.verbose);
    }

    #[test]
    fn test_cyclic_graph_is_stable() {
        // Cycle: A -> B -> C -> A
        let mut graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let options = PageRankOptions::default().min_weight_diff(0.0).max_iterations(5);
        let ranking = graph.pagerank(&options).unwrap();

        assert!(ranking.converged);
        assert_eq!(ranking.iterations, 1);
        assert_eq!(ranking.average_diff, 0.0);
        assert_eq!(ranking.nodes.len(), 3);
        for node in ranking.nodes {
            assert_eq!(node.weight(), 1.0);
        }
        for edge in graph.edges() {
            assert_eq!(edge.weight(), 1.0);
        }
    }

    #[test]
    fn test_node_without_in_edges_drops_to_zero() {
        // Hub pattern: A, B, C all point to D
        let mut graph = graph_from(&[("A", "D"), ("B", "D"), ("C", "D")]);
        let options = PageRankOptions::default().max_iterations(1);
        graph.pagerank(&options).unwrap();

        assert_eq!(weight(&graph, "A"), 0.0);
        assert_eq!(weight(&graph, "B"), 0.0);
        assert_eq!(weight(&graph, "C"), 0.0);
        assert_eq!(weight(&graph, "D"), 3.0);
    }

    #[test]
    fn test_synchronous_update() {
        // Chain: A -> B -> C. After one round B must hold A's old weight and
        // C must hold B's old weight, not the freshly updated one.
        let mut graph = graph_from(&[("A", "B"), ("B", "C")]);
        let a = graph.node_index("A").unwrap();
        graph.set_weight(a, 4.0).unwrap();

        let options = PageRankOptions::default().max_iterations(1);
        graph.pagerank(&options).unwrap();

        assert_eq!(weight(&graph, "A"), 0.0);
        assert_eq!(weight(&graph, "B"), 4.0);
        assert_eq!(weight(&graph, "C"), 1.0);
    }

    #[test]
    fn test_weight_split_over_out_edges() {
        let mut graph = graph_from(&[("A", "B"), ("A", "C"), ("B", "A"), ("C", "A")]);
        let options = PageRankOptions::default().max_iterations(1);
        graph.pagerank(&options).unwrap();

        assert_eq!(weight(&graph, "A"), 2.0);
        assert_eq!(weight(&graph, "B"), 0.5);
        assert_eq!(weight(&graph, "C"), 0.5);
        assert_eq!(graph.get_edge("A->B").unwrap().weight(), 0.5);
    }

    #[test]
    fn test_max_iterations_cap() {
        // A negative threshold can never be met
        let mut graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let options = PageRankOptions::default().min_weight_diff(-1.0).max_iterations(2);
        let ranking = graph.pagerank(&options).unwrap();

        assert!(!ranking.converged);
        assert_eq!(ranking.iterations, 2);
    }

    #[test]
    fn test_zero_iterations_leaves_weights() {
        let mut graph = graph_from(&[("A", "B")]);
        let options = PageRankOptions::default().max_iterations(0);
        let ranking = graph.pagerank(&options).unwrap();

        assert_eq!(ranking.iterations, 0);
        assert!(!ranking.converged);
        assert!(ranking.nodes.iter().all(|n| n.weight() == 1.0));
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::new();
        let err = graph.pagerank(&PageRankOptions::default()).unwrap_err();
        assert!(matches!(err, PageRankError::EmptyGraph));
    }

    #[test]
    fn test_isolated_nodes() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("A"));
        graph.add_node(Node::new("B"));
        let ranking = graph.pagerank(&PageRankOptions::default()).unwrap();

        assert!(ranking.nodes.iter().all(|n| n.weight() == 0.0));
        // 1.0 lost per node in round 1, nothing in round 2
        assert_eq!(ranking.iterations, 2);
        assert!(ranking.converged);
    }

    #[test]
    fn test_teleport_flag_has_no_effect() {
        let edges = [("A", "B"), ("B", "C"), ("C", "A"), ("A", "C")];
        let mut plain = graph_from(&edges);
        let mut teleport = graph_from(&edges);

        let options = PageRankOptions::default().verbose(false);
        plain.pagerank(&options).unwrap();
        teleport.pagerank(&options.clone().include_teleport(true)).unwrap();

        for node in plain.nodes() {
            assert_eq!(node.weight(), weight(&teleport, node.id()));
        }
    }

    #[test]
    fn test_deterministic() {
        let edges = [("1", "2"), ("2", "3"), ("3", "1"), ("1", "3"), ("4", "1"), ("3", "4")];
        let options = PageRankOptions::default().min_weight_diff(1e-9).max_iterations(50);

        let mut first = graph_from(&edges);
        let mut second = graph_from(&edges);
        let a = first.pagerank(&options).unwrap().weights();
        let b = second.pagerank(&options).unwrap().weights();
        assert_eq!(a, b);
    }
}
