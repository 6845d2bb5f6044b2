//! Degree statistics and weight ranking.
//!
//! Identifies the most important pages of a ranked graph and summarizes how
//! links are distributed over it.

use rayon::prelude::*;

use crate::graph::Graph;
use crate::node::Node;

/// Statistics about link distribution in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub avg_in_degree: f64,
    pub avg_out_degree: f64,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    /// Nodes with no edges at all.
    pub isolated_nodes: usize,
    /// Nodes with no outgoing edges; their weight is not passed on.
    pub dangling_nodes: usize,
}

impl GraphStats {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph.nodes();

        let (total_in, total_out, max_in, max_out, isolated, dangling) = nodes
            .par_iter()
            .map(|node| {
                let (in_deg, out_deg) = (node.in_degree(), node.out_degree());
                (
                    in_deg,
                    out_deg,
                    in_deg,
                    out_deg,
                    usize::from(in_deg == 0 && out_deg == 0),
                    usize::from(out_deg == 0),
                )
            })
            .reduce(
                || (0, 0, 0, 0, 0, 0),
                |a, b| {
                    (
                        a.0 + b.0,
                        a.1 + b.1,
                        a.2.max(b.2),
                        a.3.max(b.3),
                        a.4 + b.4,
                        a.5 + b.5,
                    )
                },
            );

        let average = |total: usize| {
            if nodes.is_empty() {
                0.0
            } else {
                total as f64 / nodes.len() as f64
            }
        };

        Self {
            total_nodes: nodes.len(),
            total_edges: graph.edge_count(),
            avg_in_degree: average(total_in),
            avg_out_degree: average(total_out),
            max_in_degree: max_in,
            max_out_degree: max_out,
            isolated_nodes: isolated,
            dangling_nodes: dangling,
        }
    }
}

impl Graph {
    /// The `top_n` heaviest nodes, by descending weight then ascending id.
    pub fn top_nodes(&self, top_n: usize) -> Vec<&Node> {
        let mut ranked: Vec<&Node> = self.nodes().iter().collect();
        ranked.sort_by(|a, b| {
            b.weight()
                .total_cmp(&a.weight())
                .then_with(|| a.id().cmp(b.id()))
        });
        ranked.truncate(top_n);
        ranked
    }
}
