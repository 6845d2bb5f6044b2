//! Graph vertices.
//!
//! A [`Node`] is a page in the link graph. It owns its identity and current
//! weight, and records the handles of the edges that leave and enter it.
//! Degrees are always the live size of those sets.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::edge::EdgeIndex;
use crate::error::{check_weight, Result};

/// Weight every node starts with.
pub const DEFAULT_NODE_WEIGHT: f64 = 1.0;

/// Handle of a node inside a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Position of the node in the graph's node list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What an edge needs to know about the nodes it connects.
pub trait Endpoint {
    fn id(&self) -> &str;
    fn weight(&self) -> f64;
    fn out_degree(&self) -> usize;
    fn in_degree(&self) -> usize;
}

/// A page in the link graph.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    weight: f64,
    out_edges: FxHashSet<EdgeIndex>,
    in_edges: FxHashSet<EdgeIndex>,
}

impl Node {
    /// Create a node with the default weight of 1.0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: DEFAULT_NODE_WEIGHT,
            out_edges: FxHashSet::default(),
            in_edges: FxHashSet::default(),
        }
    }

    /// Create a node with an explicit starting weight.
    pub fn with_weight(id: impl Into<String>, weight: f64) -> Result<Self> {
        let mut node = Self::new(id);
        node.set_weight(weight)?;
        Ok(node)
    }

    /// Identifier, unique within a graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current importance score.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Assign a new weight. Negative or non-finite values are rejected and
    /// leave the current weight untouched.
    pub fn set_weight(&mut self, value: f64) -> Result<()> {
        self.weight = check_weight(value)?;
        Ok(())
    }

    /// Record an edge leaving this node. Returns `false` if it was already
    /// recorded, in which case the out-degree does not change.
    pub fn add_out_edge(&mut self, edge: EdgeIndex) -> bool {
        self.out_edges.insert(edge)
    }

    /// Record an edge entering this node. Same set semantics as
    /// [`add_out_edge`](Self::add_out_edge).
    pub fn add_in_edge(&mut self, edge: EdgeIndex) -> bool {
        self.in_edges.insert(edge)
    }

    /// Number of distinct edges leaving this node.
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// Number of distinct edges entering this node.
    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }

    /// Handles of the edges leaving this node, in no particular order.
    pub fn out_edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.out_edges.iter().copied()
    }

    /// Handles of the edges entering this node, in no particular order.
    pub fn in_edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.in_edges.iter().copied()
    }
}

impl Endpoint for Node {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    fn in_degree(&self) -> usize {
        self.in_edges.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
