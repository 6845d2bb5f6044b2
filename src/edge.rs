//! Directed edges and their weight-update rules.

use std::hash::{Hash, Hasher};

use crate::error::{check_weight, Result};
use crate::node::{Endpoint, NodeIndex};

/// Separator between the endpoint ids in an edge id.
///
/// Matches the edge-list text format, so ids read from a file never contain
/// it. Ids built in code may, in which case the string id alone does not
/// tell the endpoints apart; an edge is identified by its endpoint pair.
pub const EDGE_ID_SEPARATOR: &str = "->";

/// Handle of an edge inside a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(pub(crate) usize);

impl EdgeIndex {
    /// Position of the edge in the graph's edge list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Build the id of the edge `source -> destination`.
pub fn edge_id(source: &str, destination: &str) -> String {
    let mut id = String::with_capacity(source.len() + EDGE_ID_SEPARATOR.len() + destination.len());
    id.push_str(source);
    id.push_str(EDGE_ID_SEPARATOR);
    id.push_str(destination);
    id
}

/// How an edge derives its weight from its source node.
///
/// New kinds (a teleportation edge that moves weight without following an
/// explicit link) go here, each with its own rule in [`EdgeKind::propagate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum EdgeKind {
    /// Follows an outgoing link: the source splits its weight evenly over
    /// its out-edges.
    #[default]
    Link,
}

impl EdgeKind {
    /// Weight carried by an edge of this kind leaving `source`.
    pub fn propagate<N: Endpoint + ?Sized>(self, source: &N) -> f64 {
        match self {
            EdgeKind::Link => match source.out_degree() {
                0 => 0.0,
                degree => source.weight() / degree as f64,
            },
        }
    }
}

/// A directed edge between two nodes of a graph.
#[derive(Debug, Clone)]
pub struct Edge {
    id: String,
    /// Length of the source id prefix in `id`.
    source_len: usize,
    kind: EdgeKind,
    source: NodeIndex,
    destination: NodeIndex,
    weight: f64,
}

impl Edge {
    /// Create an edge of the given kind. `from` and `to` are the nodes behind
    /// the `source` and `destination` handles.
    pub fn new<N: Endpoint + ?Sized>(
        kind: EdgeKind,
        (source, from): (NodeIndex, &N),
        (destination, to): (NodeIndex, &N),
    ) -> Self {
        Self {
            id: edge_id(from.id(), to.id()),
            source_len: from.id().len(),
            kind,
            source,
            destination,
            weight: 0.0,
        }
    }

    /// Create a [`EdgeKind::Link`] edge.
    pub fn link<N: Endpoint + ?Sized>(source: (NodeIndex, &N), destination: (NodeIndex, &N)) -> Self {
        Self::new(EdgeKind::Link, source, destination)
    }

    /// Derived id, `"<source>-><destination>"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the source node.
    pub fn source_id(&self) -> &str {
        &self.id[..self.source_len]
    }

    /// Id of the destination node.
    pub fn destination_id(&self) -> &str {
        &self.id[self.source_len + EDGE_ID_SEPARATOR.len()..]
    }

    /// Rule this edge uses to derive its weight.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Handle of the source node.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Handle of the destination node.
    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    /// Weight carried in the last round.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Recompute the weight from the current state of the source node.
    ///
    /// Returns the absolute change from the previous weight.
    pub fn update_weight<N: Endpoint + ?Sized>(&mut self, source: &N) -> Result<f64> {
        let old_weight = self.weight;
        self.weight = check_weight(self.kind.propagate(source))?;
        Ok((old_weight - self.weight).abs())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source_len == other.source_len
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.source_len.hash(state);
    }
}
