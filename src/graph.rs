//! Graph storage: deduplicated nodes and edges with id-keyed lookup.

use hashbrown::HashMap;

use crate::edge::{Edge, EdgeIndex};
use crate::error::{PageRankError, Result};
use crate::node::{Node, NodeIndex};

/// Directed link graph.
///
/// Nodes and edges are stored in insertion order and are never removed, so
/// the handles returned by [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge) stay valid for the life of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Reverse lookup: node id -> handle
    node_index: HashMap<String, NodeIndex>,

    /// Deduplication: (source, destination) -> handle
    edge_index: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,

    /// Reverse lookup: edge id -> handle of the first edge with that id
    edge_ids: HashMap<String, EdgeIndex>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            node_index: HashMap::with_capacity(node_capacity),
            edge_index: HashMap::with_capacity(edge_capacity),
            edge_ids: HashMap::with_capacity(edge_capacity),
        }
    }

    /// Insert a node. Idempotent: if a node with the same id exists, its
    /// handle is returned and `node` is dropped.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(node.id()) {
            return idx;
        }
        let idx = NodeIndex(self.nodes.len());
        self.node_index.insert(node.id().to_string(), idx);
        self.nodes.push(node);
        idx
    }

    /// Insert an edge and wire it into its endpoints' edge sets.
    ///
    /// Idempotent: if an edge between the same two nodes exists, its handle
    /// is returned. Fails with [`PageRankError::IncompatibleEndpoint`] if the
    /// edge was not built from nodes of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex> {
        let (source, destination) = match (self.node(edge.source()), self.node(edge.destination())) {
            (Some(from), Some(to))
                if from.id() == edge.source_id() && to.id() == edge.destination_id() =>
            {
                (edge.source(), edge.destination())
            }
            _ => {
                return Err(PageRankError::IncompatibleEndpoint {
                    edge: edge.id().to_string(),
                })
            }
        };

        if let Some(&idx) = self.edge_index.get(&(source, destination)) {
            return Ok(idx);
        }

        let idx = EdgeIndex(self.edges.len());
        self.edge_index.insert((source, destination), idx);
        self.edge_ids.entry(edge.id().to_string()).or_insert(idx);
        self.edges.push(edge);
        self.nodes[source.0].add_out_edge(idx);
        self.nodes[destination.0].add_in_edge(idx);
        Ok(idx)
    }

    /// Insert a [`Link`](crate::EdgeKind::Link) edge between two existing nodes.
    pub fn link(&mut self, source: NodeIndex, destination: NodeIndex) -> Result<EdgeIndex> {
        let edge = Edge::link(
            (source, self.endpoint(source)?),
            (destination, self.endpoint(destination)?),
        );
        self.add_edge(edge)
    }

    /// Insert the link `from_id -> to_id`, creating either node if missing.
    pub fn connect(&mut self, from_id: &str, to_id: &str) -> Result<EdgeIndex> {
        let source = self.add_node(Node::new(from_id));
        let destination = self.add_node(Node::new(to_id));
        self.link(source, destination)
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|idx| &self.nodes[idx.0])
    }

    /// Look up an edge by id (`"<source>-><destination>"`).
    ///
    /// If node ids themselves contain `->`, several edges can share one id;
    /// the first inserted wins. Use [`find_edge`](Self::find_edge) to look
    /// up by endpoints instead.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edge_ids.get(id).map(|idx| &self.edges[idx.0])
    }

    /// Look up the edge `source -> destination` by node handles.
    pub fn find_edge(&self, source: NodeIndex, destination: NodeIndex) -> Option<&Edge> {
        self.edge_index
            .get(&(source, destination))
            .map(|idx| &self.edges[idx.0])
    }

    /// Like [`get_node`](Self::get_node), for callers that expect a hit.
    pub fn try_node(&self, id: &str) -> Result<&Node> {
        self.get_node(id)
            .ok_or_else(|| PageRankError::NodeNotFound { id: id.to_string() })
    }

    /// Like [`get_edge`](Self::get_edge), for callers that expect a hit.
    pub fn try_edge(&self, id: &str) -> Result<&Edge> {
        self.get_edge(id)
            .ok_or_else(|| PageRankError::EdgeNotFound { id: id.to_string() })
    }

    /// Handle of the node with the given id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Node behind a handle.
    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.0)
    }

    /// Edge behind a handle.
    pub fn edge(&self, idx: EdgeIndex) -> Option<&Edge> {
        self.edges.get(idx.0)
    }

    /// Assign a node weight. Negative values are rejected.
    pub fn set_weight(&mut self, idx: NodeIndex, value: f64) -> Result<()> {
        self.nodes
            .get_mut(idx.0)
            .ok_or_else(|| PageRankError::NodeNotFound { id: format!("#{}", idx.0) })?
            .set_weight(value)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn endpoint(&self, idx: NodeIndex) -> Result<&Node> {
        self.node(idx)
            .ok_or_else(|| PageRankError::NodeNotFound { id: format!("#{}", idx.0) })
    }
}
