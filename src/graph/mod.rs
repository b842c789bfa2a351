use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Coordinate;


/// Nodes are identified by their string id
pub type NodeId = String;


/// Graph node - identity is the id, coordinates may move
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lng: f64,
}

impl Node {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}


/// Directed adjacency record, an undirected edge is stored as two of these
/// weight is a snapshot taken when the edge was added (meters)
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}


/// Undirected weighted graph keyed by node id
/// - nodes: id -> Node
/// - adjacency: id -> edges in insertion order, which is also relaxation order
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<NodeId, Node>,
    adjacency: FxIndexMap<NodeId, Vec<Edge>>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a node, existing edges are left untouched
    pub fn add_node(&mut self, id: impl Into<NodeId>, lat: f64, lng: f64) {
        let id = id.into();
        self.adjacency.entry(id.clone()).or_default();
        self.nodes.insert(id.clone(), Node { id, lat, lng });
    }

    /// Move an existing node, silently ignored when absent
    /// Edge weights are snapshots and are NOT recomputed
    pub fn update_node(&mut self, id: &str, lat: f64, lng: f64) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.lat = lat;
            node.lng = lng;
        }
    }

    /// Connect a and b in both directions
    /// Without an explicit weight the haversine distance between the nodes'
    /// current coordinates is used. Duplicates are not checked here, see has_edge
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Option<f64>) -> Result<(), GraphError> {
        let (node_a, node_b) = match (self.nodes.get(a), self.nodes.get(b)) {
            (Some(node_a), Some(node_b)) => (node_a, node_b),
            (None, _) => return Err(invalid_reference(a)),
            (_, None) => return Err(invalid_reference(b)),
        };

        let weight = weight.unwrap_or_else(|| node_a.coordinate().distance_to(&node_b.coordinate()));

        self.adjacency.entry(a.to_string()).or_default().push(Edge {
            from: a.to_string(),
            to: b.to_string(),
            weight,
        });
        self.adjacency.entry(b.to_string()).or_default().push(Edge {
            from: b.to_string(),
            to: a.to_string(),
            weight,
        });

        Ok(())
    }

    /// Linear scan of a's adjacency for an edge to b
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).iter().any(|edge| edge.to == b)
    }

    /// Weight of the first a -> b record
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|edge| edge.to == b)
            .map(|edge| edge.weight)
    }

    /// Outgoing edges of a node, empty for unknown ids
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn coordinate(&self, id: &str) -> Option<Coordinate> {
        self.nodes.get(id).map(Node::coordinate)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Undirected edge count (each edge is stored twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Drop every node and edge
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
    }
}

fn invalid_reference(id: &str) -> GraphError {
    tracing::warn!(node = id, "edge endpoint missing from graph");
    GraphError::InvalidReference { id: id.to_string() }
}
