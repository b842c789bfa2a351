use crate::collections::FxIndexMap;
use crate::graph::{Graph, NodeId};


/// Construct the shortest path by walking predecessors from goal to start
/// Returns the ordered path as a vector of nodes from start to goal
/// None if the goal has no predecessor (and is not the start) or the chain
/// never reaches start
pub fn shortest_path(predecessors: &FxIndexMap<NodeId, NodeId>, start: &str, goal: &str) -> Option<Vec<NodeId>> {

    let mut path = vec![goal.to_string()];
    let mut current = goal;

    // Trace back from goal to start, a chain longer than the map has a cycle
    while current != start {
        let parent = predecessors.get(current)?;
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(parent.clone());
        current = parent.as_str();
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}

/// Sum of edge weights along consecutive path pairs, looked up in the graph
pub fn path_distance(graph: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| match graph.edge_weight(&pair[0], &pair[1]) {
            Some(weight) => weight,
            None => {
                tracing::warn!(from = %pair[0], to = %pair[1], "path step has no edge");
                0.0
            }
        })
        .sum()
}
