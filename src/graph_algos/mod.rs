pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use shortest_path::{shortest_path, path_distance};

use serde_json::json;

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::graph::{Graph, Node, NodeId};
use crate::trace::{EventTrace, Level};

/// Result of a single search run
/// - path: start..=goal, None when the goal is unreachable
/// - distance: summed edge weights along path
/// - visited: nodes in the order they were processed
/// - costs: best known cost from start for every graph node (+inf if unreached)
/// - estimates: A* f-scores, empty for Dijkstra
/// - predecessors: node -> previous node on its best known path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub path: Option<Vec<NodeId>>,
    pub distance: Option<f64>,
    pub visited: Vec<NodeId>,
    pub costs: FxIndexMap<NodeId, f64>,
    pub estimates: FxIndexMap<NodeId, f64>,
    pub predecessors: FxIndexMap<NodeId, NodeId>,
}

impl SearchOutcome {
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}


/// Both endpoints must exist before any search work starts
pub(crate) fn check_endpoints<'g>(graph: &'g Graph, start: &str, goal: &str) -> Result<(&'g Node, &'g Node), PathPlannerError> {
    let start_node = graph.node(start).ok_or_else(|| missing_node(start))?;
    let goal_node = graph.node(goal).ok_or_else(|| missing_node(goal))?;
    Ok((start_node, goal_node))
}

fn missing_node(id: &str) -> PathPlannerError {
    PathPlannerError::MissingNode { id: id.to_string() }
}

/// Every graph node at +inf except start at 0
pub(crate) fn initial_costs(graph: &Graph, start: &str) -> FxIndexMap<NodeId, f64> {
    let mut costs: FxIndexMap<NodeId, f64> = graph
        .nodes()
        .map(|node| (node.id.clone(), f64::INFINITY))
        .collect();
    costs.insert(start.to_string(), 0.0);
    costs
}

/// Rebuild the path (if any), price it from the graph and close the trace
pub(crate) fn finish_search(graph: &Graph, start: &str, goal: &str, mut outcome: SearchOutcome, trace: &mut EventTrace) -> SearchOutcome {

    // Unreachable is a normal result, not an error
    if start == goal || outcome.predecessors.contains_key(goal) {
        outcome.path = shortest_path(&outcome.predecessors, start, goal);
    }
    outcome.distance = outcome.path.as_deref().map(|path| path_distance(graph, path));

    match (&outcome.path, outcome.distance) {
        (Some(path), Some(distance)) => trace.record(
            Level::Summary,
            format!("path found: {} ({distance:.1} m)", path.join(" -> ")),
            Some(json!({ "path": path, "distance": distance })),
        ),
        _ => trace.record(
            Level::Summary,
            format!("no path from {start} to {goal}"),
            Some(json!({ "path": null, "distance": null })),
        ),
    }

    tracing::debug!(
        start,
        goal,
        visited = outcome.visited.len(),
        reachable = outcome.is_reachable(),
        "search finished"
    );

    outcome
}
