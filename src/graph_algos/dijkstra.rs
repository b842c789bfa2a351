use crate::collections::{FxIndexMap, PriorityQueue, QueueEntry};
use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use crate::trace::{EventTrace, Level};
use super::{SearchOutcome, check_endpoints, finish_search, initial_costs};

use rustc_hash::FxHashSet;
use serde_json::json;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start node, settle nodes in cost order until the goal is settled
/// - trace is cleared and then filled with this run's events
/// - emit_detail adds per-edge checks and stale pops to the trace
/// - an unreachable goal is Ok with path None
pub fn dijkstra(graph: &Graph, start: &str, goal: &str, emit_detail: bool, trace: &mut EventTrace) -> Result<SearchOutcome, PathPlannerError> {

    check_endpoints(graph, start, goal)?;

    trace.clear();
    trace.record(
        Level::Summary,
        format!("Dijkstra from {start} to {goal}"),
        Some(json!({ "start": start, "goal": goal })),
    );

    // Best known distance from start, +inf until reached
    let mut distances = initial_costs(graph, start);
    let mut predecessors: FxIndexMap<NodeId, NodeId> = FxIndexMap::default();

    // Settled nodes - distance is final, later queue entries for them are stale
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    let mut visited: Vec<NodeId> = Vec::new();

    // Nodes to visit, a node may be queued more than once
    let mut nodes_to_visit: PriorityQueue<NodeId, f64> = PriorityQueue::new();
    nodes_to_visit.push(start.to_string(), 0.0);

    while let Some(QueueEntry { item: current, priority }) = nodes_to_visit.pop() {

        // A cheaper entry for this node was already processed
        if settled.contains(&current) {
            if emit_detail {
                trace.record(
                    Level::Detail,
                    format!("stale pop {current} ({priority:.1} m)"),
                    Some(json!({ "node": current, "priority": priority })),
                );
            }
            continue;
        }

        let current_distance = distances.get(&current).copied().unwrap_or(f64::INFINITY);
        settled.insert(current.clone());
        visited.push(current.clone());
        trace.record(
            Level::Summary,
            format!("settled {current} at {current_distance:.1} m"),
            Some(json!({ "node": current, "distance": current_distance })),
        );

        // Early exit, nothing beyond the goal is explored
        if current == goal {
            break;
        }

        for edge in graph.neighbors(&current) {
            let alt = current_distance + edge.weight;
            let known = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);

            // Record the attempt whether or not it improves anything
            if emit_detail {
                trace.record(
                    Level::Detail,
                    format!("check {current} -> {}: {alt:.1} vs {known:.1}", edge.to),
                    Some(json!({
                        "from": current,
                        "to": edge.to,
                        "weight": edge.weight,
                        "alt": alt,
                        "current": known,
                    })),
                );
            }

            if alt < known {
                distances.insert(edge.to.clone(), alt);
                predecessors.insert(edge.to.clone(), current.clone());
                nodes_to_visit.push(edge.to.clone(), alt);
                trace.record(
                    Level::Summary,
                    format!("update {} = {alt:.1} m via {current}", edge.to),
                    Some(json!({ "node": edge.to, "via": current, "distance": alt })),
                );
            }
        }
    }

    let outcome = SearchOutcome {
        visited,
        costs: distances,
        predecessors,
        ..SearchOutcome::default()
    };

    Ok(finish_search(graph, start, goal, outcome, trace))
}
