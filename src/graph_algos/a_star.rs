use crate::collections::{FxIndexMap, PriorityQueue, QueueEntry};
use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use crate::trace::{EventTrace, Level};
use super::{SearchOutcome, check_endpoints, finish_search, initial_costs};

use serde_json::json;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Heuristic is the great-circle distance to the goal, which never
/// overestimates while edge weights are the haversine distances of their endpoints
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {
    pub emit_detail: bool, // record per-edge checks in the trace
}

impl AStar{

    pub fn new(emit_detail: bool) -> Self {
        Self { emit_detail }
    }

    /// From start node, expand by lowest f = g + h until the goal is popped
    /// There is no closed set: every pop is expanded, a node queued twice is
    /// expanded twice, and only strictly cheaper tentative costs are accepted
    pub fn plan(&self, graph: &Graph, start: &str, goal: &str, trace: &mut EventTrace) -> Result<SearchOutcome, PathPlannerError> {

        let (start_node, goal_node) = check_endpoints(graph, start, goal)?;
        let goal_coordinate = goal_node.coordinate();

        // h(n), nodes are known to exist but fall back to 0 (Dijkstra) anyway
        let heuristic = |id: &str| {
            graph
                .coordinate(id)
                .map(|c| c.distance_to(&goal_coordinate))
                .unwrap_or(0.0)
        };

        trace.clear();
        trace.record(
            Level::Summary,
            format!("A* from {start} to {goal}"),
            Some(json!({ "start": start, "goal": goal })),
        );

        // g: confirmed cost from start, f: g + h
        let mut g_score = initial_costs(graph, start);
        let mut f_score: FxIndexMap<NodeId, f64> = g_score
            .keys()
            .map(|id| (id.clone(), f64::INFINITY))
            .collect();
        let start_f = start_node.coordinate().distance_to(&goal_coordinate);
        f_score.insert(start.to_string(), start_f);

        let mut predecessors: FxIndexMap<NodeId, NodeId> = FxIndexMap::default();
        let mut visited: Vec<NodeId> = Vec::new();

        // Open List
        // Nodes that need to be evaluated, sorted by f_score
        let mut open_list: PriorityQueue<NodeId, f64> = PriorityQueue::new();
        open_list.push(start.to_string(), start_f);

        while let Some(QueueEntry { item: current, .. }) = open_list.pop() {

            let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
            let current_f = f_score.get(&current).copied().unwrap_or(f64::INFINITY);
            visited.push(current.clone());
            trace.record(
                Level::Summary,
                format!("expand {current} g={current_g:.1} m f={current_f:.1} m"),
                Some(json!({ "node": current, "g": current_g, "f": current_f })),
            );

            // Check if we've reached the goal
            if current == goal {
                break;
            }

            for edge in graph.neighbors(&current) {

                // new cost to reach this node = edge cost + node cost
                let tentative = current_g + edge.weight;
                let f_tentative = tentative + heuristic(edge.to.as_str());
                let known = g_score.get(&edge.to).copied().unwrap_or(f64::INFINITY);

                if self.emit_detail {
                    trace.record(
                        Level::Detail,
                        format!("check {current} -> {}: g {tentative:.1} vs {known:.1}, f {f_tentative:.1}", edge.to),
                        Some(json!({
                            "from": current,
                            "to": edge.to,
                            "weight": edge.weight,
                            "tentative": tentative,
                            "f_tentative": f_tentative,
                            "current": known,
                        })),
                    );
                }

                // Only queue the neighbor when the path to it is strictly cheaper
                if tentative < known {
                    predecessors.insert(edge.to.clone(), current.clone());
                    g_score.insert(edge.to.clone(), tentative);
                    f_score.insert(edge.to.clone(), f_tentative);
                    open_list.push(edge.to.clone(), f_tentative);
                    trace.record(
                        Level::Summary,
                        format!("update {} g={tentative:.1} m f={f_tentative:.1} m via {current}", edge.to),
                        Some(json!({ "node": edge.to, "via": current, "distance": tentative, "f": f_tentative })),
                    );
                }
            }
        }

        let outcome = SearchOutcome {
            visited,
            costs: g_score,
            estimates: f_score,
            predecessors,
            ..SearchOutcome::default()
        };

        Ok(finish_search(graph, start, goal, outcome, trace))
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::dijkstra::dijkstra;

    fn ids(nodes: &[&str]) -> Vec<NodeId> {
        nodes.iter().map(|s| s.to_string()).collect()
    }

    // A(0,0) - B(0,1) - C(0,2) along the equator
    fn create_line_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("A", 0.0, 0.0);
        graph.add_node("B", 0.0, 1.0);
        graph.add_node("C", 0.0, 2.0);
        graph.add_edge("A", "B", None).unwrap();
        graph.add_edge("B", "C", None).unwrap();
        graph
    }

    #[test]
    fn test_a_star_line() {
        let graph = create_line_graph();
        let mut trace = EventTrace::new();

        let outcome = AStar::new(false).plan(&graph, "A", "C", &mut trace).unwrap();

        assert_eq!(outcome.path, Some(ids(&["A", "B", "C"])));
        assert_eq!(outcome.visited, ids(&["A", "B", "C"]));
        let distance = outcome.distance.unwrap();
        assert!((distance - 222_390.0).abs() < 1.0, "got {distance}");
        // f(start) = h(start)
        assert!((outcome.estimates["A"] - distance).abs() < 1e-3);
    }

    #[test]
    fn test_a_star_missing_node() {
        let graph = create_line_graph();
        let mut trace = EventTrace::new();

        let err = AStar::new(true).plan(&graph, "A", "D", &mut trace).unwrap_err();
        assert_eq!(err, PathPlannerError::MissingNode { id: "D".to_string() });
        assert!(trace.is_empty());
    }

    #[test]
    fn test_a_star_unreachable_goal() {
        let mut graph = create_line_graph();
        graph.add_node("D", 0.0, 3.0);
        let mut trace = EventTrace::new();

        let outcome = AStar::new(false).plan(&graph, "A", "D", &mut trace).unwrap();

        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited, ids(&["A", "B", "C"]));
        assert!(outcome.costs["C"].is_finite());
        assert!(outcome.costs["D"].is_infinite());
    }

    #[test]
    fn test_a_star_start_is_goal() {
        let graph = create_line_graph();
        let mut trace = EventTrace::new();

        let outcome = AStar::new(true).plan(&graph, "C", "C", &mut trace).unwrap();

        assert_eq!(outcome.path, Some(ids(&["C"])));
        assert_eq!(outcome.distance, Some(0.0));
        assert_eq!(outcome.visited, ids(&["C"]));
    }

    #[test]
    fn test_a_star_heuristic_skips_wrong_direction() {
        // B sits west of A, the goal C sits east; Dijkstra settles B first
        let mut graph = Graph::new();
        graph.add_node("A", 0.0, 0.0);
        graph.add_node("B", 0.0, -0.5);
        graph.add_node("C", 0.0, 1.0);
        graph.add_edge("A", "B", None).unwrap();
        graph.add_edge("A", "C", None).unwrap();

        let a_star = AStar::new(false).plan(&graph, "A", "C", &mut EventTrace::new()).unwrap();
        let plain = dijkstra(&graph, "A", "C", false, &mut EventTrace::new()).unwrap();

        assert_eq!(a_star.visited, ids(&["A", "C"]));
        assert_eq!(plain.visited, ids(&["A", "B", "C"]));
        assert_eq!(a_star.distance, plain.distance);
    }

    #[test]
    fn test_a_star_reexpands_without_closed_set() {
        // All nodes share a coordinate so h = 0 and weights are explicit
        // B is queued at 10 then at 2, both entries are expanded
        let mut graph = Graph::new();
        for id in ["A", "B", "C", "D"] {
            graph.add_node(id, 0.0, 0.0);
        }
        graph.add_edge("A", "B", Some(10.0)).unwrap();
        graph.add_edge("A", "C", Some(1.0)).unwrap();
        graph.add_edge("C", "B", Some(1.0)).unwrap();
        graph.add_edge("B", "D", Some(100.0)).unwrap();
        let mut trace = EventTrace::new();

        let outcome = AStar::new(true).plan(&graph, "A", "D", &mut trace).unwrap();

        assert_eq!(outcome.visited, ids(&["A", "C", "B", "B", "D"]));
        assert_eq!(outcome.path, Some(ids(&["A", "C", "B", "D"])));
        assert_eq!(outcome.distance, Some(102.0));
        // second expansion of B improves nothing, D is queued once
        let updates_d = trace.iter().filter(|e| e.text.starts_with("update D")).count();
        assert_eq!(updates_d, 1);
        assert!(trace.iter().all(|e| !e.text.starts_with("stale")));
    }

    #[test]
    fn test_a_star_detail_carries_f() {
        let graph = create_line_graph();
        let mut trace = EventTrace::new();

        AStar::new(true).plan(&graph, "A", "C", &mut trace).unwrap();

        let first_check = trace.chronological().find(|e| e.level.is_detail()).unwrap();
        let meta = first_check.meta.as_ref().unwrap();
        assert_eq!(meta["from"], "A");
        assert_eq!(meta["to"], "B");
        let tentative = meta["tentative"].as_f64().unwrap();
        let f_tentative = meta["f_tentative"].as_f64().unwrap();
        assert!(f_tentative > tentative);
        assert!(meta["current"].is_null()); // +inf serializes as null
    }
}
