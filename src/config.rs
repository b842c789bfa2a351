use serde::{Deserialize, Serialize};

use crate::errors::PathPlannerError;
use crate::graph::Graph;
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::dijkstra::dijkstra;
use crate::graph_algos::SearchOutcome;
use crate::trace::EventTrace;


/// Search algorithm to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    #[serde(alias = "a_star", alias = "a*")]
    AStar,
}


/// Options for a single search run, missing fields take their defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub emit_detail: bool, // per-edge checks and stale pops in the trace
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, emit_detail: bool) -> Self {
        Self { algorithm, emit_detail }
    }
}


/// Run the configured algorithm from start to goal
pub fn run_search(graph: &Graph, start: &str, goal: &str, config: &SearchConfig, trace: &mut EventTrace) -> Result<SearchOutcome, PathPlannerError> {
    match config.algorithm {
        Algorithm::Dijkstra => dijkstra(graph, start, goal, config.emit_detail, trace),
        Algorithm::AStar => AStar::new(config.emit_detail).plan(graph, start, goal, trace),
    }
}
