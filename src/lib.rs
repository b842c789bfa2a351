//! Shortest-path search over graphs of geographic points.
//!
//! A [`Graph`] holds nodes keyed by id with haversine-weighted undirected
//! edges. [`dijkstra`] and [`AStar`] search it and record every step into an
//! [`EventTrace`] that a viewer can replay or filter by [`Level`].
//!
//! ```
//! use geo_navigate::{Graph, EventTrace, dijkstra};
//!
//! let mut graph = Graph::new();
//! graph.add_node("A", 0.0, 0.0);
//! graph.add_node("B", 0.0, 1.0);
//! graph.add_edge("A", "B", None).unwrap();
//!
//! let mut trace = EventTrace::new();
//! let outcome = dijkstra(&graph, "A", "B", true, &mut trace).unwrap();
//! assert_eq!(outcome.path, Some(vec!["A".to_string(), "B".to_string()]));
//! ```

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod trace;

pub use collections::{PriorityQueue, QueueEntry};
pub use config::{Algorithm, SearchConfig, run_search};
pub use errors::{GraphError, PathPlannerError};
pub use geometry::{Coordinate, haversine};
pub use graph::{Edge, Graph, Node, NodeId};
pub use graph_algos::SearchOutcome;
pub use graph_algos::a_star::AStar;
pub use graph_algos::dijkstra::dijkstra;
pub use trace::{Event, EventTrace, Level};
