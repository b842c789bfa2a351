use thiserror::Error;

use crate::graph::NodeId;


/// Errors raised by the path planning algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathPlannerError {
    /// Start or goal is not in the graph - raised before any search work
    #[error("node {id} is not in the graph")]
    MissingNode { id: NodeId },
}

/// Errors raised while mutating a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edge endpoint does not exist
    #[error("edge endpoint {id} is not in the graph")]
    InvalidReference { id: NodeId },
}
