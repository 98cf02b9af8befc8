use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total distance associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(source: Vertex, target: Vertex) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
