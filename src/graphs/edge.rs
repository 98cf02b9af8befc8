use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};
use crate::error::GraphError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

/// A directed edge. The fields are public so that loaders can build edges
/// without the weight check; `WeightedEdge::new` is the checked way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> Result<WeightedEdge, GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidWeight { tail, head, weight });
        }

        Ok(WeightedEdge { tail, head, weight })
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn unweighted(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// An entry of an adjacency list; the tail is the list's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
