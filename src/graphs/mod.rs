use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

pub mod adjacency_vec_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod hash_graph;
pub mod labeled_graph;

pub use edge::{Edge, TaillessEdge, WeightedEdge};

pub type Vertex = u32;
pub type Weight = i64;
pub type Distance = i64;

/// Whether `add_edge` inserts one arc or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Directed,
    Undirected,
}

/// An adjacency-list graph over dense vertex ids `0..number_of_vertices()`.
///
/// Graphs are built once and then only read by searches, which is why every
/// implementation has to be `Send + Sync`.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    /// The neighbors of `source` as `(head, weight)` pairs carried by
    /// `WeightedEdge`s. Empty for vertices without outgoing edges and for
    /// vertices the graph does not know about.
    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Weight of the lightest edge from `edge.tail` to `edge.head`.
    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight>;

    /// Inserts `edge` without checking its weight.
    fn set_edge(&mut self, edge: &WeightedEdge);

    fn set_edges(&mut self, edges: &[WeightedEdge]) {
        edges.iter().for_each(|edge| self.set_edge(edge));
    }

    /// Ensures `vertex` is part of the graph even if it has no edges.
    fn add_vertex(&mut self, vertex: Vertex);

    /// Adds the edge `tail -> head`, and `head -> tail` as well for
    /// undirected edges. Negative weights are rejected and leave the graph
    /// untouched.
    fn add_edge(
        &mut self,
        tail: Vertex,
        head: Vertex,
        weight: Weight,
        direction: Direction,
    ) -> Result<(), GraphError> {
        let edge = WeightedEdge::new(tail, head, weight)?;
        self.set_edge(&edge);
        if direction == Direction::Undirected {
            self.set_edge(&edge.reversed());
        }
        Ok(())
    }
}
