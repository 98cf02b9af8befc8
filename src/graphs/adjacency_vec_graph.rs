use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::{Edge, Graph, TaillessEdge, Vertex, Weight, WeightedEdge};

/// Adjacency list graph. Edges are appended in insertion order and parallel
/// edges are kept.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdjacencyVecGraph {
    out_edges: Vec<Vec<TaillessEdge>>,
}

impl AdjacencyVecGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(number_of_vertices: u32) -> Self {
        AdjacencyVecGraph {
            out_edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> Self {
        let mut graph = AdjacencyVecGraph::new();
        graph.set_edges(edges);
        graph
    }

    fn ensure_vertex(&mut self, vertex: Vertex) {
        if vertex as usize >= self.out_edges.len() {
            self.out_edges.resize(vertex as usize + 1, Vec::new());
        }
    }
}

/// Iterates over one adjacency list, putting the tail back onto each edge.
struct OutEdgeIterator<'a> {
    source: Vertex,
    tailless_edge_iterator: Iter<'a, TaillessEdge>,
}

impl<'a> Iterator for OutEdgeIterator<'a> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.tailless_edge_iterator.next()?;
        Some(edge.set_tail(self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tailless_edge_iterator.size_hint()
    }
}

impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
    fn len(&self) -> usize {
        self.tailless_edge_iterator.len()
    }
}

impl Graph for AdjacencyVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        let tailless_edges: &[TaillessEdge] = self
            .out_edges
            .get(source as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator: tailless_edges.iter(),
        })
    }

    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight> {
        self.out_edges
            .get(edge.tail as usize)?
            .iter()
            .filter(|tailless_edge| tailless_edge.head == edge.head)
            .map(|tailless_edge| tailless_edge.weight)
            .min()
    }

    fn set_edge(&mut self, edge: &WeightedEdge) {
        self.ensure_vertex(edge.tail.max(edge.head));
        self.out_edges[edge.tail as usize].push(edge.tailless());
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        self.ensure_vertex(vertex);
    }
}
