use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{adjacency_vec_graph::AdjacencyVecGraph, Direction, Graph, Vertex, Weight};
use crate::error::GraphError;

/// Bidirectional mapping between caller supplied labels and dense vertex ids.
/// Ids are handed out in first-seen order.
#[derive(Clone, Debug)]
pub struct VertexMapper<L> {
    label_to_vertex: HashMap<L, Vertex>,
    vertex_to_label: Vec<L>,
}

impl<L: Hash + Eq + Clone> Default for VertexMapper<L> {
    fn default() -> Self {
        VertexMapper {
            label_to_vertex: HashMap::new(),
            vertex_to_label: Vec::new(),
        }
    }
}

impl<L: Hash + Eq + Clone> VertexMapper<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `label`, assigning the next free id if it is new.
    pub fn get_or_insert(&mut self, label: &L) -> Vertex {
        if let Some(&vertex) = self.label_to_vertex.get(label) {
            return vertex;
        }

        let vertex = self.vertex_to_label.len() as Vertex;
        self.label_to_vertex.insert(label.clone(), vertex);
        self.vertex_to_label.push(label.clone());
        vertex
    }

    pub fn vertex(&self, label: &L) -> Option<Vertex> {
        self.label_to_vertex.get(label).copied()
    }

    pub fn label(&self, vertex: Vertex) -> Option<&L> {
        self.vertex_to_label.get(vertex as usize)
    }

    pub fn len(&self) -> usize {
        self.vertex_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_to_label.is_empty()
    }
}

/// A graph whose vertices are addressed by labels such as strings.
pub struct LabeledGraph<L, G = AdjacencyVecGraph> {
    mapper: VertexMapper<L>,
    graph: G,
}

impl<L: Hash + Eq + Clone> Default for LabeledGraph<L, AdjacencyVecGraph> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Hash + Eq + Clone> LabeledGraph<L, AdjacencyVecGraph> {
    pub fn new() -> Self {
        Self::with_graph(AdjacencyVecGraph::new())
    }
}

impl<L: Hash + Eq + Clone, G: Graph> LabeledGraph<L, G> {
    pub fn with_graph(graph: G) -> Self {
        LabeledGraph {
            mapper: VertexMapper::new(),
            graph,
        }
    }

    pub fn add_vertex(&mut self, label: &L) -> Vertex {
        let vertex = self.mapper.get_or_insert(label);
        self.graph.add_vertex(vertex);
        vertex
    }

    /// Adds an edge between two labels. Labels are registered even when the
    /// weight is rejected.
    pub fn add_edge(
        &mut self,
        tail: &L,
        head: &L,
        weight: Weight,
        direction: Direction,
    ) -> Result<(), GraphError> {
        let tail = self.add_vertex(tail);
        let head = self.add_vertex(head);
        self.graph.add_edge(tail, head, weight, direction)
    }

    /// The neighbors of `label` as `(label, weight)` pairs.
    pub fn neighbors<'a>(&'a self, label: &L) -> impl Iterator<Item = (&'a L, Weight)> + 'a {
        let edges = self.vertex(label).map(|vertex| self.graph.out_edges(vertex));
        edges.into_iter().flatten().filter_map(move |edge| {
            self.mapper
                .label(edge.head)
                .map(|head_label| (head_label, edge.weight))
        })
    }

    pub fn vertex(&self, label: &L) -> Option<Vertex> {
        self.mapper.vertex(label)
    }

    pub fn label(&self, vertex: Vertex) -> Option<&L> {
        self.mapper.label(vertex)
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_get_dense_ids_in_first_seen_order() {
        let mut mapper = VertexMapper::new();
        assert_eq!(mapper.get_or_insert(&"b"), 0);
        assert_eq!(mapper.get_or_insert(&"a"), 1);
        assert_eq!(mapper.get_or_insert(&"b"), 0);
        assert_eq!(mapper.label(1), Some(&"a"));
        assert_eq!(mapper.vertex(&"c"), None);
        assert_eq!(mapper.len(), 2);
    }

    #[test]
    fn neighbors_are_reported_by_label() {
        let mut graph = LabeledGraph::new();
        graph
            .add_edge(&"A".to_string(), &"B".to_string(), 1, Direction::Directed)
            .unwrap();
        graph
            .add_edge(&"A".to_string(), &"C".to_string(), 5, Direction::Directed)
            .unwrap();

        let neighbors: Vec<_> = graph
            .neighbors(&"A".to_string())
            .map(|(label, weight)| (label.clone(), weight))
            .collect();
        assert_eq!(neighbors, vec![("B".to_string(), 1), ("C".to_string(), 5)]);
        assert_eq!(graph.neighbors(&"C".to_string()).count(), 0);
        assert_eq!(graph.neighbors(&"Z".to_string()).count(), 0);
    }

    #[test]
    fn isolated_vertices_are_part_of_the_graph() {
        let mut graph: LabeledGraph<&str> = LabeledGraph::new();
        graph.add_vertex(&"A");
        graph.add_vertex(&"B");
        assert_eq!(graph.graph().number_of_vertices(), 2);
        assert_eq!(graph.graph().number_of_edges(), 0);
    }
}
