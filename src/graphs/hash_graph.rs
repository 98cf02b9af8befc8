use std::collections::hash_map::{
    Entry::{Occupied, Vacant},
    Iter,
};

use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use super::{graph_functions::all_edges, Edge, Graph, Vertex, Weight, WeightedEdge};

/// Graph that keeps only the lightest edge between each ordered pair of
/// vertices. Neighbor order is unspecified.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct HashGraph {
    pub out_edges: Vec<HashMap<Vertex, Weight>>,
}

impl HashGraph {
    pub fn new() -> Self {
        HashGraph {
            out_edges: Vec::new(),
        }
    }

    pub fn from_graph(graph: &dyn Graph) -> Self {
        Self::from_edges(&all_edges(graph))
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> HashGraph {
        let mut graph = HashGraph::new();
        graph.set_edges(edges);
        graph
    }

    fn ensure_vertex(&mut self, vertex: Vertex) {
        if vertex as usize >= self.out_edges.len() {
            self.out_edges.resize(vertex as usize + 1, HashMap::new());
        }
    }
}

fn keep_lighter(out_edges: &mut HashMap<Vertex, Weight>, head: Vertex, weight: Weight) {
    match out_edges.entry(head) {
        Occupied(mut o) => {
            let current_weight = o.get_mut();
            if weight < *current_weight {
                *current_weight = weight;
            }
        }
        Vacant(v) => {
            v.insert(weight);
        }
    }
}

struct OutEdgeIterator<'a> {
    source: Vertex,
    tailless_edge_iterator: Option<Iter<'a, Vertex, Weight>>,
}

impl<'a> Iterator for OutEdgeIterator<'a> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let (&head, &weight) = self.tailless_edge_iterator.as_mut()?.next()?;
        Some(WeightedEdge {
            tail: self.source,
            head,
            weight,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
    fn len(&self) -> usize {
        self.tailless_edge_iterator
            .as_ref()
            .map_or(0, ExactSizeIterator::len)
    }
}

impl Graph for HashGraph {
    fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(HashMap::len).sum::<usize>() as u32
    }

    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator: self.out_edges.get(source as usize).map(HashMap::iter),
        })
    }

    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight> {
        self.out_edges
            .get(edge.tail as usize)?
            .get(&edge.head)
            .copied()
    }

    fn set_edge(&mut self, edge: &WeightedEdge) {
        self.ensure_vertex(edge.tail.max(edge.head));
        keep_lighter(&mut self.out_edges[edge.tail as usize], edge.head, edge.weight);
    }

    fn set_edges(&mut self, edges: &[WeightedEdge]) {
        if let Some(max_vertex) = edges.iter().map(|edge| edge.tail.max(edge.head)).max() {
            self.ensure_vertex(max_vertex);
        }

        let edges_by_tail = edges
            .iter()
            .map(|edge| (edge.tail, edge.tailless()))
            .into_group_map();

        self.out_edges
            .par_iter_mut()
            .enumerate()
            .for_each(|(tail, out_edges)| {
                if let Some(tailless_edges) = edges_by_tail.get(&(tail as Vertex)) {
                    tailless_edges.iter().for_each(|tailless_edge| {
                        keep_lighter(out_edges, tailless_edge.head, tailless_edge.weight)
                    });
                }
            });
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        self.ensure_vertex(vertex);
    }
}
