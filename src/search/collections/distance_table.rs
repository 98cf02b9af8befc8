use ahash::{HashMap, HashMapExt};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{Distance, Graph, Vertex},
    search::path::Path,
};

/// Best known distances and predecessors of a search.
///
/// A vertex without a distance has not been reached, i.e. its distance is
/// infinite.
pub trait DistanceTable {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the distance to a given vertex, `None` if it is unreached.
    fn get_distance(&self, vertex: Vertex) -> Option<Distance>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// All reached vertices with their distances, ordered by vertex.
    fn reached(&self) -> Vec<(Vertex, Distance)>;

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Dense table, one slot per vertex of the graph.
#[derive(Clone, Debug)]
pub struct DistanceTableVec {
    predecessors: Vec<Option<Vertex>>,
    distances: Vec<Option<Distance>>,
}

impl DistanceTableVec {
    pub fn new(graph: &dyn Graph) -> Self {
        Self::with_vertices(graph.number_of_vertices())
    }

    pub fn with_vertices(number_of_vertices: u32) -> Self {
        DistanceTableVec {
            predecessors: vec![None; number_of_vertices as usize],
            distances: vec![None; number_of_vertices as usize],
        }
    }

    /// Distances of all vertices, `None` for unreached ones.
    pub fn distances(&self) -> Vec<Option<Distance>> {
        self.distances.clone()
    }

    fn ensure_vertex(&mut self, vertex: Vertex) {
        if vertex as usize >= self.distances.len() {
            self.predecessors.resize(vertex as usize + 1, None);
            self.distances.resize(vertex as usize + 1, None);
        }
    }
}

impl DistanceTable for DistanceTableVec {
    fn clear(&mut self) {
        self.predecessors.fill(None);
        self.distances.fill(None);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        *self.predecessors.get(vertex as usize)?
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.ensure_vertex(vertex);
        self.predecessors[vertex as usize] = Some(predecessor);
    }

    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        *self.distances.get(vertex as usize)?
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.ensure_vertex(vertex);
        self.distances[vertex as usize] = Some(distance);
    }

    fn reached(&self) -> Vec<(Vertex, Distance)> {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(vertex, distance)| Some((vertex as Vertex, (*distance)?)))
            .collect()
    }
}

/// Sparse table for searches that only touch a small part of a large graph.
#[derive(Clone, Debug, Default)]
pub struct DistanceTableHashMap {
    predecessors: HashMap<Vertex, Vertex>,
    distances: HashMap<Vertex, Distance>,
}

impl DistanceTableHashMap {
    pub fn new() -> Self {
        DistanceTableHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DistanceTable for DistanceTableHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }

    fn reached(&self) -> Vec<(Vertex, Distance)> {
        let mut reached: Vec<_> = self
            .distances
            .iter()
            .map(|(&vertex, &distance)| (vertex, distance))
            .collect();
        reached.sort_unstable();
        reached
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TableKind {
    #[default]
    Vec,
    HashMap,
}

impl TableKind {
    pub fn build(&self, graph: &dyn Graph) -> Box<dyn DistanceTable> {
        match self {
            TableKind::Vec => Box::new(DistanceTableVec::new(graph)),
            TableKind::HashMap => Box::new(DistanceTableHashMap::new()),
        }
    }
}
