use ahash::{HashSet, HashSetExt};
use clap::ValueEnum;
use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};

use crate::graphs::{Graph, Vertex};

/// Vertices whose distance is final.
pub trait VisitedSet {
    /// Marks `vertex` as visited and returns whether it already was.
    fn visit(&mut self, vertex: Vertex) -> bool;

    fn is_visited(&self, vertex: Vertex) -> bool;

    fn clear(&mut self);
}

pub struct VisitedVec {
    visited: Vec<bool>,
}

impl VisitedVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VisitedVec {
            visited: vec![false; graph.number_of_vertices() as usize],
        }
    }
}

impl VisitedSet for VisitedVec {
    fn visit(&mut self, vertex: Vertex) -> bool {
        if vertex as usize >= self.visited.len() {
            self.visited.resize(vertex as usize + 1, false);
        }
        std::mem::replace(&mut self.visited[vertex as usize], true)
    }

    fn is_visited(&self, vertex: Vertex) -> bool {
        self.visited.get(vertex as usize).copied().unwrap_or(false)
    }

    fn clear(&mut self) {
        self.visited.fill(false);
    }
}

pub struct VisitedBitSet {
    visited: FixedBitSet,
}

impl VisitedBitSet {
    pub fn new(graph: &dyn Graph) -> Self {
        VisitedBitSet {
            visited: FixedBitSet::with_capacity(graph.number_of_vertices() as usize),
        }
    }
}

impl VisitedSet for VisitedBitSet {
    fn visit(&mut self, vertex: Vertex) -> bool {
        self.visited.grow(vertex as usize + 1);
        self.visited.put(vertex as usize)
    }

    fn is_visited(&self, vertex: Vertex) -> bool {
        self.visited.contains(vertex as usize)
    }

    fn clear(&mut self) {
        self.visited.clear()
    }
}

#[derive(Default)]
pub struct VisitedHashSet {
    visited: HashSet<Vertex>,
}

impl VisitedHashSet {
    pub fn new() -> Self {
        VisitedHashSet {
            visited: HashSet::new(),
        }
    }
}

impl VisitedSet for VisitedHashSet {
    fn visit(&mut self, vertex: Vertex) -> bool {
        !self.visited.insert(vertex)
    }

    fn is_visited(&self, vertex: Vertex) -> bool {
        self.visited.contains(&vertex)
    }

    fn clear(&mut self) {
        self.visited.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum VisitedKind {
    Vec,
    #[default]
    BitSet,
    HashSet,
}

impl VisitedKind {
    pub fn build(&self, graph: &dyn Graph) -> Box<dyn VisitedSet> {
        match self {
            VisitedKind::Vec => Box::new(VisitedVec::new(graph)),
            VisitedKind::BitSet => Box::new(VisitedBitSet::new(graph)),
            VisitedKind::HashSet => Box::new(VisitedHashSet::new()),
        }
    }
}
