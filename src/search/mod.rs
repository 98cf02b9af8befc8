use path::{Path, ShortestPathRequest};

use crate::graphs::Distance;

pub mod brute_force;
pub mod collections;
pub mod dijkstra;
pub mod options;
pub mod path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Option<Path>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Option<Distance>;

    fn number_of_vertices(&self) -> u32;
}
