use serde::{Deserialize, Serialize};

use super::collections::{distance_table::TableKind, frontier::FrontierKind, visited::VisitedKind};

/// Selects the collections a search is run with. Every combination computes
/// the same distances; they differ in speed and memory use only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub frontier: FrontierKind,
    #[serde(default)]
    pub table: TableKind,
    #[serde(default)]
    pub visited: VisitedKind,
}

impl SearchOptions {
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_table(mut self, table: TableKind) -> Self {
        self.table = table;
        self
    }

    pub fn with_visited(mut self, visited: VisitedKind) -> Self {
        self.visited = visited;
        self
    }
}
