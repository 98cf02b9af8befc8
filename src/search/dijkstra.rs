use std::{hash::Hash, ops::ControlFlow};

use ahash::{HashMap, HashMapExt};
use tracing::{debug, instrument};

use super::{
    collections::{distance_table::DistanceTable, frontier::Frontier, visited::VisitedSet},
    options::SearchOptions,
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::graphs::{labeled_graph::LabeledGraph, Distance, Graph, Vertex};

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Vertices whose distance was finalized. At most one per vertex.
    pub settled: u32,
    /// Frontier entries that were skipped because their vertex was already
    /// settled.
    pub stale_pops: u32,
    /// Successful distance decreases. Bounded by the number of edges.
    pub relaxations: u32,
}

/// Runs Dijkstra from `source`, calling `on_settle` whenever a vertex is
/// finalized. The search stops early once `on_settle` breaks.
///
/// `table`, `visited` and `frontier` must be empty. A `source` that is not a
/// vertex of `graph` reaches nothing. Distances saturate at `Distance::MAX`,
/// which is a regular distance and not a marker for unreachable vertices.
fn settle_until(
    graph: &dyn Graph,
    table: &mut dyn DistanceTable,
    visited: &mut dyn VisitedSet,
    frontier: &mut dyn Frontier,
    source: Vertex,
    mut on_settle: impl FnMut(Vertex, Distance) -> ControlFlow<()>,
) -> SearchStatistics {
    let mut statistics = SearchStatistics::default();

    if source >= graph.number_of_vertices() {
        return statistics;
    }

    table.set_distance(source, 0);
    frontier.insert(0, source);

    while let Some(entry) = frontier.pop() {
        let tail = entry.vertex;
        if visited.visit(tail) {
            statistics.stale_pops += 1;
            continue;
        }
        statistics.settled += 1;

        if on_settle(tail, entry.distance).is_break() {
            break;
        }

        for edge in graph.out_edges(tail) {
            // settled distances are final, even if a (forbidden) negative
            // edge would offer something shorter
            if visited.is_visited(edge.head) {
                continue;
            }

            // sums beyond the largest distance are clamped to it
            let alternative_distance_head = entry.distance.saturating_add(edge.weight);
            if table
                .get_distance(edge.head)
                .map_or(true, |current| alternative_distance_head < current)
            {
                table.set_distance(edge.head, alternative_distance_head);
                table.set_predecessor(edge.head, tail);
                frontier.insert(alternative_distance_head, edge.head);
                statistics.relaxations += 1;
            }
        }
    }

    statistics
}

/// Computes the distances from `source` to every reachable vertex.
pub fn dijkstra_one_to_all(
    graph: &dyn Graph,
    table: &mut dyn DistanceTable,
    visited: &mut dyn VisitedSet,
    frontier: &mut dyn Frontier,
    source: Vertex,
) -> SearchStatistics {
    settle_until(graph, table, visited, frontier, source, |_, _| {
        ControlFlow::Continue(())
    })
}

/// Like [`dijkstra_one_to_all`], but stops as soon as `target` is settled.
/// Only the distance of `target` (and of vertices settled before it) is final
/// afterwards.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    table: &mut dyn DistanceTable,
    visited: &mut dyn VisitedSet,
    frontier: &mut dyn Frontier,
    source: Vertex,
    target: Vertex,
) -> SearchStatistics {
    settle_until(graph, table, visited, frontier, source, |vertex, _| {
        if vertex == target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// Result of a single source search. Unreachable vertices have no distance.
pub struct ShortestPathTree {
    source: Vertex,
    number_of_vertices: u32,
    table: Box<dyn DistanceTable>,
    statistics: SearchStatistics,
}

impl ShortestPathTree {
    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        self.table.get_distance(vertex)
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    /// A shortest path from the source to `target`. Which of several equally
    /// short paths is returned is unspecified.
    pub fn path(&self, target: Vertex) -> Option<Path> {
        self.table.get_path(target)
    }

    /// Reached vertices with their distances, ordered by vertex.
    pub fn reachable(&self) -> Vec<(Vertex, Distance)> {
        self.table.reached()
    }

    /// One entry per vertex of the graph, `None` for unreachable vertices.
    pub fn distances(&self) -> Vec<Option<Distance>> {
        let mut distances = vec![None; self.number_of_vertices as usize];
        for (vertex, distance) in self.table.reached() {
            if let Some(slot) = distances.get_mut(vertex as usize) {
                *slot = Some(distance);
            }
        }
        distances
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }
}

/// Single source shortest path search over a borrowed graph. Every call owns
/// fresh collections, so the engine itself keeps no state between calls.
#[derive(Clone, Copy)]
pub struct ShortestPathEngine<'a> {
    graph: &'a dyn Graph,
    options: SearchOptions,
}

impl<'a> ShortestPathEngine<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Self::with_options(graph, SearchOptions::default())
    }

    pub fn with_options(graph: &'a dyn Graph, options: SearchOptions) -> Self {
        ShortestPathEngine { graph, options }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Distances from `source` to all vertices.
    #[instrument(skip(self), fields(vertices = self.graph.number_of_vertices(), frontier = ?self.options.frontier))]
    pub fn run(&self, source: Vertex) -> ShortestPathTree {
        self.search(source, |_, _| ControlFlow::Continue(()))
    }

    /// Distances from `source`, stopping once `target` is settled.
    #[instrument(skip(self), fields(frontier = ?self.options.frontier))]
    pub fn run_to(&self, source: Vertex, target: Vertex) -> ShortestPathTree {
        self.search(source, |vertex, _| {
            if vertex == target {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Runs a full search and also returns the vertices in the order they
    /// were settled, together with the distance they were settled at. The
    /// position of a vertex in this order is its Dijkstra rank.
    pub fn settle_order(&self, source: Vertex) -> (Vec<(Vertex, Distance)>, ShortestPathTree) {
        let mut order = Vec::new();
        let tree = self.search(source, |vertex, distance| {
            order.push((vertex, distance));
            ControlFlow::Continue(())
        });
        (order, tree)
    }

    fn search(
        &self,
        source: Vertex,
        on_settle: impl FnMut(Vertex, Distance) -> ControlFlow<()>,
    ) -> ShortestPathTree {
        let mut table = self.options.table.build(self.graph);
        let mut visited = self.options.visited.build(self.graph);
        let mut frontier = self.options.frontier.build();

        let statistics = settle_until(
            self.graph,
            table.as_mut(),
            visited.as_mut(),
            frontier.as_mut(),
            source,
            on_settle,
        );
        debug!(
            source,
            settled = statistics.settled,
            stale_pops = statistics.stale_pops,
            relaxations = statistics.relaxations,
            "search finished"
        );

        ShortestPathTree {
            source,
            number_of_vertices: self.graph.number_of_vertices(),
            table,
            statistics,
        }
    }
}

/// Distances from the vertex labeled `source` to every reachable label.
/// Unreachable labels are absent; an unknown `source` reaches nothing.
pub fn labeled_distances<L, G>(
    graph: &LabeledGraph<L, G>,
    source: &L,
    options: SearchOptions,
) -> HashMap<L, Distance>
where
    L: Hash + Eq + Clone,
    G: Graph,
{
    let Some(source) = graph.vertex(source) else {
        return HashMap::new();
    };

    ShortestPathEngine::with_options(graph.graph(), options)
        .run(source)
        .reachable()
        .into_iter()
        .filter_map(|(vertex, distance)| Some((graph.label(vertex)?.clone(), distance)))
        .collect()
}

/// Single pair queries answered by a fresh search each time.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    engine: ShortestPathEngine<'a>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Dijkstra {
            engine: ShortestPathEngine::new(graph),
        }
    }

    pub fn with_options(graph: &'a dyn Graph, options: SearchOptions) -> Self {
        Dijkstra {
            engine: ShortestPathEngine::with_options(graph, options),
        }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Option<Path> {
        self.engine
            .run_to(request.source, request.target)
            .path(request.target)
    }

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Option<Distance> {
        self.engine
            .run_to(request.source, request.target)
            .distance(request.target)
    }

    fn number_of_vertices(&self) -> u32 {
        self.engine.graph.number_of_vertices()
    }
}
