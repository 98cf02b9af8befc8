use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use super::{Distance, Graph, WeightedEdge};
use crate::{
    search::{
        dijkstra::Dijkstra,
        path::{Path, ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
    utility::get_progressbar_long_jobs,
};

/// Checks a path returned for `validation.request` against the graph and
/// the expected distance.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let (path, distance) = match (path, validation.distance) {
        (Some(path), Some(distance)) => (path, distance),
        (None, None) => return Ok(()),
        (Some(_), None) => return Err("a path was found where there should be none".to_string()),
        (None, Some(_)) => return Err("no path is found but there should be one".to_string()),
    };

    if path.distance != distance {
        return Err(format!(
            "wrong path distance {}, expected {}",
            path.distance, distance
        ));
    }

    // Ensure fist and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&validation.request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // Check that consecutive vertices are connected and sum up the lightest
    // connecting edges, saturating like the search does.
    let mut true_distance: Distance = 0;
    for pair in path.vertices.windows(2) {
        let (tail, head) = (pair[0], pair[1]);
        let Some(weight) = graph
            .out_edges(tail)
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min()
        else {
            return Err(format!("no edge between {} and {} found", tail, head));
        };
        true_distance = true_distance.saturating_add(weight);
    }

    if true_distance != distance {
        return Err(format!(
            "path edges sum up to {}, expected {}",
            true_distance, distance
        ));
    }

    Ok(())
}

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .flat_map(|vertex| graph.out_edges(vertex))
        .collect()
}

pub fn change_representation<T>(graph: &dyn Graph) -> T
where
    T: Graph + Default,
{
    let mut new_graph = T::default();
    graph
        .vertices()
        .for_each(|vertex| new_graph.add_vertex(vertex));
    new_graph.set_edges(&all_edges(graph));
    new_graph
}

/// Generates `number_of_tests` random source/target pairs and answers them
/// with Dijkstra. The searches run in parallel, each on its own thread-local
/// collections.
pub fn generate_random_pair_test_cases(
    graph: &dyn Graph,
    number_of_tests: u32,
    seed: u64,
) -> Vec<ShortestPathTestCase> {
    if graph.number_of_vertices() == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let requests: Vec<_> = (0..number_of_tests)
        .map(|_| {
            ShortestPathRequest::new(
                rng.gen_range(0..graph.number_of_vertices()),
                rng.gen_range(0..graph.number_of_vertices()),
            )
        })
        .collect();

    let dijkstra = Dijkstra::new(graph);
    requests
        .into_par_iter()
        .progress_with(get_progressbar_long_jobs(
            "Generating random pair test cases",
            number_of_tests as u64,
        ))
        .map(|request| ShortestPathTestCase {
            request,
            distance: dijkstra.shortest_path_distance(&request),
        })
        .collect()
}
