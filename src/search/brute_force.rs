use crate::graphs::{graph_functions::all_edges, Distance, Graph, Vertex};

/// Bellman-Ford: relaxes every edge until nothing changes, at most
/// `number_of_vertices - 1` rounds. Slow, but independent of any priority
/// order, which makes it a reference for checking searches.
pub fn bellman_ford_distances(graph: &dyn Graph, source: Vertex) -> Vec<Option<Distance>> {
    let mut distances = vec![None; graph.number_of_vertices() as usize];
    if source >= graph.number_of_vertices() {
        return distances;
    }
    distances[source as usize] = Some(0);

    let edges = all_edges(graph);
    for _ in 1..graph.number_of_vertices() {
        let mut changed = false;
        for edge in &edges {
            let Some(distance_tail) = distances[edge.tail as usize] else {
                continue;
            };
            let alternative = distance_tail.saturating_add(edge.weight);
            if distances[edge.head as usize].map_or(true, |current| alternative < current) {
                distances[edge.head as usize] = Some(alternative);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    distances
}
