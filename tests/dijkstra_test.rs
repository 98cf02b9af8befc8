use clap::ValueEnum;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use relaxed_paths::{
    graphs::{
        adjacency_vec_graph::AdjacencyVecGraph, hash_graph::HashGraph,
        labeled_graph::LabeledGraph, Direction, Graph, WeightedEdge,
    },
    search::{
        brute_force::bellman_ford_distances,
        collections::{distance_table::TableKind, frontier::FrontierKind, visited::VisitedKind},
        dijkstra::{labeled_distances, ShortestPathEngine},
        options::SearchOptions,
    },
};

fn get_small_graph() -> AdjacencyVecGraph {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let edges = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ];

    let mut graph = AdjacencyVecGraph::new();
    for (tail, head, weight) in edges {
        graph
            .add_edge(tail, head, weight, Direction::Undirected)
            .unwrap();
    }
    graph
}

fn random_graph(rng: &mut StdRng, number_of_vertices: u32, number_of_edges: u32) -> AdjacencyVecGraph {
    let mut graph = AdjacencyVecGraph::with_vertices(number_of_vertices);
    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..20);
        graph
            .add_edge(tail, head, weight, Direction::Directed)
            .unwrap();
    }
    graph
}

fn all_options() -> Vec<SearchOptions> {
    FrontierKind::value_variants()
        .iter()
        .cartesian_product(TableKind::value_variants())
        .cartesian_product(VisitedKind::value_variants())
        .map(|((frontier, table), visited)| SearchOptions {
            frontier: *frontier,
            table: *table,
            visited: *visited,
        })
        .collect()
}

fn labeled(edges: &[(&str, &str, i64)], vertices: &[&str]) -> LabeledGraph<String> {
    let mut graph = LabeledGraph::new();
    for vertex in vertices {
        graph.add_vertex(&vertex.to_string());
    }
    for (tail, head, weight) in edges {
        graph
            .add_edge(
                &tail.to_string(),
                &head.to_string(),
                *weight,
                Direction::Directed,
            )
            .unwrap();
    }
    graph
}

fn sorted(distances: ahash::HashMap<String, i64>) -> Vec<(String, i64)> {
    distances.into_iter().sorted().collect()
}

#[test]
fn small_graph_matches_brute_force() {
    let graph = get_small_graph();

    for options in all_options() {
        let engine = ShortestPathEngine::with_options(&graph, options);
        for source in graph.vertices() {
            assert_eq!(
                engine.run(source).distances(),
                bellman_ford_distances(&graph, source),
                "{:?} from {}",
                options,
                source
            );
        }
    }

    let tree = ShortestPathEngine::new(&graph).run(0);
    assert_eq!(tree.distance(1), Some(3));
    assert_eq!(tree.distance(9), Some(6));
}

#[test]
fn random_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let graph = random_graph(&mut rng, 40, 120);
        let source = rng.gen_range(0..graph.number_of_vertices());
        let expected = bellman_ford_distances(&graph, source);

        for options in all_options() {
            let tree = ShortestPathEngine::with_options(&graph, options).run(source);
            assert_eq!(tree.distances(), expected, "{:?}", options);
            assert_eq!(tree.distance(source), Some(0));
        }
    }
}

#[test]
fn hash_graph_gives_the_same_distances() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 30, 100);
    let hash_graph = HashGraph::from_graph(&graph);

    for source in graph.vertices() {
        assert_eq!(
            ShortestPathEngine::new(&hash_graph).run(source).distances(),
            ShortestPathEngine::new(&graph).run(source).distances()
        );
    }
}

#[test]
fn paths_have_the_reported_length() {
    let graph = get_small_graph();
    let tree = ShortestPathEngine::new(&graph).run(5);

    for (vertex, distance) in tree.reachable() {
        let path = tree.path(vertex).unwrap();
        assert_eq!(path.vertices.first(), Some(&5));
        assert_eq!(path.vertices.last(), Some(&vertex));

        let length: i64 = path
            .vertices
            .iter()
            .tuple_windows()
            .map(|(&tail, &head)| {
                graph
                    .out_edges(tail)
                    .filter(|edge| edge.head == head)
                    .map(|edge| edge.weight)
                    .min()
                    .unwrap()
            })
            .sum();
        assert_eq!(length, distance);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_graph(&mut rng, 50, 200);

    for options in all_options() {
        let engine = ShortestPathEngine::with_options(&graph, options);
        assert_eq!(engine.run(0).distances(), engine.run(0).distances());
    }
}

#[test]
fn settled_distances_never_decrease_or_change() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 60, 240);

    for options in all_options() {
        let (order, tree) = ShortestPathEngine::with_options(&graph, options).settle_order(0);

        assert!(order.iter().map(|(_, distance)| distance).tuple_windows().all(|(a, b)| a <= b));
        assert!(order.iter().map(|(vertex, _)| vertex).all_unique());
        for (vertex, distance) in &order {
            assert_eq!(tree.distance(*vertex), Some(*distance));
        }
        assert_eq!(order.len(), tree.reachable().len());
        assert!(tree.statistics().relaxations <= graph.number_of_edges());
    }
}

#[test]
fn detour_beats_direct_edge() {
    let graph = labeled(&[("A", "B", 1), ("B", "C", 2), ("A", "C", 5)], &[]);
    let distances = labeled_distances(&graph, &"A".to_string(), SearchOptions::default());

    assert_eq!(
        sorted(distances),
        vec![
            ("A".to_string(), 0),
            ("B".to_string(), 1),
            ("C".to_string(), 3)
        ]
    );
}

#[test]
fn disconnected_vertex_is_absent() {
    let graph = labeled(&[], &["A", "B"]);
    let distances = labeled_distances(&graph, &"A".to_string(), SearchOptions::default());

    assert_eq!(sorted(distances), vec![("A".to_string(), 0)]);
}

#[test]
fn self_loop_does_not_improve_source() {
    let graph = labeled(&[("A", "A", 10)], &[]);
    let distances = labeled_distances(&graph, &"A".to_string(), SearchOptions::default());

    assert_eq!(sorted(distances), vec![("A".to_string(), 0)]);
}

#[test]
fn equal_length_paths_give_the_same_distance() {
    let graph = labeled(&[("A", "B", 4), ("A", "C", 2), ("C", "B", 2)], &[]);

    for options in all_options() {
        let distances = labeled_distances(&graph, &"A".to_string(), options);
        assert_eq!(distances.get("B"), Some(&4), "{:?}", options);
    }
}

#[test]
fn unknown_label_reaches_nothing() {
    let graph = labeled(&[("A", "B", 1)], &[]);
    let distances = labeled_distances(&graph, &"Z".to_string(), SearchOptions::default());

    assert!(distances.is_empty());
}

#[test]
fn extreme_weights_match_brute_force() {
    let mut graph = AdjacencyVecGraph::new();
    graph.add_edge(0, 1, i64::MAX, Direction::Directed).unwrap();
    graph.add_edge(0, 2, i64::MAX / 2 + 1, Direction::Directed).unwrap();
    graph.add_edge(2, 3, i64::MAX / 2 + 1, Direction::Directed).unwrap();
    graph.add_edge(3, 4, 7, Direction::Directed).unwrap();
    graph.add_edge(0, 5, i64::MAX - 1, Direction::Directed).unwrap();
    graph.add_edge(5, 1, 0, Direction::Directed).unwrap();
    graph.add_vertex(6);

    let expected = vec![
        Some(0),
        Some(i64::MAX - 1),
        Some(i64::MAX / 2 + 1),
        Some(i64::MAX),
        Some(i64::MAX),
        Some(i64::MAX - 1),
        None,
    ];
    assert_eq!(bellman_ford_distances(&graph, 0), expected);

    for options in all_options() {
        let tree = ShortestPathEngine::with_options(&graph, options).run(0);
        assert_eq!(tree.distances(), expected, "{:?}", options);
        assert_eq!(tree.reachable().len(), 6);
        assert!(tree.is_reachable(4));
        assert!(!tree.is_reachable(6));
        assert_eq!(tree.source(), 0);
    }
}

#[test]
fn negative_edges_give_wrong_distances_without_panicking() {
    // 0 -> 1 (5), 0 -> 2 (1), 2 -> 3 (-10), 3 -> 4 (2), bypassing validation
    let mut graph = AdjacencyVecGraph::new();
    graph.set_edge(&WeightedEdge::new(0, 1, 5).unwrap());
    graph.set_edge(&WeightedEdge::new(0, 2, 1).unwrap());
    graph.set_edge(&WeightedEdge {
        tail: 2,
        head: 3,
        weight: -10,
    });
    graph.set_edge(&WeightedEdge::new(3, 4, 2).unwrap());

    for options in all_options() {
        let (order, tree) = ShortestPathEngine::with_options(&graph, options).settle_order(0);

        assert!(order.iter().map(|(vertex, _)| vertex).all_unique());
        assert_eq!(order.len(), 5, "{:?}", options);
        assert_eq!(tree.distance(0), Some(0));
        assert_eq!(tree.distance(1), Some(5));
        assert_eq!(tree.distance(3), Some(-9));
    }
}

#[test]
fn negative_edges_are_rejected_when_added() {
    let mut graph: LabeledGraph<String> = LabeledGraph::new();
    let result = graph.add_edge(&"A".to_string(), &"B".to_string(), -1, Direction::Directed);

    assert!(result.is_err());
    assert_eq!(graph.graph().number_of_edges(), 0);
}
