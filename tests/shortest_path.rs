use archipelago::{
    graphs::{
        edge::DirectedEdge,
        path::{validate_path, ShortestPathTestCase},
        weighted_graph::WeightedGraph,
        Distance, Graph, VertexId,
    },
    queue::PriorityPolicy,
    search::shortest_path::ShortestPathEngine,
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn graph_from_edges(
    populations: &[u32],
    edges: &[(&str, &str, f64)],
) -> WeightedGraph {
    let mut graph = WeightedGraph::new(populations.len()).unwrap();
    for (vertex, &population) in populations.iter().enumerate() {
        let name = ((b'A' + vertex as u8) as char).to_string();
        graph
            .register_vertex(vertex as VertexId, &name, population)
            .unwrap();
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

fn random_graph(rng: &mut StdRng) -> WeightedGraph {
    let number_of_vertices = rng.gen_range(1..=7);
    let mut graph = WeightedGraph::new(number_of_vertices).unwrap();
    for vertex in 0..number_of_vertices {
        graph
            .register_vertex(vertex as VertexId, &format!("v{}", vertex), rng.gen_range(50..=500))
            .unwrap();
    }
    for tail in 0..number_of_vertices {
        for head in 0..number_of_vertices {
            if tail != head && rng.gen_bool(0.4) {
                let weight = rng.gen_range(0..=20) as f64;
                graph
                    .add_edge(&format!("v{}", tail), &format!("v{}", head), weight)
                    .unwrap();
            }
        }
    }
    graph
}

/// Shortest distance by trying every simple path.
fn brute_force_distance(
    graph: &WeightedGraph,
    source: VertexId,
    target: VertexId,
) -> Option<Distance> {
    fn explore(
        graph: &WeightedGraph,
        vertex: VertexId,
        target: VertexId,
        distance: Distance,
        on_path: &mut Vec<bool>,
        best: &mut Option<Distance>,
    ) {
        if vertex == target {
            if best.map_or(true, |best| distance < best) {
                *best = Some(distance);
            }
            return;
        }
        on_path[vertex as usize] = true;
        for (head, weight) in graph.neighbors(vertex) {
            if !on_path[head as usize] {
                explore(graph, head, target, distance + weight, on_path, best);
            }
        }
        on_path[vertex as usize] = false;
    }

    let mut best = None;
    let mut on_path = vec![false; graph.number_of_vertices() as usize];
    explore(graph, source, target, 0.0, &mut on_path, &mut best);
    best
}

#[test]
fn three_vertex_scenario() {
    let graph = graph_from_edges(
        &[1, 1, 1],
        &[("A", "B", 5.0), ("B", "C", 2.0), ("A", "C", 10.0)],
    );
    let tree = ShortestPathEngine::new(PriorityPolicy::DistanceFirst)
        .run(&graph, "A")
        .unwrap();

    assert_eq!(tree.distance(0), Some(0.0));
    assert_eq!(tree.distance(1), Some(5.0));
    assert_eq!(tree.distance(2), Some(7.0));
    assert_eq!(tree.get_path(2).unwrap().vertices, vec![0, 1, 2]);
    assert_eq!(tree.visitation_order(), vec![0, 1, 2]);
}

#[test]
fn edges_are_not_symmetric() {
    let graph = graph_from_edges(&[1, 1, 1], &[("A", "B", 5.0), ("B", "C", 2.0)]);
    let tree = ShortestPathEngine::default().run(&graph, "C").unwrap();

    assert_eq!(tree.distance(2), Some(0.0));
    assert_eq!(tree.distance(0), None);
    assert_eq!(tree.distance(1), None);
    assert!(tree.get_path(0).is_none());
    assert_eq!(tree.visitation_order(), vec![2]);
}

#[test]
fn unknown_source() {
    let graph = graph_from_edges(&[1], &[]);
    assert!(matches!(
        ShortestPathEngine::default().run(&graph, "Atlantis"),
        Err(Error::UnknownVertex(name)) if name == "Atlantis"
    ));
}

#[test]
fn distance_first_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let number_of_vertices = graph.number_of_vertices();
        let source = rng.gen_range(0..number_of_vertices);
        let tree = ShortestPathEngine::new(PriorityPolicy::DistanceFirst)
            .single_source(&graph, source)
            .unwrap();

        assert_eq!(tree.distance(source), Some(0.0));
        assert_eq!(tree.predecessor(source), None);

        for target in 0..number_of_vertices {
            let test_case = ShortestPathTestCase {
                source,
                target,
                distance: brute_force_distance(&graph, source, target),
            };
            assert_eq!(tree.distance(target), test_case.distance);
            if let Err(err) = validate_path(&graph, &test_case, &tree.get_path(target)) {
                panic!("path from {} to {} wrong: {}", source, target, err);
            }
        }

        // every reachable vertex is expanded exactly once, nearest first
        let order = tree.visitation_order();
        let reachable = (0..number_of_vertices)
            .filter(|&vertex| tree.distance(vertex).is_some())
            .count();
        assert_eq!(order.len(), reachable);
        assert!(tree
            .visits
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));
    }
}

#[test]
fn predecessors_point_along_real_edges() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let graph = random_graph(&mut rng);
        let tree = ShortestPathEngine::default().single_source(&graph, 0).unwrap();

        for vertex in 0..graph.number_of_vertices() {
            if let Some(predecessor) = tree.predecessor(vertex) {
                let weight = graph
                    .get_edge_weight(&DirectedEdge::new(predecessor, vertex))
                    .unwrap();
                assert_eq!(
                    tree.distance(predecessor).map(|distance| distance + weight),
                    tree.distance(vertex)
                );
            }
        }
    }
}

#[test]
fn runs_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);

    for policy in [PriorityPolicy::DistanceFirst, PriorityPolicy::PopulationFirst] {
        for _ in 0..50 {
            let graph = random_graph(&mut rng);
            let engine = ShortestPathEngine::new(policy);
            assert_eq!(
                engine.single_source(&graph, 0).unwrap(),
                engine.single_source(&graph, 0).unwrap()
            );
        }
    }
}

#[test]
fn population_first_visits_populous_islands_first() {
    // B is close but small, C is far but populous
    let graph = graph_from_edges(&[0, 10, 100], &[("A", "B", 1.0), ("A", "C", 5.0)]);

    let by_distance = ShortestPathEngine::new(PriorityPolicy::DistanceFirst)
        .run(&graph, "A")
        .unwrap();
    assert_eq!(by_distance.visitation_order(), vec![0, 1, 2]);

    let by_population = ShortestPathEngine::new(PriorityPolicy::PopulationFirst)
        .run(&graph, "A")
        .unwrap();
    assert_eq!(by_population.visitation_order(), vec![0, 2, 1]);
    assert_eq!(by_population.distance(1), Some(1.0));
    assert_eq!(by_population.distance(2), Some(5.0));
}

#[test]
fn population_first_revisits_improved_islands() {
    // The populous B is expanded over the long direct route before the
    // detour over C is known.
    let graph = graph_from_edges(
        &[10, 100, 1],
        &[("A", "B", 10.0), ("A", "C", 1.0), ("C", "B", 1.0)],
    );

    let tree = ShortestPathEngine::new(PriorityPolicy::PopulationFirst)
        .run(&graph, "A")
        .unwrap();

    assert_eq!(tree.visitation_order(), vec![0, 1, 2, 1]);
    let visit_distances: Vec<_> = tree.visits.iter().map(|visit| visit.distance).collect();
    assert_eq!(visit_distances, vec![0.0, 10.0, 1.0, 2.0]);
    assert_eq!(tree.visits[1].path, vec![0, 1]);
    assert_eq!(tree.visits[3].path, vec![0, 2, 1]);

    assert_eq!(tree.distance(1), Some(2.0));
    assert_eq!(tree.predecessor(1), Some(2));

    let by_distance = ShortestPathEngine::new(PriorityPolicy::DistanceFirst)
        .run(&graph, "A")
        .unwrap();
    assert_eq!(by_distance.visitation_order(), vec![0, 2, 1]);
    assert_eq!(by_distance.labels, tree.labels);
}

#[test]
fn population_first_labels_are_consistent() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let number_of_vertices = graph.number_of_vertices();
        let source = rng.gen_range(0..number_of_vertices);
        let tree = ShortestPathEngine::new(PriorityPolicy::PopulationFirst)
            .single_source(&graph, source)
            .unwrap();

        assert_eq!(tree.distance(source), Some(0.0));
        assert_eq!(tree.predecessor(source), None);

        for target in 0..number_of_vertices {
            assert_eq!(
                tree.distance(target).is_some(),
                brute_force_distance(&graph, source, target).is_some()
            );
            if let Some(path) = tree.get_path(target) {
                assert_eq!(path.vertices.first(), Some(&source));
                assert_eq!(graph.get_path_distance(&path.vertices), Some(path.distance));
            }
        }

        // each expansion starts from the most populous island on the frontier
        // at that time, so the first visit after the source is the most
        // populous neighbor
        let first_hop = graph
            .neighbors(source)
            .filter(|&(head, _)| head != source)
            .map(|(head, _)| graph.population(head))
            .max();
        if let Some(population) = first_hop {
            assert_eq!(graph.population(tree.visits[1].vertex), population);
        }
    }
}
