use archipelago::{
    graphs::{edge::DirectedEdge, weighted_graph::WeightedGraph, Graph, VertexId},
    search::{
        cheapest_attachment::CheapestAttachmentEngine, shortest_path::ShortestPathEngine,
    },
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn abcd(edges: &[(&str, &str, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(4).unwrap();
    for (vertex, name) in ["A", "B", "C", "D"].iter().enumerate() {
        graph.register_vertex(vertex as VertexId, name, 1).unwrap();
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
            .register_vertex(vertex as VertexId, &format!("v{}", vertex), 1)
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

#[test]
fn keys_are_edge_weights_not_distances() {
    let graph = abcd(&[("A", "B", 3.0), ("B", "C", 2.0), ("A", "C", 4.0)]);

    let tree = CheapestAttachmentEngine::new().run(&graph, "A").unwrap();
    assert_eq!(tree.key(0), Some(0.0));
    assert_eq!(tree.key(1), Some(3.0));
    assert_eq!(tree.key(2), Some(2.0));
    assert_eq!(tree.parent(2), Some(1));
    assert_eq!(tree.chain(2), Some(vec![0, 1, 2]));
    assert_eq!(tree.total_weight(), 5.0);

    // shortest paths take the direct edge instead
    let shortest = ShortestPathEngine::default().run(&graph, "A").unwrap();
    assert_eq!(shortest.distance(2), Some(4.0));
    assert_eq!(shortest.predecessor(2), Some(0));
}

#[test]
fn unreachable_vertices_are_not_attached() {
    let graph = abcd(&[("A", "B", 5.0), ("B", "C", 2.0), ("A", "C", 10.0), ("D", "A", 1.0)]);

    let tree = CheapestAttachmentEngine::new().run(&graph, "A").unwrap();
    assert_eq!(tree.order, vec![0, 1, 2]);
    assert_eq!(tree.parent(0), None);
    assert_eq!(tree.parent(3), None);
    assert_eq!(tree.key(3), None);
    assert_eq!(tree.chain(3), None);

    let chains = tree.chains();
    assert_eq!(chains, vec![(1, vec![0, 1]), (2, vec![0, 1, 2])]);
    assert_eq!(tree.total_weight(), 7.0);
}

#[test]
fn unknown_source() {
    let graph = abcd(&[]);
    assert!(matches!(
        CheapestAttachmentEngine::new().run(&graph, "E"),
        Err(Error::UnknownVertex(_))
    ));
}

#[test]
fn every_attachment_is_the_cheapest_available_edge() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let number_of_vertices = graph.number_of_vertices();
        let source = rng.gen_range(0..number_of_vertices);
        let tree = CheapestAttachmentEngine::new()
            .single_source(&graph, source)
            .unwrap();
        let shortest = ShortestPathEngine::default()
            .single_source(&graph, source)
            .unwrap();

        assert_eq!(tree.order.first(), Some(&source));
        assert_eq!(tree.key(source), Some(0.0));
        assert_eq!(tree.parent(source), None);

        // same reachable set as shortest paths
        for vertex in 0..number_of_vertices {
            assert_eq!(tree.key(vertex).is_some(), shortest.distance(vertex).is_some());
        }

        for (position, &vertex) in tree.order.iter().enumerate().skip(1) {
            let visited_before = &tree.order[..position];
            let parent = tree.parent(vertex).unwrap();
            assert!(visited_before.contains(&parent));

            let key = tree.key(vertex).unwrap();
            assert_eq!(
                graph.get_edge_weight(&DirectedEdge::new(parent, vertex)),
                Some(key)
            );

            let cheapest = visited_before
                .iter()
                .filter_map(|&tail| graph.get_edge_weight(&DirectedEdge::new(tail, vertex)))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(key, cheapest);
        }
    }
}

#[test]
fn runs_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..50 {
        let graph = random_graph(&mut rng);
        let engine = CheapestAttachmentEngine::new();
        assert_eq!(
            engine.single_source(&graph, 0).unwrap(),
            engine.single_source(&graph, 0).unwrap()
        );
    }
}
