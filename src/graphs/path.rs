use serde::{Deserialize, Serialize};

use super::{edge::DirectedEdge, Distance, Graph, VertexId};

/// Vertices from source to target together with the total distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

/// Expected outcome of a shortest path query, `None` if the target is
/// unreachable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub source: VertexId,
    pub target: VertexId,
    pub distance: Option<Distance>,
}

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    test_case: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let Some(path) = path else {
        if test_case.distance.is_some() {
            return Err("no path found but there is one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = test_case.distance else {
        return Err("path found but there is none".to_string());
    };

    if path.distance != distance {
        return Err(format!(
            "wrong path distance, expected {} but got {}",
            distance, path.distance
        ));
    }

    // Ensure fist and last vertex of path are source and target of the test case.
    if path.vertices.first() != Some(&test_case.source) {
        return Err("first vertex of path is not the source".to_string());
    }
    if path.vertices.last() != Some(&test_case.target) {
        return Err("last vertex of path is not the target".to_string());
    }

    // Check if there is an edge between consecutive path vertices.
    for pair in path.vertices.windows(2) {
        let edge = DirectedEdge::new(pair[0], pair[1]);
        if graph.get_edge_weight(&edge).is_none() {
            return Err(format!("no edge between {} and {}", pair[0], pair[1]));
        }
    }

    if graph.get_path_distance(&path.vertices) != Some(path.distance) {
        return Err("path distance does not match the sum of its edges".to_string());
    }

    Ok(())
}
