use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    graphs::{path::Path, weighted_graph::WeightedGraph, Distance, Graph, VertexId},
    queue::{FrontierElement, PriorityPolicy},
    search_data::{
        shortest_path_data::{DistanceLabel, ShortestPathData},
        PredecessorData,
    },
};

/// A vertex as it came off the frontier, with the route known at that time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub vertex: VertexId,
    pub distance: Distance,
    pub path: Vec<VertexId>,
}

/// Result of one single source run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub source: VertexId,
    pub policy: PriorityPolicy,
    pub labels: Vec<DistanceLabel>,
    pub visits: Vec<Visit>,
}

impl ShortestPathTree {
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.labels.get(vertex as usize)?.distance
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.labels.get(vertex as usize)?.predecessor
    }

    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        Some(Path {
            vertices: self.labels.get_chain(target)?,
            distance: self.distance(target)?,
        })
    }

    /// Vertices in the order they were expanded. Under
    /// [`PriorityPolicy::PopulationFirst`] a vertex may appear more than once.
    pub fn visitation_order(&self) -> Vec<VertexId> {
        self.visits.iter().map(|visit| visit.vertex).collect()
    }
}

/// Single source shortest paths over a [`WeightedGraph`].
///
/// The frontier order is set by the [`PriorityPolicy`]. With
/// [`PriorityPolicy::DistanceFirst`] every vertex is expanded once, in order
/// of its final distance. With [`PriorityPolicy::PopulationFirst`] more
/// populous vertices are expanded first, and a vertex is expanded again
/// whenever a later expansion shortens its route.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathEngine {
    policy: PriorityPolicy,
}

impl ShortestPathEngine {
    pub fn new(policy: PriorityPolicy) -> ShortestPathEngine {
        ShortestPathEngine { policy }
    }

    pub fn run(&self, graph: &WeightedGraph, source: &str) -> Result<ShortestPathTree> {
        let source = graph.vertex(source)?;
        self.single_source(graph, source)
    }

    pub fn single_source(
        &self,
        graph: &WeightedGraph,
        source: VertexId,
    ) -> Result<ShortestPathTree> {
        let number_of_vertices = graph.number_of_vertices();
        if source >= number_of_vertices {
            return Err(Error::VertexOutOfRange {
                index: source as usize,
                size: number_of_vertices as usize,
            });
        }

        let mut data = ShortestPathData::new(
            number_of_vertices as usize,
            source,
            graph.population(source),
            self.policy,
        );
        let mut visits = Vec::new();

        while let Some(element) = data.pop() {
            let FrontierElement { vertex, .. } = element;
            visits.push(Visit {
                vertex,
                distance: element.distance(),
                path: data.get_chain(vertex).unwrap_or_default(),
            });

            graph.out_edges(vertex).for_each(|edge| {
                data.update(
                    vertex,
                    edge.head(),
                    edge.weight(),
                    graph.population(edge.head()),
                );
            });
        }

        debug!(
            source,
            policy = ?self.policy,
            visits = visits.len(),
            "shortest path run finished"
        );

        Ok(ShortestPathTree {
            source,
            policy: self.policy,
            labels: data.into_labels(),
            visits,
        })
    }
}
