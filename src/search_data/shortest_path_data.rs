use serde::{Deserialize, Serialize};
use tracing::trace;

use super::PredecessorData;
use crate::{
    graphs::{Distance, Population, VertexId, Weight},
    queue::{heap_queue::HeapQueue, FrontierElement, FrontierQueue, PriorityPolicy},
};

/// Tentative distance and predecessor of one vertex. Both are `None` until
/// the vertex is reached; the source keeps `predecessor == None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceLabel {
    pub distance: Option<Distance>,
    pub predecessor: Option<VertexId>,
}

pub struct ShortestPathData {
    policy: PriorityPolicy,
    queue: Box<dyn FrontierQueue>,
    labels: Vec<DistanceLabel>,
}

impl ShortestPathData {
    pub fn new(
        number_of_vertices: usize,
        source: VertexId,
        source_population: Population,
        policy: PriorityPolicy,
    ) -> ShortestPathData {
        let mut data = ShortestPathData {
            policy,
            queue: Box::new(HeapQueue::new()),
            labels: vec![DistanceLabel::default(); number_of_vertices],
        };

        data.labels[source as usize].distance = Some(0.0);
        data.queue
            .push(policy.element(0.0, source, source_population));

        data
    }

    /// Pops the next frontier element, skipping entries whose distance was
    /// improved after they were pushed.
    pub fn pop(&mut self) -> Option<FrontierElement> {
        while let Some(element) = self.queue.pop() {
            let current = self.labels[element.vertex as usize].distance;
            if current.is_some_and(|distance| element.distance() > distance) {
                continue;
            }
            return Some(element);
        }

        None
    }

    /// Relaxes `tail -> head`. Returns whether the distance of `head` dropped.
    pub fn update(
        &mut self,
        tail: VertexId,
        head: VertexId,
        edge_weight: Weight,
        head_population: Population,
    ) -> bool {
        let Some(tail_distance) = self.labels[tail as usize].distance else {
            return false;
        };

        let alternative_distance = tail_distance + edge_weight;
        let improves = self.labels[head as usize]
            .distance
            .map_or(true, |current| alternative_distance < current);

        if improves {
            trace!(tail, head, distance = alternative_distance, "relaxed");
            let label = &mut self.labels[head as usize];
            label.distance = Some(alternative_distance);
            label.predecessor = Some(tail);
            let element = self
                .policy
                .element(alternative_distance, head, head_population);
            self.queue.push(element);
        }

        improves
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.labels.get(vertex as usize)?.distance
    }

    pub fn into_labels(self) -> Vec<DistanceLabel> {
        self.labels
    }
}

impl PredecessorData for ShortestPathData {
    fn number_of_vertices(&self) -> u32 {
        self.labels.len() as u32
    }

    fn is_reached(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.labels.get(vertex as usize)?.predecessor
    }
}

impl PredecessorData for [DistanceLabel] {
    fn number_of_vertices(&self) -> u32 {
        self.len() as u32
    }

    fn is_reached(&self, vertex: VertexId) -> bool {
        self.get(vertex as usize)
            .is_some_and(|label| label.distance.is_some())
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex as usize)?.predecessor
    }
}
