use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    graphs::{weighted_graph::WeightedGraph, Graph, VertexId, Weight},
    queue::FrontierElement,
    search_data::{
        attachment_data::{Attachment, AttachmentData},
        PredecessorData,
    },
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentTree {
    pub source: VertexId,
    pub attachments: Vec<Attachment>,
    /// Vertices in the order they joined the visited set.
    pub order: Vec<VertexId>,
}

impl AttachmentTree {
    pub fn key(&self, vertex: VertexId) -> Option<Weight> {
        self.attachments.get(vertex as usize)?.key
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.attachments.get(vertex as usize)?.parent
    }

    /// Attachment chain from the source down to `target`.
    pub fn chain(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.attachments.get_chain(target)
    }

    /// Chains of every attached vertex except the source, in visiting order.
    pub fn chains(&self) -> Vec<(VertexId, Vec<VertexId>)> {
        self.order
            .iter()
            .filter(|&&vertex| vertex != self.source)
            .filter_map(|&vertex| Some((vertex, self.chain(vertex)?)))
            .collect()
    }

    /// Sum of the keys of all attached vertices.
    pub fn total_weight(&self) -> Weight {
        self.order.iter().filter_map(|&vertex| self.key(vertex)).sum()
    }
}

/// Grows a tree from a source by always attaching the unvisited vertex that
/// is reachable over the cheapest single edge, as Prim's algorithm does.
/// Only edges leaving visited vertices are considered.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheapestAttachmentEngine;

impl CheapestAttachmentEngine {
    pub fn new() -> CheapestAttachmentEngine {
        CheapestAttachmentEngine
    }

    pub fn run(&self, graph: &WeightedGraph, source: &str) -> Result<AttachmentTree> {
        let source = graph.vertex(source)?;
        self.single_source(graph, source)
    }

    pub fn single_source(
        &self,
        graph: &WeightedGraph,
        source: VertexId,
    ) -> Result<AttachmentTree> {
        let number_of_vertices = graph.number_of_vertices();
        if source >= number_of_vertices {
            return Err(Error::VertexOutOfRange {
                index: source as usize,
                size: number_of_vertices as usize,
            });
        }

        let mut data = AttachmentData::new(number_of_vertices as usize, source);
        let mut order = Vec::new();

        while let Some(FrontierElement { vertex, .. }) = data.pop() {
            order.push(vertex);
            graph.out_edges(vertex).for_each(|edge| {
                data.update(vertex, edge.head(), edge.weight());
            });
        }

        debug!(source, attached = order.len(), "attachment run finished");

        Ok(AttachmentTree {
            source,
            attachments: data.into_attachments(),
            order,
        })
    }
}
