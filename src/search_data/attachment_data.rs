use serde::{Deserialize, Serialize};
use tracing::trace;

use super::PredecessorData;
use crate::{
    graphs::{VertexId, Weight},
    queue::{heap_queue::HeapQueue, FrontierElement, FrontierQueue},
};

/// Cheapest single edge through which a vertex joined the visited set.
///
/// `key` is the weight of that edge, not a distance from the source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub key: Option<Weight>,
    pub parent: Option<VertexId>,
    pub is_visited: bool,
}

pub struct AttachmentData {
    queue: Box<dyn FrontierQueue>,
    attachments: Vec<Attachment>,
}

impl AttachmentData {
    pub fn new(number_of_vertices: usize, source: VertexId) -> AttachmentData {
        let mut data = AttachmentData {
            queue: Box::new(HeapQueue::new()),
            attachments: vec![Attachment::default(); number_of_vertices],
        };

        data.attachments[source as usize].key = Some(0.0);
        data.queue.push(FrontierElement::new(0.0, source));

        data
    }

    /// Pops the unvisited vertex with the smallest key and marks it visited.
    pub fn pop(&mut self) -> Option<FrontierElement> {
        while let Some(element) = self.queue.pop() {
            let attachment = &mut self.attachments[element.vertex as usize];
            if !attachment.is_visited {
                attachment.is_visited = true;
                return Some(element);
            }
        }

        None
    }

    /// Offers the edge `tail -> head` as attachment of `head`. Returns whether
    /// it became the cheapest known one.
    pub fn update(&mut self, tail: VertexId, head: VertexId, edge_weight: Weight) -> bool {
        let attachment = &mut self.attachments[head as usize];
        if attachment.is_visited
            || attachment
                .key
                .is_some_and(|current| edge_weight >= current)
        {
            return false;
        }

        trace!(tail, head, key = edge_weight, "attached");
        attachment.key = Some(edge_weight);
        attachment.parent = Some(tail);
        self.queue.push(FrontierElement::new(edge_weight, head));

        true
    }

    pub fn into_attachments(self) -> Vec<Attachment> {
        self.attachments
    }
}

impl PredecessorData for [Attachment] {
    fn number_of_vertices(&self) -> u32 {
        self.len() as u32
    }

    fn is_reached(&self, vertex: VertexId) -> bool {
        self.get(vertex as usize)
            .is_some_and(|attachment| attachment.key.is_some())
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex as usize)?.parent
    }
}
