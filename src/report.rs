//! Plain text and serializable views of search results.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{weighted_graph::WeightedGraph, Distance, Population, VertexId, Weight},
    relay::{Body, Message},
    search::{cheapest_attachment::AttachmentTree, shortest_path::ShortestPathTree},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitRow {
    pub island: String,
    pub population: Population,
    pub distance: Distance,
    pub route: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRow {
    pub island: String,
    pub parent: String,
    pub key: Weight,
    pub chain: Vec<String>,
}

fn vertex_name(graph: &WeightedGraph, vertex: VertexId) -> String {
    graph
        .name(vertex)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", vertex))
}

fn names(graph: &WeightedGraph, vertices: &[VertexId]) -> Vec<String> {
    vertices
        .iter()
        .map(|&vertex| vertex_name(graph, vertex))
        .collect()
}

pub fn visit_rows(graph: &WeightedGraph, tree: &ShortestPathTree) -> Vec<VisitRow> {
    tree.visits
        .iter()
        .map(|visit| VisitRow {
            island: vertex_name(graph, visit.vertex),
            population: graph.population(visit.vertex),
            distance: visit.distance,
            route: names(graph, &visit.path),
        })
        .collect()
}

pub fn attachment_rows(graph: &WeightedGraph, tree: &AttachmentTree) -> Vec<AttachmentRow> {
    tree.chains()
        .into_iter()
        .filter_map(|(vertex, chain)| {
            Some(AttachmentRow {
                island: vertex_name(graph, vertex),
                parent: vertex_name(graph, tree.parent(vertex)?),
                key: tree.key(vertex)?,
                chain: names(graph, &chain),
            })
        })
        .collect()
}

pub fn render_visits(rows: &[VisitRow]) -> String {
    let mut out = format!(
        "{:<20}{:>12}{:>16}   Route\n{}\n",
        "Island",
        "Population",
        "Total Distance",
        "-".repeat(65)
    );
    for row in rows {
        out.push_str(&format!(
            "{:<20}{:>12}{:>16}   {}\n",
            row.island,
            row.population,
            row.distance,
            row.route.iter().join(" -> ")
        ));
    }
    out
}

pub fn render_attachments(rows: &[AttachmentRow], total_weight: Weight) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{:<20}{:>10}   {}\n",
            row.island,
            row.key,
            row.chain.iter().join(" -> ")
        ));
    }
    out.push_str(&format!("Total attachment weight: {}\n", total_weight));
    out
}

pub fn render_message(message: &Message) -> String {
    let body = match &message.body {
        Body::Text(text) => text.clone(),
        Body::Ciphertext(blocks) => blocks.iter().join(" "),
    };
    let path = if message.is_deliverable() {
        message.path.iter().join(" ")
    } else {
        "unreachable".to_string()
    };

    format!(
        "Sender: {}\nReceiver: {}\nMetadata: {}\nMessage Body: {}\nPath: {}\n",
        message.sender, message.receiver, message.metadata, body, path
    )
}
