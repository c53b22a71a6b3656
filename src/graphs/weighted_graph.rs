use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    edge::{DirectedEdge, DirectedTaillessWeightedEdge, DirectedWeightedEdge},
    Graph, Population, VertexId, Weight,
};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexInfo {
    pub name: String,
    pub population: Population,
}

/// A fixed-size set of named vertices connected by directed, non-negatively
/// weighted edges.
///
/// Vertex slots are allocated up front and named afterwards with
/// [`WeightedGraph::register_vertex`]. An absent edge is a missing entry, so
/// no weight value is reserved to mean "no edge". Every vertex reaches itself
/// at cost zero unless an explicit self-loop is added.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    vertices: Vec<Option<VertexInfo>>,
    index: HashMap<String, VertexId>,
    edges: Vec<Vec<DirectedTaillessWeightedEdge>>, // [tail] sorted by head
}

impl Graph for WeightedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn out_edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct OutEdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, DirectedTaillessWeightedEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = DirectedWeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges: &[DirectedTaillessWeightedEdge] = self
            .edges
            .get(tail as usize)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Box::new(OutEdgeIterator {
            edge_iter: edges.iter(),
            tail,
        })
    }

    fn get_edge_weight(&self, edge: &DirectedEdge) -> Option<Weight> {
        let edges_sharing_tail = self.edges.get(edge.tail() as usize)?;

        match edges_sharing_tail.binary_search_by_key(&edge.head(), |other| other.head()) {
            Ok(index) => Some(edges_sharing_tail[index].weight()),
            Err(_) if edge.is_loop() => Some(0.0),
            Err(_) => None,
        }
    }
}

impl WeightedGraph {
    /// Allocates `number_of_vertices` unnamed vertices without any edges.
    pub fn new(number_of_vertices: usize) -> Result<WeightedGraph> {
        if number_of_vertices == 0 || VertexId::try_from(number_of_vertices).is_err() {
            return Err(Error::InvalidGraphSize(number_of_vertices));
        }

        Ok(WeightedGraph {
            vertices: vec![None; number_of_vertices],
            index: HashMap::with_capacity(number_of_vertices),
            edges: vec![Vec::new(); number_of_vertices],
        })
    }

    /// Names the vertex slot `vertex`. Registering a slot again replaces its
    /// name and population; a name may only be held by one slot.
    pub fn register_vertex(
        &mut self,
        vertex: VertexId,
        name: &str,
        population: Population,
    ) -> Result<()> {
        let size = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(vertex as usize)
            .ok_or(Error::VertexOutOfRange {
                index: vertex as usize,
                size,
            })?;

        if let Some(&holder) = self.index.get(name) {
            if holder != vertex {
                return Err(Error::DuplicateVertex {
                    name: name.to_string(),
                    index: holder as usize,
                });
            }
        }

        if let Some(previous) = slot.take().filter(|previous| previous.name != name) {
            warn!(
                vertex,
                previous = %previous.name,
                replacement = name,
                "renaming registered vertex"
            );
            self.index.remove(&previous.name);
        }

        *slot = Some(VertexInfo {
            name: name.to_string(),
            population,
        });
        self.index.insert(name.to_string(), vertex);

        Ok(())
    }

    /// Sets the weight of the directed edge `from -> to`. The graph is left
    /// untouched if either name is unknown or the weight is negative or not
    /// finite.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let tail = self.vertex(from)?;
        let head = self.vertex(to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        self.set_edge(&DirectedWeightedEdge::new(tail, head, weight));
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_edge_bidirectional(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn vertex(&self, name: &str) -> Result<VertexId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    pub fn vertex_info(&self, vertex: VertexId) -> Option<&VertexInfo> {
        self.vertices.get(vertex as usize)?.as_ref()
    }

    pub fn name(&self, vertex: VertexId) -> Option<&str> {
        self.vertex_info(vertex).map(|info| info.name.as_str())
    }

    /// Population of `vertex`, zero for unregistered slots.
    pub fn population(&self, vertex: VertexId) -> Population {
        self.vertex_info(vertex)
            .map(|info| info.population)
            .unwrap_or(0)
    }

    /// `(head, weight)` pairs of all edges leaving `vertex`.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.out_edges(vertex)
            .map(|edge| (edge.head(), edge.weight()))
    }

    fn set_edge(&mut self, edge: &DirectedWeightedEdge) {
        let edges_sharing_tail = &mut self.edges[edge.tail() as usize];

        match edges_sharing_tail.binary_search_by_key(&edge.head(), |other| other.head()) {
            Ok(index) => edges_sharing_tail[index].set_weight(edge.weight()),
            Err(index) => edges_sharing_tail.insert(index, edge.tailless()),
        }
    }
}
