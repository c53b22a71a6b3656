use self::edge::{DirectedEdge, DirectedWeightedEdge};

pub mod edge;
pub mod path;
pub mod social_graph;
pub mod weighted_graph;

pub type VertexId = u32;
pub type Weight = f64;
pub type Distance = f64;
pub type Population = u32;

pub trait Graph {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Edges leaving `tail`, ordered by head. Recomputed on every call.
    fn out_edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + '_>;

    /// Weight of the edge, `Some(0.0)` for the implicit zero-cost self-loop.
    fn get_edge_weight(&self, edge: &DirectedEdge) -> Option<Weight>;

    /// Sums the edge weights along `path`. Returns `None` if a hop has no
    /// edge.
    fn get_path_distance(&self, path: &[VertexId]) -> Option<Distance> {
        path.windows(2)
            .map(|pair| self.get_edge_weight(&DirectedEdge::new(pair[0], pair[1])))
            .try_fold(0.0, |distance, weight| Some(distance + weight?))
    }
}
