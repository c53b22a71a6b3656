use crate::graphs::VertexId;

pub mod attachment_data;
pub mod shortest_path_data;

/// Per-run labels that link each reached vertex back towards the source.
pub trait PredecessorData {
    fn number_of_vertices(&self) -> u32;

    fn is_reached(&self, vertex: VertexId) -> bool;

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Vertices from the source to `target` or `None` if `target` was never
    /// reached.
    fn get_chain(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if target >= self.number_of_vertices() || !self.is_reached(target) {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(vertices)
    }
}
