pub mod breadth_first;
pub mod cheapest_attachment;
pub mod shortest_path;
