mod directed;
/// Conversions into petgraph graphs.
pub mod petgraph_impl;
mod structure;
mod undirected;

pub use directed::DirectedGraph;
pub use structure::{AdjacencyMap, GraphStructure, VertexDictionary};
pub use undirected::UndirectedGraph;
