//! Directed and undirected graphs keyed by integer vertex ids, together with a family of traversal-based analyses.
//!
//! A graph is built by inserting vertices and then edges.
//! Edges are validated against the vertex dictionary on insertion, and rejected edges leave the graph unchanged.
//! Analyses like [Kosaraju](algo::components::Kosaraju) or [Topological](algo::order::Topological) borrow a constructed graph,
//! run one traversal pass in their constructor and keep only their result.
//!
//! ```
//! use arcgraph::algo::components::Kosaraju;
//! use arcgraph::{DirectedGraph, Edge, MutableGraphContainer, Vertex};
//!
//! let vertices = (0..3).map(|id| Vertex::new(id, ()));
//! let edges = vec![Edge::new(0, 1, 1), Edge::new(1, 0, 1), Edge::new(1, 2, 1)];
//! let graph: DirectedGraph<(), i32> = DirectedGraph::from_vertices_and_edges(vertices, edges);
//!
//! let kosaraju = Kosaraju::new(&graph);
//! assert_eq!(kosaraju.count(), 2);
//! assert!(kosaraju.strongly_connected(0, 1));
//! ```
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Graph algorithms.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// The concrete graph types.
pub mod implementation;
/// Vertex ids and iterators over them.
pub mod index;
/// The graph traits and the entities stored in a graph.
pub mod interface;

#[cfg(test)]
mod testing;

pub use implementation::*;
pub use index::*;
pub use interface::*;
