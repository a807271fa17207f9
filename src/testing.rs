use crate::interface::{Edge, MutableGraphContainer, Vertex};
use crate::{DirectedGraph, ImmutableGraphContainer, UndirectedGraph, VertexId};

/// The edges of the thirteen vertex example graph.
pub const TINY_EDGES: [(VertexId, VertexId); 24] = [
    (0, 1),
    (0, 5),
    (0, 6),
    (2, 0),
    (2, 3),
    (3, 2),
    (3, 5),
    (4, 2),
    (4, 3),
    (5, 4),
    (6, 0),
    (6, 4),
    (6, 9),
    (7, 6),
    (7, 8),
    (8, 7),
    (8, 9),
    (9, 10),
    (9, 11),
    (9, 12),
    (10, 12),
    (11, 4),
    (11, 12),
    (12, 9),
];

/// Vertices `0..=12` keyed by their id, with all [TINY_EDGES](TINY_EDGES) of weight one.
pub fn tiny_directed_graph() -> DirectedGraph<usize, i32> {
    DirectedGraph::from_vertices_and_edges(
        (0..13).map(|id| Vertex::new(id, id)),
        TINY_EDGES.iter().map(|&(start, end)| Edge::new(start, end, 1)),
    )
}

pub fn directed_graph(vertices: usize, edges: &[(VertexId, VertexId)]) -> DirectedGraph<(), i32> {
    DirectedGraph::from_vertices_and_edges(
        (0..vertices).map(|id| Vertex::new(id, ())),
        edges.iter().map(|&(start, end)| Edge::unit(start, end)),
    )
}

pub fn undirected_graph(
    vertices: usize,
    edges: &[(VertexId, VertexId)],
) -> UndirectedGraph<(), i32> {
    UndirectedGraph::from_vertices_and_edges(
        (0..vertices).map(|id| Vertex::new(id, ())),
        edges.iter().map(|&(start, end)| Edge::unit(start, end)),
    )
}

/// Asserts that each consecutive pair of the walk is an arc of the graph.
pub fn assert_is_walk<Graph: ImmutableGraphContainer>(graph: &Graph, walk: &[VertexId]) {
    for pair in walk.windows(2) {
        assert!(
            graph.contains_arc(pair[0], pair[1]),
            "({}, {}) is not an arc of the walk {:?}",
            pair[0],
            pair[1],
            walk
        );
    }
}
