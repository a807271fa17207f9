use crate::implementation::{DirectedGraph, UndirectedGraph};
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use num_traits::Num;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::EdgeType;
use std::collections::BTreeMap;

pub use petgraph;

/// Copies the vertices and accepted edges of a graph into a petgraph graph.
/// Node weights are the vertex ids, nodes are added in ascending id order.
fn copy_into_petgraph<Graph: ImmutableGraphContainer, Direction: EdgeType>(
    graph: &Graph,
) -> petgraph::Graph<VertexId, Graph::Weight, Direction> {
    let mut result =
        petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_set().len());
    let node_map: BTreeMap<VertexId, NodeIndex> = graph
        .vertex_ids()
        .map(|&id| (id, result.add_node(id)))
        .collect();

    for edge in graph.edge_set() {
        // Accepted edges only reference vertices of the graph.
        if let (Some(&start), Some(&end)) =
            (node_map.get(&edge.start_id()), node_map.get(&edge.end_id()))
        {
            result.add_edge(start, end, *edge.weight());
        }
    }

    result
}

impl<Key: Ord, Weight: Num + Copy> DirectedGraph<Key, Weight> {
    /// Converts this graph into a petgraph `DiGraph` whose node weights are the vertex ids.
    pub fn to_petgraph(&self) -> DiGraph<VertexId, Weight> {
        copy_into_petgraph(self)
    }
}

impl<Key: Ord, Weight: Num + Copy> UndirectedGraph<Key, Weight> {
    /// Converts this graph into a petgraph `UnGraph` whose node weights are the vertex ids.
    /// Each accepted edge becomes a single petgraph edge.
    pub fn to_petgraph(&self) -> UnGraph<VertexId, Weight> {
        copy_into_petgraph(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::interface::{Edge, ImmutableGraphContainer, MutableGraphContainer, Vertex};
    use crate::testing::tiny_directed_graph;
    use crate::UndirectedGraph;

    #[test]
    fn test_directed_conversion() {
        let graph = tiny_directed_graph();
        let converted = graph.to_petgraph();
        assert_eq!(converted.node_count(), graph.vertex_count());
        assert_eq!(converted.edge_count(), graph.arc_count());
        for edge in converted.raw_edges() {
            let start = converted[edge.source()];
            let end = converted[edge.target()];
            assert!(graph.contains_arc(start, end));
        }
    }

    #[test]
    fn test_undirected_conversion() {
        let graph: UndirectedGraph<(), i64> = UndirectedGraph::from_vertices_and_edges(
            (10..14).map(|id| Vertex::new(id, ())),
            vec![Edge::new(10, 11, 3), Edge::new(11, 10, 4), Edge::new(12, 13, 5)],
        );
        let converted = graph.to_petgraph();
        assert_eq!(converted.node_count(), 4);
        assert_eq!(converted.edge_count(), 2);
        assert_eq!(petgraph::algo::connected_components(&converted), 2);
        assert_eq!(converted.raw_edges()[0].weight, 3);
    }
}
