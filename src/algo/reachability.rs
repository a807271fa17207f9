use crate::algo::traversal::ForwardDfs;
use crate::implementation::DirectedGraph;
use crate::index::VertexId;
use num_traits::Num;
use std::collections::BTreeSet;

/// The set of vertices reachable from a set of sources in a directed graph.
///
/// Each source whose vertex was already marked by the traversal from an earlier source is skipped.
/// Sources that are not in the graph are ignored.
#[derive(Debug, Clone)]
pub struct Accessibility {
    marked: BTreeSet<VertexId>,
}

impl Accessibility {
    /// Marks all vertices reachable from any of the given sources, including the sources themselves.
    pub fn new<Key: Ord, Weight: Num + Copy, Sources: IntoIterator<Item = VertexId>>(
        graph: &DirectedGraph<Key, Weight>,
        sources: Sources,
    ) -> Self {
        let mut traversal = ForwardDfs::new_without_start(graph);
        for source in sources {
            if traversal.continue_traversal_from(source) {
                traversal.by_ref().for_each(drop);
            }
        }

        Self {
            marked: traversal.into_visited(),
        }
    }

    /// Returns true if the given vertex is reachable from a source.
    pub fn is_marked(&self, vertex: VertexId) -> bool {
        self.marked.contains(&vertex)
    }

    /// Returns the set of all reachable vertices.
    pub fn result(&self) -> &BTreeSet<VertexId> {
        &self.marked
    }

    /// Consumes this result, returning the set of all reachable vertices.
    pub fn into_result(self) -> BTreeSet<VertexId> {
        self.marked
    }
}

#[cfg(test)]
mod tests {
    use super::Accessibility;
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer};
    use crate::testing::tiny_directed_graph;
    use crate::DirectedGraph;
    use std::collections::BTreeSet;

    #[test]
    fn test_single_source() {
        let graph = tiny_directed_graph();
        let reachable = Accessibility::new(&graph, vec![1]);
        assert_eq!(reachable.result().iter().copied().collect::<Vec<_>>(), vec![1]);

        let reachable = Accessibility::new(&graph, vec![2]);
        let expected: BTreeSet<_> = [0, 1, 2, 3, 4, 5, 6, 9, 10, 11, 12].iter().copied().collect();
        assert_eq!(reachable.result(), &expected);
        assert!(!reachable.is_marked(7));
    }

    #[test]
    fn test_multiple_sources() {
        let graph = tiny_directed_graph();
        let reachable = Accessibility::new(&graph, vec![1, 7, 8, 100]);
        assert_eq!(reachable.result().len(), graph.vertex_count());
        assert!(!reachable.is_marked(100));

        let reachable = Accessibility::new(&graph, Vec::new());
        assert!(reachable.result().is_empty());
    }

    #[test]
    fn test_epsilon_closure_style_queries() {
        // Vertex creation by id, edge insertion by ids and repeated reachability queries.
        let mut graph = DirectedGraph::<(), u8>::new();
        for id in 0..6 {
            graph.add_vertex_by_id(id);
        }
        for &(from, to) in [(0, 1), (1, 2), (1, 4), (2, 3), (4, 5)].iter() {
            assert!(graph.add_edge_between(from, to));
        }
        assert_eq!(graph.vertex_count(), 6);

        let first = Accessibility::new(&graph, vec![0]).into_result();
        assert_eq!(first.len(), 6);
        let second = Accessibility::new(&graph, vec![2, 5]).into_result();
        assert_eq!(second.into_iter().collect::<Vec<_>>(), vec![2, 3, 5]);
    }
}
