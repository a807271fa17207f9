use crate::algo::traversal::{ForwardDfs, TraversalEvent};
use crate::implementation::UndirectedGraph;
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use num_traits::Num;
use std::collections::BTreeMap;

/// One of the two sides of a bipartition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// The side of the vertex each search starts from.
    Red,
    /// The other side.
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub fn other(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Tests whether an undirected graph is bipartite by two-coloring it with a depth-first search.
///
/// Each search tree is colored starting with [Red](Color::Red) at its root,
/// and every discovered vertex gets the opposite color of its parent.
/// An edge between two vertices of the same color makes the coloring invalid and stops the search.
/// A graph without vertices is bipartite.
#[derive(Debug, Clone)]
pub struct Bipartite {
    colors: BTreeMap<VertexId, Color>,
    is_valid: bool,
}

impl Bipartite {
    /// Two-colors the given graph.
    pub fn new<Key: Ord, Weight: Num + Copy>(graph: &UndirectedGraph<Key, Weight>) -> Self {
        let mut traversal = ForwardDfs::new_without_start(graph);
        let mut colors: BTreeMap<VertexId, Color> = BTreeMap::new();

        for &start in graph.vertex_ids() {
            if !traversal.continue_traversal_from(start) {
                continue;
            }

            for event in &mut traversal {
                match event {
                    TraversalEvent::Discover { vertex, parent } => {
                        let color = parent
                            .and_then(|parent| colors.get(&parent))
                            .map_or(Color::Red, |color| color.other());
                        colors.insert(vertex, color);
                    }
                    TraversalEvent::Revisit { from, to } => {
                        if colors.get(&from) == colors.get(&to) {
                            debug!(
                                "Graph is not bipartite, edge ({}, {}) joins equal colors",
                                from, to
                            );
                            return Self {
                                colors,
                                is_valid: false,
                            };
                        }
                    }
                    TraversalEvent::Finish { .. } => {}
                }
            }
        }

        debug!("Graph is bipartite");
        Self {
            colors,
            is_valid: true,
        }
    }

    /// Returns true if the graph is bipartite.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the side of the given vertex in a bipartition,
    /// or `None` if the graph is not bipartite or the vertex is not in the graph.
    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        if !self.is_valid {
            return None;
        }
        self.colors.get(&vertex).copied()
    }
}
