use crate::algo::traversal::{ForwardDfs, TraversalEvent};
use crate::implementation::{DirectedGraph, UndirectedGraph};
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use num_traits::Num;
use std::collections::{BTreeMap, BTreeSet};

/// Finds directed cycles with a depth-first search over all vertices.
///
/// Every arc that leads back to a vertex on the current search path closes one cycle.
/// The search does not enumerate all simple cycles of the graph, but it finds at least one if the graph has any.
#[derive(Debug, Clone, Default)]
pub struct DirectedCycleDetecting {
    cycles: Vec<Vec<VertexId>>,
}

impl DirectedCycleDetecting {
    /// Searches the whole graph, starting from the unvisited vertices in ascending id order.
    pub fn new<Key: Ord, Weight: Num + Copy>(graph: &DirectedGraph<Key, Weight>) -> Self {
        let mut traversal = ForwardDfs::new_without_start(graph);
        let mut on_stack = BTreeSet::new();
        let mut edge_to = BTreeMap::new();
        let mut cycles = Vec::new();

        for &start in graph.vertex_ids() {
            if !traversal.continue_traversal_from(start) {
                continue;
            }

            for event in &mut traversal {
                match event {
                    TraversalEvent::Discover { vertex, parent } => {
                        on_stack.insert(vertex);
                        if let Some(parent) = parent {
                            edge_to.insert(vertex, parent);
                        }
                    }
                    TraversalEvent::Revisit { from, to } => {
                        if on_stack.contains(&to) {
                            cycles.push(Self::reconstruct_cycle(&edge_to, from, to));
                        }
                    }
                    TraversalEvent::Finish { vertex } => {
                        on_stack.remove(&vertex);
                    }
                }
            }
        }

        debug!("Found {} directed cycles", cycles.len());
        Self { cycles }
    }

    /// Walks the search path back from `from` to its ancestor `to`.
    /// The returned cycle starts at `to` and ends at `from`.
    fn reconstruct_cycle(
        edge_to: &BTreeMap<VertexId, VertexId>,
        from: VertexId,
        to: VertexId,
    ) -> Vec<VertexId> {
        let mut cycle = vec![from];
        let mut current = from;
        while current != to {
            match edge_to.get(&current) {
                Some(&predecessor) => {
                    cycle.push(predecessor);
                    current = predecessor;
                }
                None => break,
            }
        }
        cycle.reverse();
        cycle
    }

    /// Returns true if a directed cycle was found.
    pub fn has_cycle(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Returns the found cycles.
    /// Each cycle is a walk whose last vertex has an arc back to its first vertex.
    pub fn cycles(&self) -> &[Vec<VertexId>] {
        &self.cycles
    }
}

/// Detects whether an undirected graph contains a cycle.
///
/// An edge to an already discovered vertex other than the vertex's own search parent closes a cycle.
/// The search stops at the first such edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndirectedCycleDetecting {
    has_cycle: bool,
}

impl UndirectedCycleDetecting {
    /// Searches the whole graph, starting from the unvisited vertices in ascending id order.
    pub fn new<Key: Ord, Weight: Num + Copy>(graph: &UndirectedGraph<Key, Weight>) -> Self {
        let mut traversal = ForwardDfs::new_without_start(graph);
        let mut parents = BTreeMap::new();

        for &start in graph.vertex_ids() {
            if !traversal.continue_traversal_from(start) {
                continue;
            }

            for event in &mut traversal {
                match event {
                    TraversalEvent::Discover {
                        vertex,
                        parent: Some(parent),
                    } => {
                        parents.insert(vertex, parent);
                    }
                    TraversalEvent::Revisit { from, to } => {
                        if parents.get(&from) != Some(&to) {
                            debug!("Found undirected cycle closed by edge ({}, {})", from, to);
                            return Self { has_cycle: true };
                        }
                    }
                    _ => {}
                }
            }
        }

        debug!("Undirected graph has no cycle");
        Self { has_cycle: false }
    }

    /// Returns true if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }
}
