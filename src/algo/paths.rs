use crate::algo::traversal::{ForwardBfs, ForwardDfs, TraversalEvent};
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use std::collections::{BTreeMap, BTreeSet};

/// Follows the discovery predecessors back from `destination` and returns the walk from its source to `destination`.
fn reconstruct_path(
    edge_to: &BTreeMap<VertexId, VertexId>,
    destination: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(&predecessor) = edge_to.get(&current) {
        path.push(predecessor);
        current = predecessor;
    }
    path.reverse();
    path
}

/// Depth-first reachability from one or more source vertices along outgoing arcs.
///
/// For every reached vertex, the vertex it was discovered from is recorded,
/// so a walk from a source to each reached vertex can be reconstructed.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    marked: BTreeSet<VertexId>,
    edge_to: BTreeMap<VertexId, VertexId>,
    start: Option<VertexId>,
}

impl DepthFirstPaths {
    /// Searches all vertices reachable from `start`.
    pub fn new<Graph: ImmutableGraphContainer>(graph: &Graph, start: VertexId) -> Self {
        Self::from_sources(graph, std::iter::once(start))
    }

    /// Searches all vertices reachable from any of the given sources.
    /// Sources that were already reached from an earlier source are skipped,
    /// and ids that are not in the graph are ignored.
    ///
    /// Every source that starts a search keeps its own search tree, so walks can be reconstructed
    /// to all reached vertices, not only to those reached from [start](DepthFirstPaths::start).
    /// A walk to a vertex first reached from a later source begins at that later source.
    pub fn from_sources<
        Graph: ImmutableGraphContainer,
        Sources: IntoIterator<Item = VertexId>,
    >(
        graph: &Graph,
        sources: Sources,
    ) -> Self {
        let mut traversal = ForwardDfs::new_without_start(graph);
        let mut edge_to = BTreeMap::new();
        let mut start = None;

        for source in sources {
            if !traversal.continue_traversal_from(source) {
                continue;
            }
            start.get_or_insert(source);

            for event in &mut traversal {
                if let TraversalEvent::Discover {
                    vertex,
                    parent: Some(parent),
                } = event
                {
                    edge_to.insert(vertex, parent);
                }
            }
        }

        Self {
            marked: traversal.into_visited(),
            edge_to,
            start,
        }
    }

    /// Returns the first source the search started from, or `None` if no source was in the graph.
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Returns true if `destination` was reached.
    pub fn has_path_to(&self, destination: VertexId) -> bool {
        self.marked.contains(&destination)
    }

    /// Returns the walk along which `destination` was discovered,
    /// or an empty vector if it was not reached.
    ///
    /// The walk begins at the source whose search discovered `destination`.
    /// With a single source, or for vertices reached from the first source, this is [start](DepthFirstPaths::start).
    /// Vertices reached only from a later source get a walk from that source instead of an empty one.
    pub fn path_to(&self, destination: VertexId) -> Vec<VertexId> {
        if !self.has_path_to(destination) {
            return Vec::new();
        }
        reconstruct_path(&self.edge_to, destination)
    }
}

/// Breadth-first reachability from a single source vertex along outgoing arcs.
/// The walks it reconstructs are shortest with respect to the amount of arcs.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    marked: BTreeSet<VertexId>,
    edge_to: BTreeMap<VertexId, VertexId>,
    start: VertexId,
}

impl BreadthFirstPaths {
    /// Searches all vertices reachable from `start`.
    pub fn new<Graph: ImmutableGraphContainer>(graph: &Graph, start: VertexId) -> Self {
        let mut marked = BTreeSet::new();
        let mut edge_to = BTreeMap::new();

        for event in ForwardBfs::new(graph, start) {
            if let TraversalEvent::Discover { vertex, parent } = event {
                marked.insert(vertex);
                if let Some(parent) = parent {
                    edge_to.insert(vertex, parent);
                }
            }
        }

        Self {
            marked,
            edge_to,
            start,
        }
    }

    /// Returns the source of the search.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns true if `destination` was reached.
    pub fn has_path_to(&self, destination: VertexId) -> bool {
        self.marked.contains(&destination)
    }

    /// Returns a shortest walk from the source to `destination`,
    /// or an empty vector if it was not reached.
    pub fn path_to(&self, destination: VertexId) -> Vec<VertexId> {
        if !self.has_path_to(destination) {
            return Vec::new();
        }
        reconstruct_path(&self.edge_to, destination)
    }

    /// Returns the amount of arcs on a shortest walk from the source to `destination`.
    pub fn distance_to(&self, destination: VertexId) -> Option<usize> {
        if !self.has_path_to(destination) {
            return None;
        }

        let mut distance = 0;
        let mut current = destination;
        while let Some(&predecessor) = self.edge_to.get(&current) {
            distance += 1;
            current = predecessor;
        }
        Some(distance)
    }
}
