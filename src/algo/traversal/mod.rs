use crate::index::{NeighborIds, VertexId};
use crate::interface::ImmutableGraphContainer;
use std::collections::{BTreeSet, VecDeque};

/// A normal forward DFS in a directed graph, or a DFS in an undirected graph.
pub type ForwardDfs<'a, Graph> = DepthFirstTraversal<'a, Graph, ForwardNeighborStrategy>;
/// A DFS following arcs backwards, i.e. a DFS in the transpose of a directed graph.
pub type BackwardDfs<'a, Graph> = DepthFirstTraversal<'a, Graph, BackwardNeighborStrategy>;
/// A normal forward BFS in a directed graph, or a BFS in an undirected graph.
pub type ForwardBfs<'a, Graph> = BreadthFirstTraversal<'a, Graph, ForwardNeighborStrategy>;

/// A single step of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A vertex is visited for the first time.
    /// `parent` is the vertex whose arc led to it, or `None` if the vertex is a start vertex.
    Discover {
        /// The newly visited vertex.
        vertex: VertexId,
        /// The vertex the traversal came from.
        parent: Option<VertexId>,
    },
    /// An arc leads to a vertex that was visited before.
    Revisit {
        /// The tail of the arc.
        from: VertexId,
        /// The already visited head of the arc.
        to: VertexId,
    },
    /// All arcs of a vertex have been traversed.
    /// Only emitted by depth-first traversals.
    Finish {
        /// The finished vertex.
        vertex: VertexId,
    },
}

/// A type that defines the strategy for computing the neighborhood of a vertex, i.e. forward or backward.
pub trait TraversalNeighborStrategy<'a, Graph: 'a + ImmutableGraphContainer> {
    /// The iterator type used to iterate over the neighbors of a vertex.
    type Iterator: Iterator<Item = VertexId>;

    /// Returns an iterator over the neighbors of a given vertex.
    fn neighbor_iterator(graph: &'a Graph, vertex: VertexId) -> Self::Iterator;
}

/// A neighbor strategy that traverses all outgoing arcs of a vertex.
pub struct ForwardNeighborStrategy;

impl<'a, Graph: 'a + ImmutableGraphContainer> TraversalNeighborStrategy<'a, Graph>
    for ForwardNeighborStrategy
{
    type Iterator = NeighborIds<'a, Graph::Weight>;

    fn neighbor_iterator(graph: &'a Graph, vertex: VertexId) -> Self::Iterator {
        graph.out_neighbors(vertex)
    }
}

/// A neighbor strategy that traverses all incoming arcs of a vertex.
/// Undirected graphs store no incoming arcs, so this traverses nothing in them.
pub struct BackwardNeighborStrategy;

impl<'a, Graph: 'a + ImmutableGraphContainer> TraversalNeighborStrategy<'a, Graph>
    for BackwardNeighborStrategy
{
    type Iterator = NeighborIds<'a, Graph::Weight>;

    fn neighbor_iterator(graph: &'a Graph, vertex: VertexId) -> Self::Iterator {
        graph.in_neighbors(vertex)
    }
}

/// A generic depth-first traversal that reports every step as a [TraversalEvent](TraversalEvent).
///
/// The traversal keeps an explicit stack of vertices together with their partially consumed neighbor iterators,
/// so its memory is bounded by the visited set and the longest discovery path, and it never recurses.
/// Neighbors are taken in the order of the arc sets, i.e. ascending by id.
///
/// After the traversal is exhausted, it can be continued from another vertex using [continue_traversal_from](DepthFirstTraversal::continue_traversal_from).
/// Vertices visited before are not visited again.
pub struct DepthFirstTraversal<
    'a,
    Graph: 'a + ImmutableGraphContainer,
    NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
> {
    graph: &'a Graph,
    visited: BTreeSet<VertexId>,
    stack: Vec<(VertexId, NeighborStrategy::Iterator)>,
    root: Option<VertexId>,
}

impl<
        'a,
        Graph: 'a + ImmutableGraphContainer,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    > DepthFirstTraversal<'a, Graph, NeighborStrategy>
{
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    /// If the vertex is not in the graph, the traversal is empty.
    pub fn new(graph: &'a Graph, start: VertexId) -> Self {
        let mut traversal = Self::new_without_start(graph);
        traversal.continue_traversal_from(start);
        traversal
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            visited: BTreeSet::new(),
            stack: Vec::new(),
            root: None,
        }
    }

    /// Starts the traversal from the given vertex without resetting the visited vertices.
    /// Returns false and does nothing if the vertex was visited before or is not in the graph.
    pub fn continue_traversal_from(&mut self, start: VertexId) -> bool {
        debug_assert!(self.stack.is_empty() && self.root.is_none());
        if !self.graph.contains_vertex(start) || !self.visited.insert(start) {
            return false;
        }

        self.root = Some(start);
        true
    }

    /// Returns true if the given vertex has been discovered.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }

    /// Returns the set of discovered vertices.
    pub fn visited(&self) -> &BTreeSet<VertexId> {
        &self.visited
    }

    /// Consumes the traversal, returning the set of discovered vertices.
    pub fn into_visited(self) -> BTreeSet<VertexId> {
        self.visited
    }

    /// Returns the amount of vertices that are discovered but not finished.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<
        'a,
        Graph: 'a + ImmutableGraphContainer,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    > Iterator for DepthFirstTraversal<'a, Graph, NeighborStrategy>
{
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack
                .push((root, NeighborStrategy::neighbor_iterator(self.graph, root)));
            return Some(TraversalEvent::Discover {
                vertex: root,
                parent: None,
            });
        }

        let (vertex, neighbor) = {
            let (vertex, neighbors) = self.stack.last_mut()?;
            (*vertex, neighbors.next())
        };

        match neighbor {
            Some(neighbor) => {
                if self.visited.insert(neighbor) {
                    self.stack.push((
                        neighbor,
                        NeighborStrategy::neighbor_iterator(self.graph, neighbor),
                    ));
                    Some(TraversalEvent::Discover {
                        vertex: neighbor,
                        parent: Some(vertex),
                    })
                } else {
                    Some(TraversalEvent::Revisit {
                        from: vertex,
                        to: neighbor,
                    })
                }
            }
            None => {
                self.stack.pop();
                Some(TraversalEvent::Finish { vertex })
            }
        }
    }
}

/// A generic breadth-first traversal.
///
/// Vertices are marked when they are queued, so each vertex is reported exactly once by a
/// [Discover](TraversalEvent::Discover) event, whose parent is the vertex that queued it.
/// The parents form a shortest path tree with respect to the amount of arcs.
pub struct BreadthFirstTraversal<
    'a,
    Graph: 'a + ImmutableGraphContainer,
    NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
> {
    graph: &'a Graph,
    visited: BTreeSet<VertexId>,
    queue: VecDeque<(VertexId, Option<VertexId>)>,
    neighbor_strategy: std::marker::PhantomData<NeighborStrategy>,
}

impl<
        'a,
        Graph: 'a + ImmutableGraphContainer,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    > BreadthFirstTraversal<'a, Graph, NeighborStrategy>
{
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    /// If the vertex is not in the graph, the traversal is empty.
    pub fn new(graph: &'a Graph, start: VertexId) -> Self {
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        if graph.contains_vertex(start) {
            visited.insert(start);
            queue.push_back((start, None));
        }

        Self {
            graph,
            visited,
            queue,
            neighbor_strategy: Default::default(),
        }
    }

    /// Returns true if the given vertex has been queued.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }
}

impl<
        'a,
        Graph: 'a + ImmutableGraphContainer,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    > Iterator for BreadthFirstTraversal<'a, Graph, NeighborStrategy>
{
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, parent) = self.queue.pop_front()?;
        for neighbor in NeighborStrategy::neighbor_iterator(self.graph, vertex) {
            if self.visited.insert(neighbor) {
                self.queue.push_back((neighbor, Some(vertex)));
            }
        }

        Some(TraversalEvent::Discover { vertex, parent })
    }
}
