use crate::algo::order::DepthFirstOrder;
use crate::algo::traversal::{ForwardDfs, TraversalEvent};
use crate::implementation::DirectedGraph;
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use num_traits::Num;
use std::collections::BTreeMap;

/// Labels every vertex reached by one forward depth-first search tree with the same group id.
/// Returns the labels and the amount of search trees.
fn label_search_trees<Graph: ImmutableGraphContainer, Order: IntoIterator<Item = VertexId>>(
    graph: &Graph,
    order: Order,
) -> (BTreeMap<VertexId, usize>, usize) {
    let mut traversal = ForwardDfs::new_without_start(graph);
    let mut groups = BTreeMap::new();
    let mut count = 0;

    for start in order {
        if !traversal.continue_traversal_from(start) {
            continue;
        }

        for event in &mut traversal {
            if let TraversalEvent::Discover { vertex, .. } = event {
                groups.insert(vertex, count);
            }
        }
        count += 1;
    }

    (groups, count)
}

/// Returns the members of each group, ordered by group id and then by vertex id.
fn group_members(groups: &BTreeMap<VertexId, usize>, count: usize) -> Vec<Vec<VertexId>> {
    let mut members = vec![Vec::new(); count];
    for (&vertex, &group) in groups {
        members[group].push(vertex);
    }
    members
}

/// Groups the vertices of a graph by depth-first search trees.
///
/// A search is started from each unvisited vertex in ascending id order, and all vertices it reaches form a group.
/// In an undirected graph, the groups are the connected components.
/// In a directed graph, only outgoing arcs are followed, so a group may contain vertices that only reach into it.
#[derive(Debug, Clone, Default)]
pub struct ConnectedComponent {
    groups: BTreeMap<VertexId, usize>,
    count: usize,
}

impl ConnectedComponent {
    /// Computes the groups of the given graph.
    pub fn new<Graph: ImmutableGraphContainer>(graph: &Graph) -> Self {
        let (groups, count) = label_search_trees(graph, graph.vertex_ids().copied());
        debug!("Found {} connected components", count);
        Self { groups, count }
    }

    /// Returns true if both vertices are in the graph and in the same group.
    pub fn connected(&self, a: VertexId, b: VertexId) -> bool {
        match (self.groups.get(&a), self.groups.get(&b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the group id of the given vertex, or `None` if it is not in the graph.
    pub fn which_group(&self, vertex: VertexId) -> Option<usize> {
        self.groups.get(&vertex).copied()
    }

    /// Returns the amount of groups.
    pub fn group_count(&self) -> usize {
        self.count
    }

    /// Returns the members of each group, indexed by group id.
    pub fn groups(&self) -> Vec<Vec<VertexId>> {
        group_members(&self.groups, self.count)
    }
}

/// The strongly connected components of a directed graph, computed with Kosaraju's algorithm.
///
/// The first pass computes the reverse postorder of the transposed graph by following incoming arcs.
/// The second pass starts forward depth-first searches in that order, and each search tree is exactly one strongly connected component.
/// Component ids are assigned in the order the components are found, which is a reverse topological order of the component graph.
#[derive(Debug, Clone, Default)]
pub struct Kosaraju {
    groups: BTreeMap<VertexId, usize>,
    count: usize,
}

impl Kosaraju {
    /// Computes the strongly connected components of the given graph.
    pub fn new<Key: Ord, Weight: Num + Copy>(graph: &DirectedGraph<Key, Weight>) -> Self {
        let order = DepthFirstOrder::new_transposed(graph).reverse_post();
        let (groups, count) = label_search_trees(graph, order);
        debug!(
            "Found {} strongly connected components in a graph with {} vertices",
            count,
            graph.vertex_count()
        );
        Self { groups, count }
    }

    /// Returns true if both vertices are in the graph and reach each other.
    pub fn strongly_connected(&self, a: VertexId, b: VertexId) -> bool {
        match (self.groups.get(&a), self.groups.get(&b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the component id of the given vertex, or `None` if it is not in the graph.
    pub fn group(&self, vertex: VertexId) -> Option<usize> {
        self.groups.get(&vertex).copied()
    }

    /// Returns the amount of strongly connected components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the members of each component, indexed by component id.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        group_members(&self.groups, self.count)
    }
}
