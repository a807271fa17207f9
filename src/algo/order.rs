use crate::algo::cycles::DirectedCycleDetecting;
use crate::algo::traversal::{
    BackwardNeighborStrategy, DepthFirstTraversal, ForwardNeighborStrategy, TraversalEvent,
    TraversalNeighborStrategy,
};
use crate::implementation::DirectedGraph;
use crate::index::VertexId;
use crate::interface::ImmutableGraphContainer;
use num_traits::Num;

/// The preorder, postorder and reverse postorder of a depth-first search over all vertices of a graph.
///
/// The search is started from each vertex that is still unvisited, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    preorder: Vec<VertexId>,
    postorder: Vec<VertexId>,
}

impl DepthFirstOrder {
    /// Computes the orders following outgoing arcs.
    pub fn new<Graph: ImmutableGraphContainer>(graph: &Graph) -> Self {
        Self::compute::<Graph, ForwardNeighborStrategy>(graph)
    }

    /// Computes the orders following incoming arcs, i.e. the orders of the transposed graph.
    /// Undirected graphs store no incoming arcs, so for them every vertex is its own search tree.
    pub fn new_transposed<Graph: ImmutableGraphContainer>(graph: &Graph) -> Self {
        Self::compute::<Graph, BackwardNeighborStrategy>(graph)
    }

    fn compute<
        'a,
        Graph: 'a + ImmutableGraphContainer,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    >(
        graph: &'a Graph,
    ) -> Self {
        let mut traversal: DepthFirstTraversal<'a, Graph, NeighborStrategy> =
            DepthFirstTraversal::new_without_start(graph);
        let mut preorder = Vec::with_capacity(graph.vertex_count());
        let mut postorder = Vec::with_capacity(graph.vertex_count());

        for &start in graph.vertex_ids() {
            if !traversal.continue_traversal_from(start) {
                continue;
            }

            for event in &mut traversal {
                match event {
                    TraversalEvent::Discover { vertex, .. } => preorder.push(vertex),
                    TraversalEvent::Finish { vertex } => postorder.push(vertex),
                    TraversalEvent::Revisit { .. } => {}
                }
            }
        }

        Self {
            preorder,
            postorder,
        }
    }

    /// The vertices in the order they were discovered.
    pub fn preorder(&self) -> &[VertexId] {
        &self.preorder
    }

    /// The vertices in the order they were finished.
    pub fn postorder(&self) -> &[VertexId] {
        &self.postorder
    }

    /// The postorder reversed.
    pub fn reverse_post(&self) -> Vec<VertexId> {
        self.postorder.iter().rev().copied().collect()
    }
}

/// A topological order of a directed graph.
///
/// The order only exists if the graph has no directed cycle.
/// For a cyclic graph, [order](Topological::order) is empty and [is_dag](Topological::is_dag) is false.
/// An empty order alone does not mean that the graph is cyclic,
/// since the order of an empty graph or of [Topological::default()](Topological::default) is empty too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topological {
    order: Vec<VertexId>,
    is_dag: bool,
}

impl Default for Topological {
    /// The topological order of the empty graph.
    fn default() -> Self {
        Self {
            order: Vec::new(),
            is_dag: true,
        }
    }
}

impl Topological {
    /// Checks the graph for directed cycles, and if there are none, computes its topological order.
    pub fn new<Key: Ord, Weight: Num + Copy>(graph: &DirectedGraph<Key, Weight>) -> Self {
        if DirectedCycleDetecting::new(graph).has_cycle() {
            debug!("Graph has a directed cycle, no topological order exists");
            return Self {
                order: Vec::new(),
                is_dag: false,
            };
        }

        let order = DepthFirstOrder::new(graph).reverse_post();
        debug!("Computed topological order of {} vertices", order.len());
        Self {
            order,
            is_dag: true,
        }
    }

    /// Returns the topological order, or an empty slice if the graph has a directed cycle.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Returns true if no directed cycle was found.
    pub fn is_dag(&self) -> bool {
        self.is_dag
    }
}
