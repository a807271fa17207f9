//! The graph traits.
//!
//! The traits are split up by access type:
//!  - immutable reference (`ImmutableGraphContainer`)
//!  - mutable reference (`MutableGraphContainer`)
//!
//! Algorithms only ever require the immutable traits, so a graph cannot change while it is analysed.

use crate::error::{ErrorKind, Result};
use crate::implementation::{AdjacencyMap, VertexDictionary};
use crate::index::{NeighborIds, VertexId};
use num_traits::Num;
use std::collections::{btree_map, BTreeSet};

mod entity;

pub use entity::{Arc, Edge, Vertex};

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The orderable key stored in each vertex.
    type VertexKey: Ord;
    /// The numeric weight stored in each edge.
    type Weight: Num + Copy;
}

/// A container of vertices and the arcs between them.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns the vertex dictionary, mapping each vertex id to its vertex.
    fn vertex_dictionary(&self) -> &VertexDictionary<Self::VertexKey>;

    /// Returns the set of accepted edges.
    fn edge_set(&self) -> &BTreeSet<Edge<Self::Weight>>;

    /// Returns the adjacency, mapping each vertex id to the arcs leaving it.
    fn adjacency(&self) -> &AdjacencyMap<Self::Weight>;

    /// Returns the inverse adjacency, mapping each vertex id to the arcs entering it.
    /// This is always empty for undirected graphs.
    fn inverse_adjacency(&self) -> &AdjacencyMap<Self::Weight>;

    /// Returns the amount of arcs maintained incrementally while inserting edges.
    /// Each accepted edge counts once, also in undirected graphs.
    fn arc_count(&self) -> usize;

    /// Returns true if the edges of this graph are directed.
    fn is_directed(&self) -> bool;

    /// Recounts the arcs from the adjacency sets.
    /// The result is not written back, so comparing it to [arc_count](ImmutableGraphContainer::arc_count) detects inconsistencies.
    fn recalculate_arc_count(&self) -> usize {
        let arcs: usize = self.adjacency().values().map(BTreeSet::len).sum();
        if self.is_directed() {
            arcs
        } else {
            arcs / 2
        }
    }

    /// Returns an error if the maintained arc count differs from the recounted one.
    fn verify_arc_count(&self) -> Result<()> {
        let maintained = self.arc_count();
        let recounted = self.recalculate_arc_count();
        if maintained == recounted {
            Ok(())
        } else {
            Err(ErrorKind::ArcCountMismatch(maintained, recounted).into())
        }
    }

    /// Returns the amount of vertices in this graph.
    fn vertex_count(&self) -> usize {
        self.vertex_dictionary().len()
    }

    /// Returns true if this graph contains a vertex with the given id.
    fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_dictionary().contains_key(&id)
    }

    /// Returns the vertex with the given id, or `None` if there is no such vertex.
    fn vertex(&self, id: VertexId) -> Option<&Vertex<Self::VertexKey>> {
        self.vertex_dictionary().get(&id)
    }

    /// Returns an iterator over all vertex ids in ascending order.
    fn vertex_ids(&self) -> btree_map::Keys<'_, VertexId, Vertex<Self::VertexKey>> {
        self.vertex_dictionary().keys()
    }

    /// Returns the arcs leaving the given vertex, or `None` if the vertex is unknown.
    fn out_arcs(&self, id: VertexId) -> Option<&BTreeSet<Arc<Self::Weight>>> {
        self.adjacency().get(&id)
    }

    /// Returns the arcs entering the given vertex.
    /// Undirected graphs store no incoming arcs, so this is `None` for them.
    fn in_arcs(&self, id: VertexId) -> Option<&BTreeSet<Arc<Self::Weight>>> {
        self.inverse_adjacency().get(&id)
    }

    /// Returns an iterator over the ids of the vertices reachable over one outgoing arc.
    fn out_neighbors(&self, id: VertexId) -> NeighborIds<'_, Self::Weight> {
        NeighborIds::new(self.out_arcs(id).map(BTreeSet::iter))
    }

    /// Returns an iterator over the ids of the vertices reaching the given vertex over one arc.
    fn in_neighbors(&self, id: VertexId) -> NeighborIds<'_, Self::Weight> {
        NeighborIds::new(self.in_arcs(id).map(BTreeSet::iter))
    }

    /// Returns the amount of arcs leaving the given vertex.
    fn out_degree(&self, id: VertexId) -> usize {
        self.out_arcs(id).map_or(0, BTreeSet::len)
    }

    /// Returns the amount of arcs entering the given vertex.
    fn in_degree(&self, id: VertexId) -> usize {
        self.in_arcs(id).map_or(0, BTreeSet::len)
    }

    /// Returns true if the adjacency contains an arc `(from, to)`.
    fn contains_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.out_arcs(from)
            .map_or(false, |arcs| arcs.iter().any(|arc| arc.id() == to))
    }
}

/// A container that allows inserting vertices and edges.
/// There is no way to remove either of them.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Inserts the given vertex, failing if its id is already present.
    fn try_add_vertex(&mut self, vertex: Vertex<Self::VertexKey>) -> Result<()>;

    /// Validates and inserts the given edge.
    /// Fails without changing the graph if the edge is a self loop, references an unknown vertex or is already present.
    fn try_add_edge(&mut self, edge: Edge<Self::Weight>) -> Result<()>;

    /// Replaces the key of the vertex with the given id.
    /// Returns false if there is no such vertex.
    fn set_vertex_key(&mut self, id: VertexId, key: Self::VertexKey) -> bool;

    /// Inserts the given vertex.
    /// Returns true if its id was new, and false otherwise, in which case the graph is unchanged.
    fn add_vertex(&mut self, vertex: Vertex<Self::VertexKey>) -> bool {
        match self.try_add_vertex(vertex) {
            Ok(()) => true,
            Err(error) => {
                trace!("Rejected vertex: {}", error);
                false
            }
        }
    }

    /// Inserts the given edge.
    /// Returns true if it was accepted, and false otherwise, in which case the graph is unchanged.
    fn add_edge(&mut self, edge: Edge<Self::Weight>) -> bool {
        match self.try_add_edge(edge) {
            Ok(()) => true,
            Err(error) => {
                trace!("Rejected edge: {}", error);
                false
            }
        }
    }

    /// Inserts a vertex with the given id and a default key.
    fn add_vertex_by_id(&mut self, id: VertexId) -> bool
    where
        Self::VertexKey: Default,
    {
        self.add_vertex(Vertex::new(id, Default::default()))
    }

    /// Inserts an edge `(from, to)` of weight one.
    fn add_edge_between(&mut self, from: VertexId, to: VertexId) -> bool {
        self.add_edge(Edge::unit(from, to))
    }

    /// Builds a graph by first inserting all vertices and then attempting every edge once.
    /// Edges with an endpoint that is not among the vertices are dropped.
    /// If vertices share an id, the first one is kept.
    fn from_vertices_and_edges<
        Vertices: IntoIterator<Item = Vertex<Self::VertexKey>>,
        Edges: IntoIterator<Item = Edge<Self::Weight>>,
    >(
        vertices: Vertices,
        edges: Edges,
    ) -> Self
    where
        Self: Default,
    {
        let mut graph = Self::default();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }

        let mut rejected_edges = 0usize;
        for edge in edges {
            if !graph.add_edge(edge) {
                rejected_edges += 1;
            }
        }

        debug!(
            "Constructed graph with {} vertices and {} arcs, rejected {} edges",
            graph.vertex_count(),
            graph.arc_count(),
            rejected_edges
        );
        graph
    }
}

/// A graph implementing all traits that do not require mutable access.
/// This is a useful shortcut for generic type bounds when the graph should not be mutated.
pub trait StaticGraph: ImmutableGraphContainer {}
impl<T: ImmutableGraphContainer> StaticGraph for T {}

/// A graph implementing all graph traits, including those requiring mutable access.
pub trait DynamicGraph: StaticGraph + MutableGraphContainer {}
impl<T: StaticGraph + MutableGraphContainer> DynamicGraph for T {}
