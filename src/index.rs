use crate::interface::Arc;
use std::collections::btree_set;

/// The id of a vertex.
/// Ids are chosen by the caller and need not be consecutive.
pub type VertexId = usize;

/// An iterator over the neighbor ids stored in a set of arcs.
/// Iterates nothing if the vertex has no arc set.
pub struct NeighborIds<'a, Weight> {
    arcs: Option<btree_set::Iter<'a, Arc<Weight>>>,
}

impl<'a, Weight> NeighborIds<'a, Weight> {
    pub(crate) fn new(arcs: Option<btree_set::Iter<'a, Arc<Weight>>>) -> Self {
        Self { arcs }
    }
}

impl<'a, Weight> Iterator for NeighborIds<'a, Weight> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.arcs.as_mut()?.next().map(Arc::id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.arcs {
            Some(arcs) => arcs.size_hint(),
            None => (0, Some(0)),
        }
    }
}
