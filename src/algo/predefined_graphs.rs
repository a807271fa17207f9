use crate::index::VertexId;
use crate::interface::{DynamicGraph, Edge, Vertex};
use rand::Rng;

/// Returns the smallest id that is larger than all ids in the graph.
fn next_free_id<Graph: DynamicGraph>(graph: &Graph) -> VertexId {
    graph.vertex_ids().next_back().map_or(0, |&id| id + 1)
}

/// Adds `amount` new vertices with consecutive ids after the largest id of the graph and returns their ids.
pub fn add_vertices<Graph: DynamicGraph>(graph: &mut Graph, amount: usize) -> Vec<VertexId>
where
    Graph::VertexKey: Default,
{
    let first = next_free_id(graph);
    (first..first + amount)
        .filter(|&id| graph.add_vertex(Vertex::new(id, Default::default())))
        .collect()
}

/// Adds a chain of the given amount of vertices to the graph, connected by edges from each vertex to the next.
/// Returns the first vertex of the chain, or `None` if the length is zero.
pub fn create_chain<Graph: DynamicGraph>(graph: &mut Graph, length: usize) -> Option<VertexId>
where
    Graph::VertexKey: Default,
{
    let vertices = add_vertices(graph, length);
    for pair in vertices.windows(2) {
        graph.add_edge(Edge::unit(pair[0], pair[1]));
    }
    vertices.first().copied()
}

/// Adds a binary tree to the given graph, with edges from parents to children.
/// The first added vertex is the root of the tree.
/// A negative depth adds no vertices to the graph, a depth of 0 just the root, a depth of 1 the root and its children, and so on.
pub fn create_binary_tree<Graph: DynamicGraph>(graph: &mut Graph, depth: i32) -> Option<VertexId>
where
    Graph::VertexKey: Default,
{
    if depth < 0 {
        return None;
    }

    let root = *add_vertices(graph, 1).first()?;
    let mut layer = vec![root];
    for _ in 0..depth {
        let children = add_vertices(graph, layer.len() * 2);
        for (parent, pair) in layer.iter().zip(children.chunks(2)) {
            for &child in pair {
                graph.add_edge(Edge::unit(*parent, child));
            }
        }
        layer = children;
    }
    Some(root)
}

/// Adds a random directed acyclic graph with the given amount of vertices and edges.
/// Edges always point from an earlier added vertex to a later one, so the result is acyclic in a directed graph.
/// The amount of edges is capped at the amount of possible vertex pairs.
/// Returns the ids of the added vertices.
pub fn create_random_dag<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    vertex_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) -> Vec<VertexId>
where
    Graph::VertexKey: Default,
{
    let vertices = add_vertices(graph, vertex_amount);
    let possible_edges = vertex_amount * vertex_amount.saturating_sub(1) / 2;
    let mut remaining = edge_amount.min(possible_edges);

    while remaining > 0 {
        let a = random.gen_range(0, vertex_amount);
        let b = random.gen_range(0, vertex_amount);
        if a == b {
            continue;
        }
        let (start, end) = (a.min(b), a.max(b));
        if graph.add_edge(Edge::unit(vertices[start], vertices[end])) {
            remaining -= 1;
        }
    }

    vertices
}

/// Adds a random graph with the given amount of vertices and at most the given amount of edges.
/// Each edge has a uniformly chosen tail and head, rejected candidates are not retried.
/// Returns the ids of the added vertices.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    vertex_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) -> Vec<VertexId>
where
    Graph::VertexKey: Default,
{
    let vertices = add_vertices(graph, vertex_amount);
    if vertices.is_empty() {
        return vertices;
    }

    for _ in 0..edge_amount {
        let start = vertices[random.gen_range(0, vertex_amount)];
        let end = vertices[random.gen_range(0, vertex_amount)];
        graph.add_edge(Edge::unit(start, end));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::{create_binary_tree, create_chain, create_random_dag, create_random_graph};
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer};
    use crate::{DirectedGraph, UndirectedGraph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chain_appends_after_existing_ids() {
        let mut graph = DirectedGraph::<(), i32>::new();
        graph.add_vertex_by_id(4);
        assert_eq!(create_chain(&mut graph, 3), Some(5));
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.contains_arc(5, 6));
        assert!(graph.contains_arc(6, 7));
        assert_eq!(graph.arc_count(), 2);
        assert_eq!(create_chain(&mut graph, 0), None);
    }

    #[test]
    fn test_binary_tree() {
        let mut graph = UndirectedGraph::<(), i32>::new();
        assert_eq!(create_binary_tree(&mut graph, -1), None);
        assert_eq!(create_binary_tree(&mut graph, 3), Some(0));
        assert_eq!(graph.vertex_count(), 15);
        assert_eq!(graph.arc_count(), 14);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(1), 3);
    }

    #[test]
    fn test_random_dag_has_requested_edges() {
        let mut random = StdRng::seed_from_u64(5);
        let mut graph = DirectedGraph::<(), i32>::new();
        let vertices = create_random_dag(&mut graph, 20, 50, &mut random);
        assert_eq!(vertices.len(), 20);
        assert_eq!(graph.arc_count(), 50);
        for edge in graph.edge_set() {
            assert!(edge.start_id() < edge.end_id());
        }

        let mut small = DirectedGraph::<(), i32>::new();
        create_random_dag(&mut small, 3, 100, &mut random);
        assert_eq!(small.arc_count(), 3);
    }

    #[test]
    fn test_random_graph() {
        let mut random = StdRng::seed_from_u64(6);
        let mut graph = DirectedGraph::<(), i32>::new();
        create_random_graph(&mut graph, 10, 30, &mut random);
        assert_eq!(graph.vertex_count(), 10);
        assert!(graph.arc_count() <= 30);
        assert!(graph.verify_arc_count().is_ok());
    }
}
