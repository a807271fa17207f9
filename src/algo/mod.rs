/// Bipartiteness testing of undirected graphs.
pub mod bipartite;
/// Algorithms related to graph components, i.e. connected components and strongly connected components.
pub mod components;
/// Cycle detection in directed and undirected graphs.
pub mod cycles;
/// Depth-first vertex orders and topological sorting.
pub mod order;
/// Single- and multi-source path searches.
pub mod paths;
/// Algorithms to create certain parameterisable graph classes, like chains or binary trees.
pub mod predefined_graphs;
/// Multi-source reachability in directed graphs.
pub mod reachability;
/// Algorithms for graph traversals, i.e. depth first search with pre- and postorder events as well as breadth first search.
pub mod traversal;
