use crate::index::VertexId;

error_chain! {
    errors {
        DuplicateVertex(id: VertexId) {
            description("duplicate vertex")
            display("vertex {} is already present in the graph", id)
        }
        SelfLoop(id: VertexId) {
            description("self loop")
            display("edge ({}, {}) is a self loop", id, id)
        }
        UnknownVertex(id: VertexId) {
            description("unknown vertex")
            display("vertex {} is not present in the graph", id)
        }
        DuplicateEdge(from: VertexId, to: VertexId) {
            description("duplicate edge")
            display("edge ({}, {}) is already present in the graph", from, to)
        }
        ArcCountMismatch(maintained: usize, recounted: usize) {
            description("arc count mismatch")
            display(
                "the graph maintains {} arcs, but its adjacency contains {}",
                maintained,
                recounted
            )
        }
    }
}
