use std::fmt::{Display, Formatter};

/// Opaque identity of a vertex within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// Opaque identity of an edge within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl VertexId {
    /// Wraps a raw index. Only needed when implementing `GraphSource` for your own graph
    /// type; `Graph` hands out its own ids.
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An undirected, weighted edge. Source and target only name the two endpoints;
/// edges are compared by weight alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub(crate) source: VertexId,
    pub(crate) target: VertexId,
    pub(crate) weight: T,
}

impl<T: Copy> Edge<T> {
    pub fn new(source: VertexId, target: VertexId, weight: T) -> Self {
        Edge { source, target, weight }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn weight(&self) -> T {
        self.weight
    }

    /// The endpoint across the edge from `vertex`. For a self-loop this is `vertex` itself.
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// The result of a completed run: the tree edges in the order they were added, the
/// vertices they span, and the summed weight of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    pub edges: Vec<EdgeId>,
    pub vertices: Vec<VertexId>,
    pub total_weight: T,
}

impl<T> SpanningTree<T> {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
