use crate::data_wrappers::{Edge, EdgeId, VertexId};
use crate::PrimError;

/// Read access to a weighted, undirected graph, as needed by the spanning tree runner.
///
/// Implementations may panic when asked about a vertex or edge id they did not hand out.
/// The runner only asks about ids reachable from `vertices()`.
pub trait GraphSource<T> {
    /// Every vertex of the graph.
    fn vertices(&self) -> Vec<VertexId>;

    /// Ids of the edges touching `vertex`, in a stable order. A self-loop is listed once.
    fn incident_edges(&self, vertex: VertexId) -> &[EdgeId];

    /// The endpoints and weight of an edge.
    fn edge(&self, edge: EdgeId) -> &Edge<T>;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices().contains(&vertex)
    }
}

/// An adjacency list graph. Vertices and edges are numbered in the order they are added.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    adjacency: Vec<Vec<EdgeId>>,
    edges: Vec<Edge<T>>,
}

impl<T: Copy> Graph<T> {
    pub fn new() -> Self {
        Graph { adjacency: Vec::new(), edges: Vec::new() }
    }

    /// Creates a graph with `n_vertices` isolated vertices, numbered `0..n_vertices`.
    ///
    /// # Examples
    /// ```
    ///use prim_steps::Graph;
    ///
    ///let mut graph = Graph::with_vertices(3);
    ///let vertices = graph.vertex_ids();
    ///graph.add_edge(vertices[0], vertices[1], 2.5).unwrap();
    ///assert_eq!(3, graph.vertex_count());
    ///assert_eq!(1, graph.edge_count());
    /// ```
    pub fn with_vertices(n_vertices: usize) -> Self {
        Graph { adjacency: vec![Vec::new(); n_vertices], edges: Vec::new() }
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(Vec::new());
        VertexId(self.adjacency.len() - 1)
    }

    /// Joins two existing vertices with an undirected edge.
    ///
    /// # Returns
    /// * The id of the new edge, or `PrimError::UnknownVertex` if either endpoint was not
    ///   created by this graph.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: T,
    ) -> Result<EdgeId, PrimError> {
        for endpoint in [source, target] {
            if endpoint.0 >= self.adjacency.len() {
                return Err(PrimError::UnknownVertex(format!(
                    "{endpoint} cannot be joined, the graph has {} vertices",
                    self.adjacency.len()
                )));
            }
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(source, target, weight));
        self.adjacency[source.0].push(id);
        if source != target {
            self.adjacency[target.0].push(id);
        }
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        (0..self.adjacency.len()).map(VertexId).collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<T>)> {
        self.edges.iter().enumerate().map(|(n, edge)| (EdgeId(n), edge))
    }
}

impl<T: Copy> Default for Graph<T> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<T: Copy> GraphSource<T> for Graph<T> {
    fn vertices(&self) -> Vec<VertexId> {
        self.vertex_ids()
    }

    fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.adjacency[vertex.0]
    }

    fn edge(&self, edge: EdgeId) -> &Edge<T> {
        &self.edges[edge.0]
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.adjacency.len()
    }
}
