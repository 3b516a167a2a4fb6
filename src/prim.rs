use crate::data_wrappers::{Edge, EdgeId, SpanningTree, VertexId};
use crate::graph::GraphSource;
use crate::sink::{ColorCategory, ColorSink, Element};
use crate::validation::GraphValidator;
use crate::PrimError;
use log::{debug, info};
use num_traits::Float;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

/// Cheapest known connecting edge per vertex outside the tree, iterated in the order the
/// vertices were first reached.
#[derive(Debug, Clone, Default)]
struct Frontier {
    order: Vec<VertexId>,
    shortest_edge: HashMap<VertexId, EdgeId>,
}

impl Frontier {
    fn get(&self, vertex: VertexId) -> Option<EdgeId> {
        self.shortest_edge.get(&vertex).copied()
    }

    fn insert(&mut self, vertex: VertexId, edge: EdgeId) {
        if self.shortest_edge.insert(vertex, edge).is_none() {
            self.order.push(vertex);
        }
    }

    fn remove(&mut self, vertex: VertexId) {
        if self.shortest_edge.remove(&vertex).is_some() {
            self.order.retain(|v| *v != vertex);
        }
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.order.iter().filter_map(|vertex| self.shortest_edge.get(vertex).copied())
    }
}

/// Grows a minimum spanning tree with Prim's algorithm one edge at a time, reporting each
/// vertex and edge classification to a [`ColorSink`]. Generic over floating point weights.
///
/// The runner owns all of the algorithm's state. Build one per run.
pub struct PrimRunner<'g, T, G, S> {
    graph: &'g G,
    sink: S,
    tree_edges: Vec<EdgeId>,
    tree_edge_set: HashSet<EdgeId>,
    tree_vertices: HashSet<VertexId>,
    frontier: Frontier,
    _weight: PhantomData<T>,
}

impl<'g, T, G, S> PrimRunner<'g, T, G, S>
where
    T: Float,
    G: GraphSource<T>,
    S: ColorSink,
{
    /// Creates a runner over `graph` with an empty tree.
    ///
    /// # Parameters
    /// * `graph` - the weighted, undirected graph to span. Weights must be finite and
    ///             non-negative.
    /// * `sink` - receives the colour of every vertex and edge as the tree grows. Pass
    ///            `&mut sink` to keep ownership of it.
    ///
    /// # Examples
    /// ```
    ///use prim_steps::{Graph, PrimRunner, RecordingSink};
    ///
    ///let mut graph = Graph::with_vertices(3);
    ///let v = graph.vertex_ids();
    ///let ab = graph.add_edge(v[0], v[1], 1.0).unwrap();
    ///let bc = graph.add_edge(v[1], v[2], 2.0).unwrap();
    ///graph.add_edge(v[0], v[2], 3.0).unwrap();
    ///
    ///let mut runner = PrimRunner::new(&graph, RecordingSink::new());
    ///runner.initialize(v[0]).unwrap();
    ///assert_eq!(Some(ab), runner.step());
    ///assert_eq!(Some(bc), runner.step());
    ///assert_eq!(None, runner.step());
    /// ```
    pub fn new(graph: &'g G, sink: S) -> Self {
        PrimRunner {
            graph,
            sink,
            tree_edges: Vec::new(),
            tree_edge_set: HashSet::new(),
            tree_vertices: HashSet::new(),
            frontier: Frontier::default(),
            _weight: PhantomData,
        }
    }

    /// Plants the tree at `start`: the vertex joins the tree and its incident edges become
    /// the first frontier.
    ///
    /// # Returns
    /// * An error if the graph is empty, `start` is not one of its vertices, an edge has a
    ///   negative or non-finite weight, or the runner has already been initialized.
    pub fn initialize(&mut self, start: VertexId) -> Result<(), PrimError> {
        if !self.tree_vertices.is_empty() {
            return Err(PrimError::AlreadyInitialized);
        }
        GraphValidator::new(self.graph).validate_graph(start)?;
        debug!("Starting spanning tree at {start}");
        self.add_vertex(start);
        Ok(())
    }

    /// Adds the cheapest frontier edge to the tree.
    ///
    /// # Returns
    /// * The edge added, or `None` once no edge leaves the tree. At that point every vertex
    ///   reachable from the start is in the tree and further calls change nothing.
    pub fn step(&mut self) -> Option<EdgeId> {
        let edge_id = self.shortest_frontier_edge()?;
        let edge = *self.graph.edge(edge_id);

        self.tree_edges.push(edge_id);
        self.tree_edge_set.insert(edge_id);
        for endpoint in [edge.target(), edge.source()] {
            if !self.tree_vertices.contains(&endpoint) {
                self.add_vertex(endpoint);
            }
        }
        self.sink.set_color(Element::Edge(edge_id), ColorCategory::Tree);
        debug!(
            "Added {edge_id} ({} - {}) to spanning tree, {} vertices spanned",
            edge.source(),
            edge.target(),
            self.tree_vertices.len()
        );
        Some(edge_id)
    }

    /// Runs the whole algorithm from `start`, pausing the sink before every step.
    ///
    /// # Returns
    /// * The finished spanning tree of the component containing `start`, or the error
    ///   reported by [`PrimRunner::initialize`].
    pub fn run(&mut self, start: VertexId) -> Result<SpanningTree<T>, PrimError> {
        self.initialize(start)?;
        loop {
            self.sink.pause();
            if self.step().is_none() {
                break;
            }
        }
        let tree = self.spanning_tree();
        info!(
            "No more edges to add to spanning tree: {} edges span {} vertices",
            tree.edge_count(),
            tree.vertex_count()
        );
        Ok(tree)
    }

    pub fn is_finished(&self) -> bool {
        !self.tree_vertices.is_empty() && self.shortest_frontier_edge().is_none()
    }

    /// Tree edges in the order they were added.
    pub fn tree_edges(&self) -> &[EdgeId] {
        &self.tree_edges
    }

    pub fn tree_vertices(&self) -> &HashSet<VertexId> {
        &self.tree_vertices
    }

    /// The cheapest edge found so far that connects `vertex` to the tree, if `vertex` is
    /// outside the tree and reachable from it.
    pub fn frontier_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.frontier.get(vertex)
    }

    pub fn spanning_tree(&self) -> SpanningTree<T> {
        let mut vertices: Vec<VertexId> = self.tree_vertices.iter().copied().collect();
        vertices.sort();
        let total_weight = self
            .tree_edges
            .iter()
            .map(|&edge_id| self.weight_of(edge_id))
            .fold(T::zero(), std::ops::Add::add);
        SpanningTree { edges: self.tree_edges.clone(), vertices, total_weight }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn add_vertex(&mut self, vertex: VertexId) {
        self.tree_vertices.insert(vertex);
        self.frontier.remove(vertex);

        self.refresh_frontier(vertex);
        self.highlight_frontier_edges(vertex);
        self.lowlight_loop_edges(vertex);

        self.sink.set_color(Element::Vertex(vertex), ColorCategory::Tree);
    }

    fn refresh_frontier(&mut self, added_vertex: VertexId) {
        let graph = self.graph;
        for &edge_id in graph.incident_edges(added_vertex) {
            let edge = graph.edge(edge_id);
            if !self.is_frontier_edge(edge) {
                continue;
            }
            let neighbour = edge.opposite(added_vertex);
            match self.frontier.get(neighbour) {
                Some(current) if !(edge.weight() < self.weight_of(current)) => {}
                _ => {
                    debug!("Shortest known edge to {neighbour} is now {edge_id}");
                    self.frontier.insert(neighbour, edge_id);
                }
            }
        }
    }

    fn highlight_frontier_edges(&mut self, vertex: VertexId) {
        let graph = self.graph;
        for &edge_id in graph.incident_edges(vertex) {
            if self.is_frontier_edge(graph.edge(edge_id)) {
                self.sink.set_color(Element::Edge(edge_id), ColorCategory::Frontier);
            }
        }
    }

    fn lowlight_loop_edges(&mut self, vertex: VertexId) {
        let graph = self.graph;
        for &edge_id in graph.incident_edges(vertex) {
            if self.is_loop_edge(edge_id) {
                self.sink.set_color(Element::Edge(edge_id), ColorCategory::Loop);
            }
        }
    }

    fn shortest_frontier_edge(&self) -> Option<EdgeId> {
        self.frontier
            .edges()
            .filter(|&edge_id| self.is_frontier_edge(self.graph.edge(edge_id)))
            .fold(None, |shortest, edge_id| match shortest {
                Some(current) if !(self.weight_of(edge_id) < self.weight_of(current)) => {
                    Some(current)
                }
                _ => Some(edge_id),
            })
    }

    fn is_frontier_edge(&self, edge: &Edge<T>) -> bool {
        self.tree_vertices.contains(&edge.source()) ^ self.tree_vertices.contains(&edge.target())
    }

    fn is_loop_edge(&self, edge_id: EdgeId) -> bool {
        let edge = self.graph.edge(edge_id);
        !self.tree_edge_set.contains(&edge_id)
            && self.tree_vertices.contains(&edge.source())
            && self.tree_vertices.contains(&edge.target())
    }

    fn weight_of(&self, edge_id: EdgeId) -> T {
        self.graph.edge(edge_id).weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, RecordingSink};

    fn star_with_two_cheap_spokes() -> Graph<f64> {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(VertexId(0), VertexId(1), 1.0).unwrap();
        graph.add_edge(VertexId(0), VertexId(2), 1.0).unwrap();
        graph
    }

    #[test]
    fn frontier_keeps_insertion_order() {
        let mut frontier = Frontier::default();
        frontier.insert(VertexId(4), EdgeId(0));
        frontier.insert(VertexId(1), EdgeId(1));
        frontier.insert(VertexId(4), EdgeId(2));
        assert_eq!(vec![EdgeId(2), EdgeId(1)], frontier.edges().collect::<Vec<_>>());

        frontier.remove(VertexId(4));
        assert_eq!(vec![EdgeId(1)], frontier.edges().collect::<Vec<_>>());
        assert_eq!(None, frontier.get(VertexId(4)));
    }

    #[test]
    fn initialize_records_cheapest_parallel_edge() {
        let mut graph = Graph::with_vertices(2);
        graph.add_edge(VertexId(0), VertexId(1), 5.0).unwrap();
        let cheap = graph.add_edge(VertexId(0), VertexId(1), 2.0).unwrap();
        graph.add_edge(VertexId(0), VertexId(1), 2.0).unwrap();

        let mut runner = PrimRunner::new(&graph, RecordingSink::new());
        runner.initialize(VertexId(0)).unwrap();
        assert_eq!(Some(cheap), runner.frontier_edge(VertexId(1)));
        assert_eq!(None, runner.frontier_edge(VertexId(0)));
    }

    #[test]
    fn equal_weights_pick_first_reached() {
        let graph = star_with_two_cheap_spokes();
        let mut runner = PrimRunner::new(&graph, RecordingSink::new());
        runner.initialize(VertexId(0)).unwrap();
        assert_eq!(Some(EdgeId(0)), runner.step());
        assert_eq!(Some(EdgeId(1)), runner.step());
        assert_eq!(None, runner.step());
    }

    #[test]
    fn initialize_twice() {
        let graph = star_with_two_cheap_spokes();
        let mut runner = PrimRunner::new(&graph, RecordingSink::new());
        runner.initialize(VertexId(0)).unwrap();
        let result = runner.initialize(VertexId(1));
        assert!(matches!(result, Err(PrimError::AlreadyInitialized)));
        assert_eq!(1, runner.tree_vertices().len());
    }

    #[test]
    fn frontier_entry_dropped_when_vertex_joins() {
        let graph = star_with_two_cheap_spokes();
        let mut runner = PrimRunner::new(&graph, RecordingSink::new());
        runner.initialize(VertexId(0)).unwrap();
        runner.step();
        assert_eq!(None, runner.frontier_edge(VertexId(1)));
        assert_eq!(Some(EdgeId(1)), runner.frontier_edge(VertexId(2)));
    }

    #[test]
    fn self_loop_is_lowlighted_at_start() {
        let mut graph = Graph::with_vertices(1);
        let self_loop = graph.add_edge(VertexId(0), VertexId(0), 1.0).unwrap();

        let mut runner = PrimRunner::new(&graph, RecordingSink::new());
        runner.initialize(VertexId(0)).unwrap();
        assert!(runner.is_finished());
        assert_eq!(
            Some(ColorCategory::Loop),
            runner.sink().color_of(Element::Edge(self_loop))
        );
    }

    #[test]
    fn not_finished_before_initialize() {
        let graph = star_with_two_cheap_spokes();
        let runner = PrimRunner::new(&graph, RecordingSink::new());
        assert!(!runner.is_finished());
    }
}
