//! Prim's minimum spanning tree algorithm in Rust, run one edge at a time so that each step
//! can be watched. Generic over floating point edge weights.
//!
//! Starting from a single vertex, Prim's algorithm repeatedly adds the cheapest edge that
//! leaves the tree. After every step each vertex and edge the step touched is reported to a
//! [`ColorSink`] as one of three categories:
//!  1. [`ColorCategory::Tree`] for vertices and edges in the spanning tree;
//!  2. [`ColorCategory::Frontier`] for edges with exactly one endpoint in the tree, the
//!     candidates for the next step; and
//!  3. [`ColorCategory::Loop`] for edges whose endpoints are both in the tree already, which
//!     can never be added without closing a cycle.
//!
//! The sink is paused between steps, which gives a visualiser the chance to redraw and wait
//! for the viewer. Rendering itself is left to the sink.
//!
//! # Examples
//! ```
//!use prim_steps::{ColorCategory, Element, Graph, PrimRunner, RecordingSink};
//!
//!let mut graph = Graph::with_vertices(3);
//!let v = graph.vertex_ids();
//!let ab = graph.add_edge(v[0], v[1], 1.0).unwrap();
//!let bc = graph.add_edge(v[1], v[2], 2.0).unwrap();
//!let ac = graph.add_edge(v[0], v[2], 3.0).unwrap();
//!
//!let mut sink = RecordingSink::new();
//!let tree = PrimRunner::new(&graph, &mut sink).run(v[0]).unwrap();
//!assert_eq!(vec![ab, bc], tree.edges);
//!assert_eq!(3.0, tree.total_weight);
//!assert_eq!(Some(ColorCategory::Loop), sink.color_of(Element::Edge(ac)));
//! ```
//!
//! # References
//! * [Prim, R. C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

pub use crate::data_wrappers::{Edge, EdgeId, SpanningTree, VertexId};
pub use crate::error::PrimError;
pub use crate::generator::RandomGraphGenerator;
pub use crate::graph::{Graph, GraphSource};
pub use crate::graph_params::{GraphParamBuilder, RandomGraphParams};
pub use crate::prim::PrimRunner;
pub use crate::sink::{ColorCategory, ColorSink, ConsoleSink, Element, RecordingSink, SinkEvent};

mod data_wrappers;
mod error;
mod generator;
mod graph;
mod graph_params;
mod prim;
mod sink;
mod validation;
