use crate::graph::GraphSource;
use crate::{EdgeId, PrimError, VertexId};
use num_traits::Float;
use std::marker::PhantomData;

pub(crate) struct GraphValidator<'a, T, G> {
    graph: &'a G,
    _weight: PhantomData<T>,
}

impl<'a, T: Float, G: GraphSource<T>> GraphValidator<'a, T, G> {
    pub(crate) fn new(graph: &'a G) -> Self {
        Self { graph, _weight: PhantomData }
    }

    pub(crate) fn validate_graph(&self, start: VertexId) -> Result<(), PrimError> {
        let vertices = self.graph.vertices();
        if vertices.is_empty() {
            return Err(PrimError::EmptyGraph);
        }
        if !self.graph.contains_vertex(start) {
            return Err(PrimError::UnknownVertex(format!(
                "start vertex {start} is not part of the graph"
            )));
        }
        for vertex in vertices {
            for &edge_id in self.graph.incident_edges(vertex) {
                let edge = self.graph.edge(edge_id);
                for endpoint in [edge.source(), edge.target()] {
                    if !self.graph.contains_vertex(endpoint) {
                        return Err(PrimError::UnknownVertex(format!(
                            "{edge_id} ends at {endpoint}, which is not part of the graph"
                        )));
                    }
                }
                self.validate_weight(edge_id, edge.weight())?;
            }
        }
        Ok(())
    }

    fn validate_weight(&self, edge_id: EdgeId, weight: T) -> Result<(), PrimError> {
        if !weight.is_finite() {
            return Err(PrimError::InvalidWeight(format!("{edge_id} has a non-finite weight")));
        }
        if weight < T::zero() {
            return Err(PrimError::InvalidWeight(format!("{edge_id} has a negative weight")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Graph};

    #[test]
    fn empty_graph() {
        let graph: Graph<f64> = Graph::new();
        let result = GraphValidator::new(&graph).validate_graph(VertexId(0));
        assert!(matches!(result, Err(PrimError::EmptyGraph)));
    }

    #[test]
    fn start_outside_graph() {
        let graph: Graph<f64> = Graph::with_vertices(2);
        let result = GraphValidator::new(&graph).validate_graph(VertexId(2));
        assert!(matches!(result, Err(PrimError::UnknownVertex(..))));
    }

    #[test]
    fn negative_and_infinite_weights() {
        let mut graph = Graph::with_vertices(2);
        graph.add_edge(VertexId(0), VertexId(1), -1.0).unwrap();
        let result = GraphValidator::new(&graph).validate_graph(VertexId(0));
        assert!(matches!(result, Err(PrimError::InvalidWeight(..))));

        let mut graph = Graph::with_vertices(2);
        graph.add_edge(VertexId(0), VertexId(1), f32::INFINITY).unwrap();
        let result = GraphValidator::new(&graph).validate_graph(VertexId(0));
        assert!(matches!(result, Err(PrimError::InvalidWeight(..))));
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut graph = Graph::with_vertices(2);
        graph.add_edge(VertexId(0), VertexId(1), 0.0).unwrap();
        assert!(GraphValidator::new(&graph).validate_graph(VertexId(1)).is_ok());
    }

    #[test]
    fn first_bad_edge_in_vertex_order_is_reported() {
        let mut graph = Graph::with_vertices(4);
        graph.add_edge(VertexId(0), VertexId(1), -2.0).unwrap();
        graph.add_edge(VertexId(2), VertexId(3), f64::NAN).unwrap();
        for _ in 0..20 {
            let result = GraphValidator::new(&graph).validate_graph(VertexId(3));
            assert_eq!(
                Err(PrimError::InvalidWeight(String::from("e0 has a negative weight"))),
                result
            );
        }
    }

    /// Two vertices joined by one edge whose target lies outside the graph.
    struct DanglingEdge {
        incident: Vec<EdgeId>,
        edge: Edge<f64>,
    }

    impl GraphSource<f64> for DanglingEdge {
        fn vertices(&self) -> Vec<VertexId> {
            vec![VertexId(0), VertexId(1)]
        }

        fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
            if vertex == VertexId(0) {
                self.incident.as_slice()
            } else {
                &[]
            }
        }

        fn edge(&self, _edge: EdgeId) -> &Edge<f64> {
            &self.edge
        }
    }

    #[test]
    fn edge_leaving_the_graph() {
        let graph = DanglingEdge {
            incident: vec![EdgeId(0)],
            edge: Edge::new(VertexId(0), VertexId(9), 1.0),
        };
        let result = GraphValidator::new(&graph).validate_graph(VertexId(1));
        assert!(matches!(result, Err(PrimError::UnknownVertex(..))));
    }
}
