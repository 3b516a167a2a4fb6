use crate::{Graph, RandomGraphParams, VertexId};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Builds small random weighted graphs to demonstrate the spanning tree on, and picks
/// random start vertices from them.
pub struct RandomGraphGenerator {
    params: RandomGraphParams,
    rng: SmallRng,
}

impl RandomGraphGenerator {
    /// # Examples
    /// ```
    ///use prim_steps::{RandomGraphGenerator, RandomGraphParams};
    ///
    ///let params = RandomGraphParams::builder().seed(42).build();
    ///let mut generator = RandomGraphGenerator::new(params);
    ///let graph = generator.generate();
    ///assert!((5..8).contains(&graph.vertex_count()));
    /// ```
    pub fn new(params: RandomGraphParams) -> Self {
        let rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        RandomGraphGenerator { params, rng }
    }

    pub fn generate(&mut self) -> Graph<f64> {
        let n_vertices =
            self.params.min_vertices + self.rng.gen_range(0..self.params.vertex_spread);
        let base_edges = self.params.edge_factor * n_vertices;
        let max_edges = n_vertices * (n_vertices - 1) / 2;
        let n_edges = (base_edges + self.rng.gen_range(0..base_edges)).min(max_edges);

        let mut pair_indices = index::sample(&mut self.rng, max_edges, n_edges).into_vec();
        pair_indices.sort_unstable();
        let mut pairs = vertex_pairs_at(n_vertices, &pair_indices);
        pairs.shuffle(&mut self.rng);

        let mut graph = Graph::with_vertices(n_vertices);
        for (a, b) in pairs {
            let weight = self.random_weight();
            // Both endpoints come from 0..n_vertices
            if let Err(err) = graph.add_edge(VertexId(a), VertexId(b), weight) {
                debug!("Skipping generated edge: {err}");
            }
        }
        debug!("Generated graph with {n_vertices} vertices and {} edges", graph.edge_count());
        graph
    }

    /// A uniformly chosen vertex of `graph`, or `None` if it has no vertices.
    pub fn random_vertex(&mut self, graph: &Graph<f64>) -> Option<VertexId> {
        graph.vertex_ids().choose(&mut self.rng).copied()
    }

    fn random_weight(&mut self) -> f64 {
        let weight = self.rng.gen::<f64>() * self.params.max_weight;
        round_to_digits(weight, self.params.weight_digits)
    }
}

/// Maps sorted positions in the row-major list of vertex pairs `(a, b)` with `a < b` to
/// the pairs themselves, in a single pass over the rows.
pub(crate) fn vertex_pairs_at(
    n_vertices: usize,
    sorted_indices: &[usize],
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(sorted_indices.len());
    let mut row = 0;
    let mut row_start = 0;
    let mut row_len = n_vertices.saturating_sub(1);
    for &position in sorted_indices {
        while position >= row_start + row_len {
            row_start += row_len;
            row += 1;
            row_len -= 1;
        }
        pairs.push((row, row + 1 + position - row_start));
    }
    pairs
}

/// Rounds half up. Only used on non-negative numbers, where `f64::round` agrees.
pub(crate) fn round_to_digits(number: f64, digits: u32) -> f64 {
    let scale = 10_f64.powi(digits as i32);
    (number * scale).round() / scale
}
