use log::warn;

// Defaults for parameters
const MIN_VERTICES_DEFAULT: usize = 5;
const VERTEX_SPREAD_DEFAULT: usize = 3;
const EDGE_FACTOR_DEFAULT: usize = 2;
const MAX_WEIGHT_DEFAULT: f64 = 10.0;
const WEIGHT_DIGITS_DEFAULT: u32 = 1;

// Valid minimums/left bounds of parameters
const MIN_VERTICES_MINIMUM: usize = 1;
const VERTEX_SPREAD_MINIMUM: usize = 1;
const EDGE_FACTOR_MINIMUM: usize = 1;
const MAX_WEIGHT_MINIMUM: f64 = 0.0;

// Valid maximums/right bounds of parameters. These keep vertex pair counts within usize.
const MIN_VERTICES_MAXIMUM: usize = 10_000;
const VERTEX_SPREAD_MAXIMUM: usize = 10_000;
const EDGE_FACTOR_MAXIMUM: usize = 100;
// Rounding beyond this is lost in f64 precision anyway
const WEIGHT_DIGITS_MAXIMUM: u32 = 15;

/// The parameters used to generate a random demo graph.
/// Use `RandomGraphParams::default()` for small graphs of 5 to 7 vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomGraphParams {
    pub(crate) min_vertices: usize,
    pub(crate) vertex_spread: usize,
    pub(crate) edge_factor: usize,
    pub(crate) max_weight: f64,
    pub(crate) weight_digits: u32,
    pub(crate) seed: Option<u64>,
}

/// Builder object to set custom graph generation parameters.
pub struct GraphParamBuilder {
    min_vertices: Option<usize>,
    vertex_spread: Option<usize>,
    edge_factor: Option<usize>,
    max_weight: Option<f64>,
    weight_digits: Option<u32>,
    seed: Option<u64>,
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RandomGraphParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn builder() -> GraphParamBuilder {
        GraphParamBuilder {
            min_vertices: None,
            vertex_spread: None,
            edge_factor: None,
            max_weight: None,
            weight_digits: None,
            seed: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl GraphParamBuilder {
    /// Sets the smallest number of vertices a generated graph can have. Defaults to 5.
    ///
    /// # Parameters
    /// * min_vertices - the minimum vertex count, from 1 to 10,000
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn min_vertices(mut self, min_vertices: usize) -> GraphParamBuilder {
        let valid_min_vertices = GraphParamBuilder::validate_input_bounds(
            min_vertices, MIN_VERTICES_MINIMUM, MIN_VERTICES_MAXIMUM, "min_vertices");
        self.min_vertices = Some(valid_min_vertices);
        self
    }

    /// Sets how many different vertex counts are possible. A graph gets between
    /// `min_vertices` and `min_vertices + vertex_spread - 1` vertices, so a spread of 1
    /// fixes the vertex count. Defaults to 3.
    ///
    /// # Parameters
    /// * vertex_spread - the number of possible vertex counts, from 1 to 10,000
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn vertex_spread(mut self, vertex_spread: usize) -> GraphParamBuilder {
        let valid_vertex_spread = GraphParamBuilder::validate_input_bounds(
            vertex_spread, VERTEX_SPREAD_MINIMUM, VERTEX_SPREAD_MAXIMUM, "vertex_spread");
        self.vertex_spread = Some(valid_vertex_spread);
        self
    }

    /// Sets the edge density. A graph with n vertices is asked for between
    /// `edge_factor * n` and `2 * edge_factor * n - 1` edges, capped at the number of
    /// distinct vertex pairs. At most 100. Defaults to 2.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn edge_factor(mut self, edge_factor: usize) -> GraphParamBuilder {
        let valid_edge_factor = GraphParamBuilder::validate_input_bounds(
            edge_factor, EDGE_FACTOR_MINIMUM, EDGE_FACTOR_MAXIMUM, "edge_factor");
        self.edge_factor = Some(valid_edge_factor);
        self
    }

    /// Sets the exclusive upper bound of edge weights. Weights are drawn uniformly from
    /// `[0, max_weight)`. Defaults to 10.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn max_weight(mut self, max_weight: f64) -> GraphParamBuilder {
        let valid_max_weight = if max_weight.is_finite() && max_weight >= MAX_WEIGHT_MINIMUM {
            max_weight
        } else {
            warn!(
                "max_weight ({max_weight}) must be finite and at least {MAX_WEIGHT_MINIMUM}. \
                Set to {MAX_WEIGHT_DEFAULT}."
            );
            MAX_WEIGHT_DEFAULT
        };
        self.max_weight = Some(valid_max_weight);
        self
    }

    /// Sets the number of decimal digits weights are rounded to, half up. Defaults to 1.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn weight_digits(mut self, weight_digits: u32) -> GraphParamBuilder {
        let valid_weight_digits = if weight_digits > WEIGHT_DIGITS_MAXIMUM {
            warn!(
                "weight_digits ({weight_digits}) cannot be higher than \
                {WEIGHT_DIGITS_MAXIMUM}. Set to {WEIGHT_DIGITS_MAXIMUM}."
            );
            WEIGHT_DIGITS_MAXIMUM
        } else {
            weight_digits
        };
        self.weight_digits = Some(valid_weight_digits);
        self
    }

    /// Seeds the random number generator so that the same graph and start vertex are
    /// produced on every run. Unseeded generators draw from OS entropy.
    ///
    /// # Returns
    /// * the graph parameter builder
    pub fn seed(mut self, seed: u64) -> GraphParamBuilder {
        self.seed = Some(seed);
        self
    }

    /// Finishes the building of the parameters. A call to this method is required to exit
    /// the builder pattern.
    ///
    /// # Returns
    /// * The completed graph generation parameters.
    pub fn build(self) -> RandomGraphParams {
        RandomGraphParams {
            min_vertices: self.min_vertices.unwrap_or(MIN_VERTICES_DEFAULT),
            vertex_spread: self.vertex_spread.unwrap_or(VERTEX_SPREAD_DEFAULT),
            edge_factor: self.edge_factor.unwrap_or(EDGE_FACTOR_DEFAULT),
            max_weight: self.max_weight.unwrap_or(MAX_WEIGHT_DEFAULT),
            weight_digits: self.weight_digits.unwrap_or(WEIGHT_DIGITS_DEFAULT),
            seed: self.seed,
        }
    }

    fn validate_input_bounds(
        input_param: usize,
        left_bound: usize,
        right_bound: usize,
        param: &str,
    ) -> usize {
        if input_param < left_bound {
            warn!(
                "{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else if input_param > right_bound {
            warn!(
                "{param} ({input_param}) cannot be higher than {right_bound}. \
                Set to {right_bound}."
            );
            right_bound
        } else {
            input_param
        }
    }
}
