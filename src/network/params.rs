use crate::math::matrix::Matrix;
use crate::network::shape::NetworkShape;

/// Owned numeric storage for a network's weights and biases, one pair per
/// layer transition.
///
/// Transition `i` holds a `(layers[i+1], layers[i])` weight matrix and a
/// `(layers[i+1], 1)` bias column, matching [`NetworkShape::parameter_shapes`].
/// The struct exclusively owns all of its matrices; the training engine
/// mutates them in place through the `_mut` accessors and everything is
/// released when the value is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParameters {
    shape: NetworkShape,
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
}

impl NetworkParameters {
    /// Allocates zero-initialized parameters for `shape`.
    pub fn zeros(shape: &NetworkShape) -> NetworkParameters {
        Self::build(shape, Matrix::zeros)
    }

    /// Allocates parameters with uniform random entries in [-1, 1).
    pub fn random(shape: &NetworkShape) -> NetworkParameters {
        Self::build(shape, Matrix::random)
    }

    fn build(shape: &NetworkShape, init: fn(usize, usize) -> Matrix) -> NetworkParameters {
        let mut weights = Vec::with_capacity(shape.transitions());
        let mut biases = Vec::with_capacity(shape.transitions());
        for ps in shape.parameter_shapes().iter() {
            let (rows, cols) = ps.weight;
            weights.push(init(rows, cols));
            biases.push(init(ps.bias, 1));
        }
        NetworkParameters {
            shape: shape.clone(),
            weights,
            biases,
        }
    }

    pub fn shape(&self) -> &NetworkShape {
        &self.shape
    }

    /// Number of weight/bias pairs.
    pub fn transitions(&self) -> usize {
        self.weights.len()
    }

    pub fn weight(&self, transition: usize) -> &Matrix {
        &self.weights[transition]
    }

    pub fn weight_mut(&mut self, transition: usize) -> &mut Matrix {
        &mut self.weights[transition]
    }

    pub fn bias(&self, transition: usize) -> &Matrix {
        &self.biases[transition]
    }

    pub fn bias_mut(&mut self, transition: usize) -> &mut Matrix {
        &mut self.biases[transition]
    }
}
