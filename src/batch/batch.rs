use crate::dataset::example::Example;
use crate::math::matrix::Matrix;

/// A contiguous block of examples that share one feature vector size and one
/// label vector size.
///
/// A batch may be empty (the organizer can produce empty batches when more
/// batches are requested than examples exist); an empty batch still reports
/// the partition's shared vector sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    examples: Vec<Example>,
    vector_size: usize,
    label_size: usize,
}

impl Batch {
    pub(crate) fn new(examples: Vec<Example>, vector_size: usize, label_size: usize) -> Batch {
        debug_assert!(examples
            .iter()
            .all(|e| e.features.len() == vector_size && e.label.len() == label_size));
        Batch {
            examples,
            vector_size,
            label_size,
        }
    }

    /// Number of examples held by this batch.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Shared length of every feature vector in the batch.
    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    /// Shared length of every label vector in the batch.
    pub fn label_size(&self) -> usize {
        self.label_size
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Features packed column-per-example: shape `(vector_size, len)`.
    ///
    /// This is the layout a batched forward pass consumes — multiplying a
    /// `(next_layer, vector_size)` weight matrix by this gives one output
    /// column per example.
    pub fn feature_matrix(&self) -> Matrix {
        let rows = (0..self.vector_size)
            .map(|row| self.examples.iter().map(|e| e.features[row]).collect())
            .collect();
        Matrix::from_rows(rows)
    }

    /// One-hot labels packed column-per-example: shape `(label_size, len)`.
    pub fn label_matrix(&self) -> Matrix {
        let rows = (0..self.label_size)
            .map(|row| self.examples.iter().map(|e| e.label[row]).collect())
            .collect();
        Matrix::from_rows(rows)
    }
}
