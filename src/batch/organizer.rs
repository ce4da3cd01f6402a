use crate::batch::batch::Batch;
use crate::dataset::example::Example;
use crate::error::DataError;

/// An ordered partition of a dataset into batches, plus the aggregate shape
/// metadata the training engine validates against before any numeric work.
///
/// Invariants (upheld by [`organize`], the only constructor):
/// - per-batch lengths sum to `total_vectors`
/// - every contained feature vector has length `vector_size`
/// - every contained label vector has length `label_size`
#[derive(Debug, Clone, PartialEq)]
pub struct ManyBatches {
    batches: Vec<Batch>,
    total_vectors: usize,
    vector_size: usize,
    label_size: usize,
}

impl ManyBatches {
    /// Number of batches, including empty ones.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Total example count across all batches.
    pub fn total_vectors(&self) -> usize {
        self.total_vectors
    }

    /// Shared feature vector length.
    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    /// Shared label vector length.
    pub fn label_size(&self) -> usize {
        self.label_size
    }

    pub fn get(&self, index: usize) -> Option<&Batch> {
        self.batches.get(index)
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Batch> {
        self.batches.iter()
    }
}

impl<'a> IntoIterator for &'a ManyBatches {
    type Item = &'a Batch;
    type IntoIter = std::slice::Iter<'a, Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}

/// Partitions `examples` into `num_batches` contiguous, order-preserving
/// batches.
///
/// Balanced partition: the first `N mod K` batches hold `ceil(N/K)` examples,
/// the rest `floor(N/K)`, which keeps per-batch sizes within one of each
/// other. When `num_batches > N` this degenerates to `N` singleton batches
/// followed by empty ones; empty batches are allowed and still report the
/// shared vector sizes.
///
/// Fails with [`DataError::InvalidBatchCount`] when `num_batches == 0` and
/// with [`DataError::InconsistentVectorSize`] when the examples do not share
/// a single feature (or label) vector length. No example is duplicated,
/// dropped, or reordered; the same input always yields the same partition.
pub fn organize(examples: Vec<Example>, num_batches: usize) -> Result<ManyBatches, DataError> {
    if num_batches == 0 {
        return Err(DataError::InvalidBatchCount(num_batches));
    }

    let vector_size = examples.first().map_or(0, |e| e.features.len());
    let label_size = examples.first().map_or(0, |e| e.label.len());
    for (index, example) in examples.iter().enumerate() {
        if example.features.len() != vector_size {
            return Err(DataError::InconsistentVectorSize {
                index,
                expected: vector_size,
                actual: example.features.len(),
            });
        }
        if example.label.len() != label_size {
            return Err(DataError::InconsistentVectorSize {
                index,
                expected: label_size,
                actual: example.label.len(),
            });
        }
    }

    let total = examples.len();
    let base = total / num_batches;
    let remainder = total % num_batches;

    let mut batches = Vec::with_capacity(num_batches);
    let mut drain = examples.into_iter();
    for i in 0..num_batches {
        let size = if i < remainder { base + 1 } else { base };
        let chunk: Vec<Example> = drain.by_ref().take(size).collect();
        batches.push(Batch::new(chunk, vector_size, label_size));
    }
    debug_assert!(drain.next().is_none());

    Ok(ManyBatches {
        batches,
        total_vectors: total,
        vector_size,
        label_size,
    })
}
