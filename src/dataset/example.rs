/// A decoded image: pixel intensities normalized to [0, 1), in stream order.
pub type FeatureVector = Vec<f64>;

/// A one-hot class encoding: exactly one entry is 1.0, the rest 0.0, and the
/// index of the 1.0 is the raw class label.
pub type LabelVector = Vec<f64>;

/// One feature/label pair taken from the same ordinal position of an IDX
/// image/label file pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub features: FeatureVector,
    pub label: LabelVector,
}

impl Example {
    pub fn new(features: FeatureVector, label: LabelVector) -> Example {
        Example { features, label }
    }

    /// The class index encoded by the one-hot label, or `None` if the label
    /// vector is not one-hot (no entry equals 1.0). Labels produced by the
    /// decoder always encode a class; hand-built examples may not.
    pub fn class(&self) -> Option<usize> {
        self.label.iter().position(|&v| v == 1.0)
    }
}
