use serde::{Deserialize, Serialize};

use crate::batch::organizer::ManyBatches;
use crate::error::DataError;

/// Expected shape of one layer transition's parameters.
///
/// For a transition from a layer of width `n_in` to one of width `n_out`:
/// - `weight` is `(n_out, n_in)` — rows index output neurons
/// - `bias` is the output width `n_out`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterShape {
    pub weight: (usize, usize),
    pub bias: usize,
}

/// The ordered parameter shapes of a whole network: exactly one
/// (weight, bias) pair per layer transition, input to output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterShapeSet {
    shapes: Vec<ParameterShape>,
}

impl ParameterShapeSet {
    /// Number of layer transitions (one less than the layer count).
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, transition: usize) -> Option<&ParameterShape> {
        self.shapes.get(transition)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterShape> {
        self.shapes.iter()
    }
}

/// A fully serializable description of a feedforward network's topology:
/// the width of each layer, input to output.
///
/// `NetworkShape` can be saved to / loaded from JSON independently of any
/// numeric parameter storage, making it possible to store architecture
/// configurations before training starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkShape {
    layers: Vec<usize>,
}

impl NetworkShape {
    /// Builds a shape from ordered layer widths.
    ///
    /// Requires at least two layers (input and output) and strictly positive
    /// widths; anything else is [`DataError::InvalidLayerSpec`].
    pub fn new(layers: Vec<usize>) -> Result<NetworkShape, DataError> {
        if layers.len() < 2 {
            return Err(DataError::InvalidLayerSpec(format!(
                "need at least 2 layers, got {}",
                layers.len()
            )));
        }
        if let Some(pos) = layers.iter().position(|&w| w == 0) {
            return Err(DataError::InvalidLayerSpec(format!(
                "layer {} has width 0",
                pos
            )));
        }
        Ok(NetworkShape { layers })
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    /// Width of the input layer.
    pub fn input_size(&self) -> usize {
        self.layers[0]
    }

    /// Width of the output layer.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// Number of layer transitions, i.e. weight/bias pairs.
    pub fn transitions(&self) -> usize {
        self.layers.len() - 1
    }

    /// The expected parameter shapes, ordered input to output: transition
    /// `i` has weight shape `(layers[i+1], layers[i])` and bias length
    /// `layers[i+1]`.
    pub fn parameter_shapes(&self) -> ParameterShapeSet {
        let shapes = self
            .layers
            .windows(2)
            .map(|w| ParameterShape {
                weight: (w[1], w[0]),
                bias: w[1],
            })
            .collect();
        ParameterShapeSet { shapes }
    }

    /// Checks a batched dataset against this topology before any numeric
    /// work starts.
    ///
    /// The shared feature vector size must equal the input layer width and
    /// the shared label vector size must equal the output layer width; any
    /// disagreement is a [`DataError::ShapeMismatch`]. Catching this here is
    /// what keeps a mismatch from surfacing mid-training.
    pub fn validate_batches(&self, batches: &ManyBatches) -> Result<(), DataError> {
        if batches.vector_size() != self.input_size() {
            return Err(DataError::ShapeMismatch {
                what: "input vector size",
                expected: self.input_size(),
                actual: batches.vector_size(),
            });
        }
        if batches.label_size() != self.output_size() {
            return Err(DataError::ShapeMismatch {
                what: "label vector size",
                expected: self.output_size(),
                actual: batches.label_size(),
            });
        }
        Ok(())
    }

    /// Serializes the shape to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkShape` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkShape> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
