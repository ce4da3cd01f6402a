pub mod batch;
pub mod dataset;
pub mod error;
pub mod math;
pub mod network;

// Convenience re-exports
pub use batch::batch::Batch;
pub use batch::organizer::{organize, ManyBatches};
pub use dataset::example::{Example, FeatureVector, LabelVector};
pub use dataset::idx::{decode_images, decode_labels, load_examples};
pub use error::DataError;
pub use math::matrix::Matrix;
pub use network::params::NetworkParameters;
pub use network::shape::{NetworkShape, ParameterShape, ParameterShapeSet};
