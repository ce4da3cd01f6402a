pub mod example;
pub mod idx;

pub use example::{Example, FeatureVector, LabelVector};
pub use idx::{decode_images, decode_labels, load_examples};
