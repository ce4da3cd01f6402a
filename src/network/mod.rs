pub mod params;
pub mod shape;

pub use params::NetworkParameters;
pub use shape::{NetworkShape, ParameterShape, ParameterShapeSet};
