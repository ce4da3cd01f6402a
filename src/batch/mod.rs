pub mod batch;
pub mod organizer;

pub use batch::Batch;
pub use organizer::{organize, ManyBatches};
