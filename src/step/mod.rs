// Build step stages
pub mod payload_loader;
pub mod reporter;
pub mod artifact_writer;
pub mod build_step;

pub use payload_loader::*;
pub use reporter::*;
pub use artifact_writer::*;
pub use build_step::*;
