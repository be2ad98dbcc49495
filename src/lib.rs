pub mod step;
pub mod cli;
pub mod utils;

pub use step::*;
pub use cli::*;
pub use utils::*;
