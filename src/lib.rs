pub mod cs;
pub mod error;

pub use cs::combinatorial;
pub use error::{Error, Result};
