// Utility functions
pub mod error;
pub mod id;
pub mod validation;

pub use error::*;
pub use id::*;
pub use validation::*;
