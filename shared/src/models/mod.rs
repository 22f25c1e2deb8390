//! Domain models for the farm analytics engine

mod forecast;
mod summary;

pub use forecast::*;
pub use summary::*;
