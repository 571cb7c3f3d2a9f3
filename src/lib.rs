pub mod error;
pub mod geometry;
pub mod math;
pub mod network;
pub mod operations;

pub use error::{Result, RiverineError};
