//! Upstream data sources.

pub mod toyokeizai;

pub use toyokeizai::*;
