//! Audio file discovery and the per-track record model.

mod model;
mod scan;

pub use model::*;
pub use scan::{discover, shuffle};

#[cfg(test)]
mod tests;
