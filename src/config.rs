//! Configuration loader and schema types.
//!
//! Settings are read-only: they are loaded from the environment and an
//! optional TOML file, and never written back.

mod load;
mod schema;

pub use load::load_settings;
pub use schema::*;
