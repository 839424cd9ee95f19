//! Strict parsers for command-line argument values.

mod extension;
pub use extension::*;
mod filter;
pub use filter::*;
mod size;
pub use size::*;
