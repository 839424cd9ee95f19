//! Batch image resizing shared by the `fixed-resize` and `proportional-resize` tools.
//! This interface is unstable and subject to change at any time.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parsers;
pub mod cli;
pub mod decode;
pub mod encode;
pub mod error;
pub mod fixed;
pub mod image;
pub mod init;
pub mod mirror;
pub mod naming;
pub mod operations;
pub mod progress;
pub mod proportional;
mod utils;
