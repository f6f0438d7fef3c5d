#![forbid(unsafe_code)]
//! treeforge: scaffold directories from tree diagrams and print directories as tree diagrams.

pub mod cli;
pub mod error;
pub mod materialize;
pub mod render;
pub mod tree;

pub use error::TreeError;
