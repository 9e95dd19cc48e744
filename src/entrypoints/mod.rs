// Shared modules
pub(crate) mod cli;
pub(crate) mod profiling;
mod run;

// Entry points
pub mod main;
