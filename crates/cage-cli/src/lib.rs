//! CLI library components for the cage partition tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
