//! Library side of the `asset-register` command-line tool.

pub mod config;
pub mod logging;
pub mod report;
