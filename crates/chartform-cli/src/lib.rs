//! Command-line front end for the chartform engine.

pub mod cli;
pub mod commands;
pub mod ingest;
pub mod logging;
