//! CLI subcommands

pub mod browse;
pub mod query;
pub mod serve;
