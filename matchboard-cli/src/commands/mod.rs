//! CLI subcommand implementations

pub mod load;
pub mod seed;
pub mod serve;
