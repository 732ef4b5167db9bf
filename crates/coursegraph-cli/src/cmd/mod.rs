//! Command handlers, one module per subcommand.

pub mod build;
pub mod show;
pub mod stats;
