//! CLI subcommands.

pub mod interactive;
pub mod submit;
