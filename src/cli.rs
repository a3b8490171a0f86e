//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TracingFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "starrr", about = "Discover TV shows by actor, Sonarr-style")]
pub struct Args {
    /// Log output format (pretty for local development, json for deployments)
    #[arg(long, value_enum, default_value_t = TracingFormat::Pretty)]
    pub tracing: TracingFormat,
}
