//! Application logic for the SQL Schema Report CLI.
//!
//! This module contains the report pipeline separated from the main entry
//! point to enable testing: discovery, per-file analysis, aggregation, HTML
//! rendering and the console summary.

mod generate;
mod helpers;
mod types;

pub use generate::run_generate;
pub use helpers::{ResolvedSettings, convert_format, create_output_options, resolve_settings};
pub use types::{CommandOutput, GenerateParams};
