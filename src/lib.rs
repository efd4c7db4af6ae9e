//! # SQL Schema Report Library
//!
//! Heuristic anomaly detection and HTML reporting for SQL schema files.

pub mod analyzer;
pub mod anomaly;
pub mod app;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod html;
pub mod logging;
pub mod output;
pub mod report;
