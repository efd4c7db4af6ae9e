//! # SQL Schema Report
//!
//! Heuristic anomaly scanning and HTML documentation for SQL schema files.
//!
//! `sql-schema-report` reads every `.sql` file in a directory, counts tables
//! and lines, extracts the database name, and flags potential schema design
//! anomalies with a line-oriented scanner (no SQL parser involved). The
//! results are written as a single static HTML page with one tab per file.
//!
//! # Quick Start
//!
//! ```bash
//! # Scan ./database-scripts and write ./docs/index.html
//! sql-schema-report
//!
//! # Custom locations
//! sql-schema-report -i schemas -o site/schema.html --project-name "Billing"
//!
//! # Machine-readable summary
//! sql-schema-report -f json --no-color > summary.json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_REPORT_INPUT_DIR`, `SQL_REPORT_OUTPUT`,
//!    `SQL_REPORT_PROJECT`)
//! 3. `.sql-schema-report.toml` in current directory
//! 4. `~/.config/sql-schema-report/config.toml`
//!
//! # Anomalies
//!
//! | Key | Description |
//! |-----|-------------|
//! | `tables_without_primary_key` | No `PRIMARY KEY` line inside the table |
//! | `tables_without_indexes` | No index statement while the table was open |
//! | `tables_with_single_column` | Exactly one column definition |
//! | `missing_foreign_keys` | `FKY_` reference without `FOREIGN KEY` |
//! | `long_table_names` | Table name longer than 30 characters |
//! | `nullable_columns` | Column without `NOT NULL` or `DEFAULT` |
//!
//! # Exit Codes
//!
//! - `0` - Report written, or no SQL files found
//! - `1` - Fatal error (unreadable file or directory, unwritable output,
//!   invalid configuration)

use std::process;

use clap::Parser;
use sql_schema_report::{
    app::{GenerateParams, run_generate},
    cli::Cli,
    config::Config,
    error::AppResult,
    logging::init_logging
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;
    let config = Config::load()?;

    let output = run_generate(GenerateParams::from(cli), config)?;
    for line in &output.stdout {
        println!("{}", line);
    }

    Ok(output.exit_code)
}
