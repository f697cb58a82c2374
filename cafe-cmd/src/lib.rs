//! Command implementations for the coffee-climate CLI.
//!
//! Provides subcommands for querying Open-Meteo daily aggregates for one
//! or all Brazilian states and for checking the boundary-file join key.
//! Output goes to stdout only; nothing is persisted.

use clap::Subcommand;

pub mod geo;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the trailing daily aggregates for one estado
    Estado {
        /// Estado name, exactly as in the reference table (e.g. "Minas Gerais")
        #[arg(short, long)]
        name: String,

        /// Trailing window length in days
        #[arg(short, long, default_value_t = 30)]
        days: i64,
    },

    /// Fetch every estado sequentially and classify coffee suitability
    Survey {
        /// Trailing window length in days
        #[arg(short, long, default_value_t = 30)]
        days: i64,
    },

    /// Check the boundary file against the reference-table join key
    GeoCheck,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Estado { name, days } => query::run_estado(&name, days).await,
        Command::Survey { days } => query::run_survey(days).await,
        Command::GeoCheck => geo::run_geo_check().await,
    }
}
