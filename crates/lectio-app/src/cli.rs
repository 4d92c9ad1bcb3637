//! Command-line interface.

use clap::{Parser, Subcommand};
use lectio_core::types::Locale;

#[derive(Debug, Parser)]
#[command(name = "lectio")]
#[command(about = "Liturgical calendar and daily readings engine")]
#[command(version)]
pub struct Cli {
    /// Route locale: `pt` (day-month-year slugs) or `en` (month-day-year slugs)
    #[arg(long, default_value = "pt", global = true)]
    pub locale: Locale,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a slug to its date and canonical slug
    Resolve {
        slug: String,
    },
    /// Print the full liturgical day as JSON
    Day {
        /// Date slug; today when missing or invalid
        slug: Option<String>,
        /// Skip the liturgy provider and build the day from the calendar alone
        #[arg(long)]
        offline: bool,
    },
    /// Print previous / today / next links for a date
    Nav {
        slug: Option<String>,
    },
    /// Print the daily reflection for a slug in either convention, or today
    Message {
        slug: Option<String>,
    },
    /// Print a year's calendar anchors and movable feasts
    Year {
        year: i32,
    },
}
