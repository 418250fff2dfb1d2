use clap::{Parser, Subcommand};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "churnlens", version, about = "Churn risk dashboard CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Base URL of the churn prediction service (overrides config file)"
    )]
    pub api: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze churn risk for a single user id
    Lookup { user_id: String },
    /// Pick a random user id from the service and analyze it
    Random,
    /// Interactive prompt that keeps dashboard state across lookups
    Shell,
}
