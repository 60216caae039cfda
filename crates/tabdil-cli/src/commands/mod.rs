//! CLI subcommands.

pub mod account;
pub mod national_id;
pub mod sheba;

/// Output format shared by all subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}
