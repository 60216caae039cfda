//! CLI for Iranian Sheba (IBAN) conversion and national ID validation.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{account, national_id, sheba};

/// Iranian banking and identity numbers - validate and convert
#[derive(Parser)]
#[command(name = "tabdil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a Sheba and resolve the bank and account number
    Sheba(sheba::ShebaArgs),

    /// Build a Sheba from an account number and bank code
    Account(account::AccountArgs),

    /// Validate a national ID and resolve the issuing office
    NationalId(national_id::NationalIdArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Sheba(args) => sheba::run(args),
        Commands::Account(args) => account::run(args),
        Commands::NationalId(args) => national_id::run(args),
    }
}
