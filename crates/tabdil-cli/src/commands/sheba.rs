//! Sheba command - validate a Sheba and show the owning bank and account.

use clap::Args;
use console::style;
use tracing::debug;

use tabdil_core::sheba_to_account;

use super::OutputFormat;

/// Arguments for the sheba command.
#[derive(Args)]
pub struct ShebaArgs {
    /// Sheba number, with or without the IR prefix and grouping
    #[arg(required = true)]
    sheba: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ShebaArgs) -> anyhow::Result<()> {
    debug!(input = %args.sheba, "decoding sheba");

    let result = sheba_to_account(&args.sheba)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            println!(
                "{} {} ({})",
                style("بانک:").bold(),
                result.bank_name,
                result.bank_code
            );
            println!("{} {}", style("شماره حساب:").bold(), result.account_number);
            if let Some(card) = &result.possible_card_number {
                println!("{} {}", style("شماره کارت احتمالی:").bold(), card);
            }
        }
    }

    Ok(())
}
