//! Account command - build a Sheba from an account number and bank code.

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use tabdil_core::{account_to_sheba, lookup_bank};

use super::OutputFormat;

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    /// Bank-native account number
    #[arg(required = true)]
    account: String,

    /// 3-digit bank code
    #[arg(short, long)]
    bank: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct BuiltSheba<'a> {
    sheba: &'a str,
    bank_code: &'a str,
    bank_name: &'a str,
}

pub fn run(args: AccountArgs) -> anyhow::Result<()> {
    debug!(account = %args.account, bank = %args.bank, "building sheba");

    let sheba = account_to_sheba(&args.account, &args.bank)?;
    // Lookup cannot fail here: account_to_sheba already resolved the bank
    let bank_name = lookup_bank(&args.bank).map(|b| b.name).unwrap_or("");

    match args.format {
        OutputFormat::Json => {
            let out = BuiltSheba {
                sheba: &sheba,
                bank_code: &args.bank,
                bank_name,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("{} {}", style("شبا:").bold(), sheba);
            println!("{} {}", style("بانک:").bold(), bank_name);
        }
    }

    Ok(())
}
