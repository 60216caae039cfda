//! National ID command - validate an ID and show the issuing office.

use clap::Args;
use console::style;
use tracing::debug;

use tabdil_core::validate_national_id;

use super::OutputFormat;

/// Arguments for the national-id command.
#[derive(Args)]
pub struct NationalIdArgs {
    /// 10-digit national ID
    #[arg(required = true)]
    id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: NationalIdArgs) -> anyhow::Result<()> {
    debug!(input = %args.id, "validating national id");

    let result = validate_national_id(&args.id);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if result.is_valid {
                println!("{} {}", style("✓").green().bold(), result.message);
                if let (Some(province), Some(city)) = (&result.province, &result.city) {
                    println!("{} {} - {}", style("محل صدور:").bold(), province, city);
                }
            } else {
                println!("{} {}", style("✗").red().bold(), result.message);
            }
        }
    }

    if !result.is_valid {
        std::process::exit(1);
    }

    Ok(())
}
