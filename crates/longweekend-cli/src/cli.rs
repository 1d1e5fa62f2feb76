use clap::{Parser, Subcommand};

/// Long weekend and bridge day finder
#[derive(Parser, Debug)]
#[command(name = "longweekend")]
#[command(version, about = "Long weekend and bridge day finder")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the long weekends formed by a set of holidays
    Calculate(CalculateArgs),
    /// Show how every holiday was scanned and what window it produced
    Explain(CalculateArgs),
}

#[derive(clap::Args, Debug)]
pub struct CalculateArgs {
    /// Holiday file: one `YYYY-MM-DD name` per line, or a .json array (use - for stdin)
    #[arg(long, default_value = "-")]
    pub holidays: String,

    /// Weekend days, comma-separated (e.g., sat,sun or fri,sat). Empty for none.
    #[arg(short, long, default_value = "sat,sun")]
    pub weekend: String,

    /// Bridge days that may be taken off per direction
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub bridge_days: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
