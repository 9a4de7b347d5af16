use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = concat!("[#] tally v", env!("CARGO_PKG_VERSION"), " - inventory counts to supplier orders"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a quantity for a catalog item
    Log(LogArgs),
    /// Undo the most recent entry for an item
    Undo(ItemArgs),
    /// Redo the most recently undone entry for an item
    Redo(ItemArgs),
    /// List catalog items with their current totals
    Items,
    /// Generate the consolidated supplier order
    Report(ReportArgs),
    /// Reset every ledger in every location
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct LogArgs {
    /// Catalog item name
    pub item: String,
    /// Quantity (positive decimal)
    pub quantity: String,
    /// One of the configured units
    pub unit: String,
    /// Location ID (defaults to the first configured location)
    #[arg(short, long)]
    pub location: Option<String>,
}

#[derive(Args)]
pub struct ItemArgs {
    /// Catalog item name
    pub item: String,
    /// Location ID (defaults to the first configured location)
    #[arg(short, long)]
    pub location: Option<String>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Also copy the report to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}
