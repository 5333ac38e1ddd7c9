//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Marketcart - Persistent Shopping Cart
///
/// Holds cart line items in memory and mirrors every mutation to
/// local storage so cart contents survive restarts.
#[derive(Parser, Debug)]
#[command(name = "marketcart")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MARKETCART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep the cart in memory only (nothing written to disk)
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show cart contents
    Show(ShowArgs),

    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Increase the quantity of a product by one
    Increment(IdArgs),

    /// Decrease the quantity of a product by one
    Decrement(IdArgs),

    /// Remove everything from the cart
    Clear,

    /// Show or manage configuration
    Config(ConfigArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product identifier
    pub id: String,

    /// Product title
    #[arg(short, long)]
    pub title: String,

    /// Unit price
    #[arg(short, long)]
    pub price: f64,

    /// Product image URL
    #[arg(short, long, default_value = "")]
    pub image_url: String,
}

/// Arguments for commands addressing one product
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Product identifier
    pub id: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for the show command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one item per line)
    Plain,
}
