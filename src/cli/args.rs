//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// marketcart - persistent shopping cart
///
/// Keeps a local shopping cart that survives restarts.
#[derive(Parser, Debug)]
#[command(name = "marketcart")]
#[command(author, version, about, long_about = None)]
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
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the cart (increments it if already present)
    Add(AddArgs),

    /// Increase a product's quantity by one
    #[command(alias = "inc")]
    Increment(ItemArgs),

    /// Decrease a product's quantity by one, removing it at zero
    #[command(alias = "dec")]
    Decrement(ItemArgs),

    /// Show the cart contents
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID
    #[arg(long)]
    pub id: String,

    /// Product title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Product image URL
    #[arg(long, default_value = "")]
    pub image_url: String,

    /// Unit price
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
}

/// Arguments for commands addressing one cart item
#[derive(Parser, Debug)]
pub struct ItemArgs {
    /// Product ID
    pub id: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
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

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., storage.namespace)
        key: String,

        /// Value to set
        value: String,
    },
}

/// Output format for list command
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from([
            "marketcart", "add", "--id", "a", "--title", "T", "--image-url", "u", "--price", "10",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.id, "a");
                assert_eq!(args.image_url, "u");
                assert_eq!(args.price, 10.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_aliases() {
        let cli = Cli::try_parse_from(["marketcart", "-vv", "dec", "a"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Decrement(ItemArgs { ref id }) if id == "a"));
    }
}
