use anyhow::Result;
use clap::{Parser, Subcommand};

use cepbook::cli::{handle_address_command, handle_export_command, AddressCommands, ExportArgs};
use cepbook::config::{BookPaths, Settings};
use cepbook::logging::init_logging;
use cepbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cepbook",
    version,
    about = "Terminal address book backed by CEP lookups",
    long_about = "cepbook looks up Brazilian postal codes (CEP), lets you label \
                  the result with a name and an alias, and keeps the addresses \
                  in a local address book you can filter by name, alias, city \
                  and state."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Address(AddressCommands),

    /// Export addresses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Initialize configuration and an empty address book
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let paths = BookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all();

    match cli.command {
        Some(Commands::Address(cmd)) => {
            handle_address_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing cepbook at: {}", paths.base_dir().display());
            cepbook::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'cepbook add <name> <cep>' to save your first address.");
        }
        Some(Commands::Config) => {
            println!("cepbook Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Address book:     {}", paths.address_book_file().display());
            println!();
            println!("Settings:");
            println!("  Lookup service: {}", settings.lookup_base_url);
            match settings.lookup_timeout_secs {
                Some(secs) => println!("  Lookup timeout: {}s", secs),
                None => println!("  Lookup timeout: client default"),
            }
            println!("  Default alias:  {}", settings.default_alias);
        }
        None => {
            println!("cepbook - Terminal address book backed by CEP lookups");
            println!();
            println!("Run 'cepbook --help' for usage information.");
            println!("Run 'cepbook add <name> <cep>' to save an address.");
        }
    }

    Ok(())
}
