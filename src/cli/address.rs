//! Address CLI commands
//!
//! Implements CLI commands for looking up, saving, browsing and editing
//! address entries.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::entry::{format_choices, format_entry_details, format_view};
use crate::error::{CepBookError, CepBookResult};
use crate::lookup::{LookupGateway, ViaCepClient};
use crate::models::PostalCode;
use crate::services::{AddressBookService, FilterCriteria, FilterField};
use crate::storage::Storage;

/// Filter options shared by listing and export
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only names containing this text (case-insensitive)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Only aliases containing this text (case-insensitive)
    #[arg(short, long)]
    pub alias: Option<String>,
    /// Only this city ("all" for every city)
    #[arg(short, long)]
    pub city: Option<String>,
    /// Only this state code ("all" for every state)
    #[arg(short, long)]
    pub state: Option<String>,
}

impl FilterArgs {
    /// Build filter criteria, starting from the all-inclusive default
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        let fields = [
            (FilterField::Username, &self.username),
            (FilterField::AddressAlias, &self.alias),
            (FilterField::City, &self.city),
            (FilterField::State, &self.state),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                criteria.set(field, value);
            }
        }
        criteria
    }
}

/// Address subcommands
#[derive(Subcommand)]
pub enum AddressCommands {
    /// Look up a CEP and save it to the address book
    Add {
        /// Name of the person the address belongs to
        username: String,
        /// CEP, 8 digits (punctuation such as 01001-000 is accepted)
        cep: String,
        /// Alias for the address (defaults to the street name)
        #[arg(short, long)]
        alias: Option<String>,
    },
    /// List saved addresses
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show address details
    Show {
        /// Entry ID (full UUID or adr-xxxxxxxx)
        id: String,
    },
    /// Change the alias of an address
    Rename {
        /// Entry ID (full UUID or adr-xxxxxxxx)
        id: String,
        /// New alias
        alias: String,
    },
    /// Remove an address
    #[command(alias = "rm")]
    Remove {
        /// Entry ID (full UUID or adr-xxxxxxxx)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the cities present in the address book
    Cities,
    /// List the states present in the address book
    States,
    /// Look up a CEP without saving it
    Lookup {
        /// CEP, 8 digits
        cep: String,
    },
}

/// Handle an address command
pub fn handle_address_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: AddressCommands,
) -> CepBookResult<()> {
    let mut service = AddressBookService::new(&mut storage.entries, settings.default_alias.clone());

    match cmd {
        AddressCommands::Add {
            username,
            cep,
            alias,
        } => {
            let gateway = LookupGateway::new(ViaCepClient::from_settings(settings)?);
            let entry = service.add_from_lookup(&gateway, &username, &cep, alias.as_deref())?;

            println!("Saved address: {}", entry.address_alias);
            println!("  Name: {}", entry.username);
            println!("  City: {} - {}", entry.fields.localidade, entry.fields.uf);
            println!("  ID:   {}", entry.id);
        }

        AddressCommands::List { filters } => {
            let view = service.view(&filters.to_criteria());
            print!("{}", format_view(&view));
        }

        AddressCommands::Show { id } => {
            let entry = service
                .find(&id)?
                .ok_or_else(|| CepBookError::entry_not_found(&id))?;
            print!("{}", format_entry_details(entry));
        }

        AddressCommands::Rename { id, alias } => {
            let found = service
                .find(&id)?
                .ok_or_else(|| CepBookError::entry_not_found(&id))?;
            let (entry_id, old_alias) = (found.id, found.address_alias.clone());

            let renamed = service
                .rename(entry_id, &alias)?
                .ok_or_else(|| CepBookError::entry_not_found(&id))?;
            println!(
                "Renamed address: '{}' -> '{}'",
                old_alias, renamed.address_alias
            );
        }

        AddressCommands::Remove { id, force } => {
            let found = service
                .find(&id)?
                .ok_or_else(|| CepBookError::entry_not_found(&id))?;

            if !force {
                println!("About to remove address: {}", found);
                println!("Use --force to confirm removal");
                return Ok(());
            }

            let entry_id = found.id;
            if let Some(removed) = service.remove(entry_id) {
                println!("Removed address: {}", removed);
            }
        }

        AddressCommands::Cities => {
            let view = service.view(&FilterCriteria::default());
            print!("{}", format_choices("cities", &view.cities));
        }

        AddressCommands::States => {
            let view = service.view(&FilterCriteria::default());
            print!("{}", format_choices("states", &view.states));
        }

        AddressCommands::Lookup { cep } => {
            let code =
                PostalCode::sanitize(&cep).map_err(|e| CepBookError::Validation(e.to_string()))?;
            let gateway = LookupGateway::new(ViaCepClient::from_settings(settings)?);
            let fields = gateway.lookup_code(&code)?;

            println!("CEP:          {}", code.formatted());
            println!("Logradouro:   {}", fields.logradouro);
            if !fields.complemento.is_empty() {
                println!("Complemento:  {}", fields.complemento);
            }
            println!("Bairro:       {}", fields.bairro);
            println!("Cidade:       {}", fields.localidade);
            println!("UF:           {}", fields.uf);
            println!("DDD:          {}", fields.ddd);
        }
    }

    Ok(())
}
