//! Address entry display formatting
//!
//! Formats entries for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::AddressEntry;
use crate::services::FilteredView;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    username: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "CEP")]
    cep: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "UF")]
    uf: String,
}

impl From<&AddressEntry> for EntryRow {
    fn from(entry: &AddressEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            username: entry.username.clone(),
            alias: entry.address_alias.clone(),
            cep: format_cep(&entry.cep),
            city: entry.fields.localidade.clone(),
            uf: entry.fields.uf.clone(),
        }
    }
}

/// `01001000` -> `01001-000`; anything that isn't 8 digits is shown as-is
fn format_cep(cep: &str) -> String {
    if cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}", &cep[..5], &cep[5..])
    } else {
        cep.to_string()
    }
}

/// Format a list of entries as a table
pub fn format_entry_list(entries: &[&AddressEntry]) -> String {
    if entries.is_empty() {
        return "No addresses found.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::from(*e)).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the filtered view with a match count footer
pub fn format_view(view: &FilteredView<'_>) -> String {
    let mut output = format_entry_list(&view.entries);
    if !view.entries.is_empty() {
        output.push_str(&format!(
            "\nShowing {} of {} addresses\n",
            view.entries.len(),
            view.total
        ));
    }
    output
}

/// Format a single entry's details
pub fn format_entry_details(entry: &AddressEntry) -> String {
    let f = &entry.fields;
    let mut output = String::new();

    output.push_str(&format!("Address: {}\n", entry.address_alias));
    output.push_str(&format!("  Name:         {}\n", entry.username));
    output.push_str(&format!("  ID:           {}\n", entry.id));
    output.push_str(&format!("  CEP:          {}\n", format_cep(&entry.cep)));
    output.push('\n');
    output.push_str(&format!("  Logradouro:   {}\n", f.logradouro));
    if !f.complemento.is_empty() {
        output.push_str(&format!("  Complemento:  {}\n", f.complemento));
    }
    output.push_str(&format!("  Bairro:       {}\n", f.bairro));
    output.push_str(&format!("  Cidade:       {}\n", f.localidade));
    output.push_str(&format!("  UF:           {}\n", f.uf));
    output.push_str(&format!("  DDD:          {}\n", f.ddd));
    output.push_str(&format!(
        "  IBGE/GIA/SIAFI: {} / {} / {}\n",
        f.ibge, f.gia, f.siafi
    ));

    output
}

/// Format a list of filter choices, one per line
pub fn format_choices(label: &str, choices: &[String]) -> String {
    if choices.is_empty() {
        return format!("No {} found.\n", label);
    }

    let mut output = String::new();
    for choice in choices {
        output.push_str(&format!("  {}\n", choice));
    }
    output
}
