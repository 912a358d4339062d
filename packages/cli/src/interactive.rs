//! Interactive menu for browsing the crime taxonomy.
//!
//! Lets an officer pick a category or look up a crime type and see which
//! detail fields the console shows for it, using `dialoguer`.

use cybercrime_console_crime_models::{
    CrimeCategory, FieldKey, category_of, crime_types_for, humanize_crime_type,
};
use dialoguer::{Input, Select};

use crate::CliError;

/// Top-level actions in the interactive menu.
enum BrowseAction {
    Categories,
    CrimeType,
}

impl BrowseAction {
    const ALL: &[Self] = &[Self::Categories, Self::CrimeType];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Categories => "Browse crime categories",
            Self::CrimeType => "Look up a crime type",
        }
    }
}

/// Runs the interactive taxonomy browser.
///
/// # Errors
///
/// Returns [`CliError::Dialog`] if a prompt fails.
pub fn run() -> Result<(), CliError> {
    let labels: Vec<&str> = BrowseAction::ALL.iter().map(BrowseAction::label).collect();

    let idx = Select::new()
        .with_prompt("Cybercrime console")
        .items(&labels)
        .default(0)
        .interact()?;

    match BrowseAction::ALL[idx] {
        BrowseAction::Categories => handle_categories()?,
        BrowseAction::CrimeType => handle_crime_type()?,
    }

    Ok(())
}

/// Prompts for a category and prints its crime types and field schema.
fn handle_categories() -> Result<(), CliError> {
    let categories = CrimeCategory::all();
    let names: Vec<String> = categories.iter().map(ToString::to_string).collect();

    let idx = Select::new()
        .with_prompt("Category")
        .items(&names)
        .default(0)
        .interact()?;
    let category = categories[idx];

    println!("\n{category}\n");
    println!("Crime types:");
    for crime_type in crime_types_for(category) {
        println!("  {:<32} {crime_type}", humanize_crime_type(crime_type));
    }
    println!();
    print_schema(category.fields());

    Ok(())
}

/// Prompts for a crime type identifier and prints where it files.
fn handle_crime_type() -> Result<(), CliError> {
    let crime_type: String = Input::new()
        .with_prompt("Crime type (e.g. onlineScam)")
        .interact_text()?;
    let crime_type = crime_type.trim();

    let Some(category) = category_of(crime_type) else {
        println!("'{crime_type}' is not a known crime type.");
        return Ok(());
    };

    println!("\n{} files under {category}\n", humanize_crime_type(crime_type));
    print_schema(category.fields());

    Ok(())
}

fn print_schema(fields: &[FieldKey]) {
    println!("Detail fields:");
    for key in fields {
        let hint = key.hint().unwrap_or_default();
        println!("  {:<24} {:<22} {hint}", key.label(), key.group().heading());
    }
}
