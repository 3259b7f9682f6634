//! Statement display and export

use crate::ExportFormat;
use anyhow::{Context, Result};
use minibank_business as business;
use minibank_directory::AccountDirectory;
use minibank_reports::{
    CsvExporter, JsonExporter, MarkdownExporter, ReportExporter, SortOrder, Statement,
};
use std::path::Path;

/// Log in and print the statement
pub fn show(directory: &AccountDirectory, username: &str, pin: u32, sorted: bool) -> Result<()> {
    let mut session = business::login(directory, username, pin)?;
    if sorted {
        session.toggle_sort();
    }

    let account = directory
        .find(&session.username)
        .context("logged-in account disappeared")?;
    println!("Hello {}", account.first_name());
    println!(
        "{}",
        Statement::build(account, SortOrder::from_toggle(session.sorted))
    );
    Ok(())
}

/// Log in and export the statement in the requested format
pub fn export(
    directory: &AccountDirectory,
    username: &str,
    pin: u32,
    format: ExportFormat,
    output: Option<&Path>,
    sorted: bool,
) -> Result<()> {
    let session = business::login(directory, username, pin)?;
    let account = directory
        .find(&session.username)
        .context("logged-in account disappeared")?;
    let statement = Statement::build(account, SortOrder::from_toggle(sorted));

    let exporter: Box<dyn ReportExporter> = match format {
        ExportFormat::Csv => Box::new(CsvExporter::new()),
        ExportFormat::Json => Box::new(JsonExporter::new()),
        ExportFormat::Markdown => Box::new(MarkdownExporter::new()),
    };
    let rendered = exporter.export(&statement);

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported statement for {} to {}", username, path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
