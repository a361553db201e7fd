//! Search command implementation.

use crate::render::SearchReport;
use libris_core::Field;
use tracing::info;

/// Runs a single search against the catalog.
pub fn run(
    field: &str,
    query: &str,
    user_id: &str,
    user_name: &str,
    format: &str,
    no_samples: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let requester = super::requester(user_id, user_name)?;
    let field: Field = field.parse()?;
    let catalog = super::open_catalog(no_samples);

    info!(%field, %requester, "Searching {} books", catalog.len());
    let comparison = catalog.search(field, query, &requester)?;
    let report = SearchReport::new(query, &comparison);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report.to_text()),
    }

    Ok(())
}
