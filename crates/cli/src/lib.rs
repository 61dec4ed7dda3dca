//! `silomap` command-line host: read pasted rows, print the inventory.

pub mod config;
pub mod render;

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use silomap_core::DomainError;
use silomap_inventory::{FloorPlan, InventoryTableParser};

pub use config::{Cli, OutputFormat};
pub use render::{Report, TextSections, render_json, render_text};

/// Printed above the parser detail when a paste is rejected.
pub const MALFORMED_HINT: &str =
    "The data does not match the expected format. Copy the three spreadsheet columns \
     (location, item, quantity) exactly.";

/// Read the pasted text from `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parse `input` and write the configured output to `out`.
pub fn run(cli: &Cli, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let table = InventoryTableParser::new().parse(input)?;
    let plan = FloorPlan::standard();
    let report = Report::new(&table, &plan);

    tracing::info!(
        locations = table.len(),
        unplaced = report.unplaced.len(),
        "inventory parsed"
    );

    let rendered = match cli.format {
        OutputFormat::Json => render_json(&report).context("failed to encode JSON")? + "\n",
        OutputFormat::Text => render_text(
            &report,
            &plan,
            TextSections {
                board: cli.board,
                summary: cli.summary,
            },
        ),
    };

    out.write_all(rendered.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

/// The rejected-paste error inside `err`, if that is what failed.
pub fn malformed_input(err: &anyhow::Error) -> Option<&DomainError> {
    err.downcast_ref::<DomainError>()
        .filter(|e| e.is_malformed_input())
}
