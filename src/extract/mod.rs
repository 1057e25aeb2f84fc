//! Page extraction pipeline
//!
//! This module turns fetched markup into typed printer fields:
//! - Parsing bodies into queryable documents
//! - Generic field primitives (selector paths, labelled cells, percentages)
//! - Per-model declarative schemas
//!
//! Extraction is all-or-nothing: the first missing or malformed field aborts
//! the snapshot for the cycle.

mod document;
pub mod fields;
pub mod schema;

pub use document::{parse, Document};
pub use schema::{ModelSchema, SupplyField, SupplyLocator, LEXMARK_MS811};

use crate::printer::PrinterStatusSnapshot;
use crate::ExtractError;

/// Applies `schema` to the two parsed pages and assembles a snapshot
///
/// Fields are read in a fixed order (model, status line, trays, toner,
/// maintenance kit, roller kit, imaging unit); the first failure is returned.
pub fn extract_snapshot(
    address: &str,
    status: &Document,
    topbar: &Document,
    schema: &ModelSchema,
) -> Result<PrinterStatusSnapshot, ExtractError> {
    let model = schema.extract_model(topbar)?;
    let status_line = schema.extract_status_line(topbar)?;
    let tray_levels = schema.extract_tray_levels(status)?;
    let toner_pct = schema.extract_supply_percentage(status, &schema.toner)?;
    let maintenance_kit_pct = schema.extract_supply_percentage(status, &schema.maintenance_kit)?;
    let roller_kit_pct = schema.extract_supply_percentage(status, &schema.roller_kit)?;
    let imaging_unit_pct = schema.extract_supply_text(status, &schema.imaging_unit)?;

    tracing::debug!(address, %model, "Extracted all fields");

    Ok(PrinterStatusSnapshot::new(
        address,
        model,
        status_line,
        tray_levels,
        toner_pct,
        maintenance_kit_pct,
        roller_kit_pct,
        imaging_unit_pct,
    ))
}
