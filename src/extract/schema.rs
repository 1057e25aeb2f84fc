//! Declarative extraction schemas
//!
//! Each supported printer model is a [`ModelSchema`] value: selectors plus a
//! locator per consumable. Supporting another model with the same page
//! structure means adding a schema here, not new code paths.

use crate::extract::document::Document;
use crate::extract::fields::{
    element_text, follow_path, labelled_text, nth_text, parse_percentage, strip_percent,
};
use crate::ExtractError;
use regex::Regex;

/// Mis-decoded byte sequences the status line is known to contain
const STATUS_LINE_FIXES: &[(&str, &str)] = &[("Ã£", "ã")];

/// Names of the three tray slots, in page order
pub const TRAY_NAMES: [&str; 3] = ["tray1", "tray2", "default_tray"];

/// Where a consumable reading lives on the status page
#[derive(Debug, Clone, Copy)]
pub enum SupplyLocator {
    /// The `index`-th element matching `selector`; the value is the text of its
    /// first `<b>` after `delimiter`
    DelimitedCell {
        selector: &'static str,
        index: usize,
        delimiter: char,
    },

    /// Inside the `table_index`-th supply table, the node following the first
    /// text matching the `label` regex
    LabelledText {
        table_index: usize,
        label: &'static str,
    },
}

/// A named consumable reading
#[derive(Debug, Clone, Copy)]
pub struct SupplyField {
    /// Field name reported in errors
    pub name: &'static str,

    /// How to find it
    pub locator: SupplyLocator,
}

/// Field layout of one printer model's web interface
#[derive(Debug, Clone, Copy)]
pub struct ModelSchema {
    /// Exact product name shown in the topbar page
    pub model: &'static str,

    /// Product name element on the topbar page
    pub model_selector: &'static str,

    /// Status line cell on the topbar page, and the path to its text
    pub status_selector: &'static str,
    pub status_path: &'static [&'static str],

    /// One table per paper tray on the status page, and the path to its level
    pub tray_selector: &'static str,
    pub tray_path: &'static [&'static str],

    /// Supply tables searched by [`SupplyLocator::LabelledText`]
    pub supply_table_selector: &'static str,

    pub toner: SupplyField,
    pub maintenance_kit: SupplyField,
    pub roller_kit: SupplyField,
    pub imaging_unit: SupplyField,
}

/// Lexmark MS811 (Portuguese-language web interface)
pub const LEXMARK_MS811: ModelSchema = ModelSchema {
    model: "Lexmark MS811",
    model_selector: "span.top_prodname",
    status_selector: "td.statusLine",
    status_path: &["font"],
    tray_selector: r#"table[style="padding: .75pt"]"#,
    tray_path: &["tr", "td", "b"],
    supply_table_selector: "table.status_table",
    toner: SupplyField {
        name: "toner",
        locator: SupplyLocator::DelimitedCell {
            selector: r#"td[colspan="4"]"#,
            index: 1,
            delimiter: '~',
        },
    },
    maintenance_kit: SupplyField {
        name: "maintenance_kit",
        locator: SupplyLocator::LabelledText {
            table_index: 3,
            label: "Kit",
        },
    },
    roller_kit: SupplyField {
        name: "roller_kit",
        locator: SupplyLocator::LabelledText {
            table_index: 3,
            label: "Kit do rolo Vida restante:",
        },
    },
    imaging_unit: SupplyField {
        name: "imaging_unit",
        locator: SupplyLocator::LabelledText {
            table_index: 3,
            label: "Unid. imagem Vida restante:",
        },
    },
};

/// Every built-in schema
pub const SCHEMAS: &[&ModelSchema] = &[&LEXMARK_MS811];

/// Looks up a schema by model name, ignoring case
pub fn find(model: &str) -> Option<&'static ModelSchema> {
    let model = model.trim();
    SCHEMAS
        .iter()
        .copied()
        .find(|schema| schema.model.eq_ignore_ascii_case(model))
}

impl ModelSchema {
    /// Reads the product name and checks it against this schema's model
    pub fn extract_model(&self, topbar: &Document) -> Result<String, ExtractError> {
        let element = topbar
            .select_first(self.model_selector)?
            .ok_or_else(|| ExtractError::MissingElement("model".to_string()))?;

        let found = element_text(element);
        if found != self.model {
            return Err(ExtractError::IncompatibleModel {
                expected: self.model.to_string(),
                found,
            });
        }
        Ok(found)
    }

    /// Reads the status line, repairing known mis-decoded characters
    pub fn extract_status_line(&self, topbar: &Document) -> Result<String, ExtractError> {
        let missing = || ExtractError::MissingElement("status_line".to_string());

        let cell = topbar.select_first(self.status_selector)?.ok_or_else(missing)?;
        let text = follow_path(cell, self.status_path)?
            .map(element_text)
            .ok_or_else(missing)?;

        Ok(repair_status_line(&text))
    }

    /// Reads the three tray levels in page order
    ///
    /// Every slot is checked; the error names the first one missing.
    pub fn extract_tray_levels(&self, status: &Document) -> Result<[String; 3], ExtractError> {
        let mut levels = Vec::new();
        for table in status.select_all(self.tray_selector)? {
            levels.push(follow_path(table, self.tray_path)?.map(element_text));
        }

        let slots: [Option<String>; 3] =
            std::array::from_fn(|i| levels.get(i).cloned().flatten());

        let missing: Vec<&str> = TRAY_NAMES
            .iter()
            .zip(&slots)
            .filter(|(_, level)| level.is_none())
            .map(|(name, _)| *name)
            .collect();

        if let Some(first) = missing.first() {
            tracing::debug!(?missing, "Tray levels missing from status page");
            return Err(ExtractError::MissingElement(first.to_string()));
        }

        Ok(slots.map(Option::unwrap_or_default))
    }

    /// Reads a consumable as raw text with the percent sign removed
    pub fn extract_supply_text(
        &self,
        status: &Document,
        field: &SupplyField,
    ) -> Result<String, ExtractError> {
        let missing = || ExtractError::MissingElement(field.name.to_string());

        match field.locator {
            SupplyLocator::DelimitedCell {
                selector,
                index,
                delimiter,
            } => {
                let text = nth_text(status, selector, index, &["b"])?.ok_or_else(missing)?;
                let value = text
                    .split(delimiter)
                    .nth(1)
                    .ok_or_else(|| ExtractError::InvalidValue {
                        field: field.name.to_string(),
                        value: text.trim().to_string(),
                    })?;
                Ok(strip_percent(value).to_string())
            }
            SupplyLocator::LabelledText { table_index, label } => {
                let text = extract_labelled(
                    status,
                    self.supply_table_selector,
                    table_index,
                    label,
                )?
                .ok_or_else(missing)?;
                Ok(strip_percent(&text).to_string())
            }
        }
    }

    /// Reads a consumable as an integer percentage
    pub fn extract_supply_percentage(
        &self,
        status: &Document,
        field: &SupplyField,
    ) -> Result<u8, ExtractError> {
        let text = self.extract_supply_text(status, field)?;
        parse_percentage(field.name, &text)
    }
}

/// Finds the value next to `label` inside the `table_index`-th table matching `table_selector`
pub fn extract_labelled(
    doc: &Document,
    table_selector: &str,
    table_index: usize,
    label: &str,
) -> Result<Option<String>, ExtractError> {
    let pattern = Regex::new(label)
        .map_err(|e| ExtractError::InvalidPattern(format!("label '{}': {}", label, e)))?;

    Ok(doc
        .select_all(table_selector)?
        .get(table_index)
        .and_then(|table| labelled_text(*table, &pattern)))
}

/// Replaces known mis-decoded sequences; any other text is returned unchanged
pub fn repair_status_line(text: &str) -> String {
    STATUS_LINE_FIXES
        .iter()
        .fold(text.to_string(), |acc, (broken, fixed)| acc.replace(broken, fixed))
}
