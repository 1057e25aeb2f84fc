use chrono::{DateTime, Utc};

/// One point-in-time reading of a printer
///
/// Snapshots are never updated; every scrape produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterStatusSnapshot {
    address: String,
    captured_at: DateTime<Utc>,
    model: String,
    status_line: String,
    tray_levels: [String; 3],
    toner_pct: u8,
    maintenance_kit_pct: u8,
    roller_kit_pct: u8,
    imaging_unit_pct: String,
}

impl PrinterStatusSnapshot {
    /// Assembles a snapshot stamped with the current time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        address: impl Into<String>,
        model: String,
        status_line: String,
        tray_levels: [String; 3],
        toner_pct: u8,
        maintenance_kit_pct: u8,
        roller_kit_pct: u8,
        imaging_unit_pct: String,
    ) -> Self {
        Self {
            address: address.into(),
            captured_at: Utc::now(),
            model,
            status_line,
            tray_levels,
            toner_pct,
            maintenance_kit_pct,
            roller_kit_pct,
            imaging_unit_pct,
        }
    }

    /// Printer base address the snapshot was read from
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Tray 1, tray 2 and the default tray, as shown on the status page
    pub fn tray_levels(&self) -> &[String; 3] {
        &self.tray_levels
    }

    pub fn toner_pct(&self) -> u8 {
        self.toner_pct
    }

    pub fn maintenance_kit_pct(&self) -> u8 {
        self.maintenance_kit_pct
    }

    pub fn roller_kit_pct(&self) -> u8 {
        self.roller_kit_pct
    }

    /// Imaging unit life as shown on the page, without the percent sign
    pub fn imaging_unit_pct(&self) -> &str {
        &self.imaging_unit_pct
    }
}
