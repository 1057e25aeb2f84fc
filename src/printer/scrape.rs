//! Scrape cycle: fetch both pages, then extract

use crate::extract::{extract_snapshot, parse, schema, ModelSchema};
use crate::fetch::{FetchOrchestrator, FetchSettings};
use crate::printer::{page_urls, PageSet, PrinterStatusSnapshot};
use crate::{FetchError, ScrapeError};

/// Scrapes printers of one model with a shared fetch engine
#[derive(Debug, Clone)]
pub struct PrinterScraper {
    orchestrator: FetchOrchestrator,
    schema: &'static ModelSchema,
}

impl PrinterScraper {
    /// Creates a scraper for `model`
    ///
    /// # Returns
    ///
    /// * `Err(ScrapeError::UnknownModel)` - No schema exists for the model
    /// * `Err(ScrapeError::Fetch)` - The HTTP client could not be built
    pub fn new(settings: FetchSettings, model: &str) -> Result<Self, ScrapeError> {
        let schema =
            schema::find(model).ok_or_else(|| ScrapeError::UnknownModel(model.to_string()))?;
        let orchestrator = FetchOrchestrator::new(settings)?;
        Ok(Self::with_orchestrator(orchestrator, schema))
    }

    /// Creates a scraper around an existing orchestrator
    pub fn with_orchestrator(orchestrator: FetchOrchestrator, schema: &'static ModelSchema) -> Self {
        Self {
            orchestrator,
            schema,
        }
    }

    /// The schema pages are read with
    pub fn schema(&self) -> &'static ModelSchema {
        self.schema
    }

    /// Runs one scrape cycle against a printer address
    ///
    /// # Returns
    ///
    /// * `Ok(PrinterStatusSnapshot)` - Every field was extracted
    /// * `Err(ScrapeError::PageUnreachable)` - Neither page could be fetched
    /// * `Err(ScrapeError::MissingPage)` - Only one of the two pages was fetched
    /// * `Err(ScrapeError::Extract)` - A page did not have the expected layout
    pub async fn scrape(&self, address: &str) -> Result<PrinterStatusSnapshot, ScrapeError> {
        tracing::info!(address, model = self.schema.model, "Scraping printer");

        let urls = page_urls(address);
        let pages = self
            .orchestrator
            .fetch_all(&urls)
            .await
            .map_err(|e| match e {
                FetchError::EmptyResult { .. } => ScrapeError::PageUnreachable {
                    address: address.to_string(),
                },
                other => ScrapeError::Fetch(other),
            })?;

        let pages = PageSet::from_pages(address, pages)?;
        let status = parse(&pages.status);
        let topbar = parse(&pages.topbar);

        let snapshot = extract_snapshot(address, &status, &topbar, self.schema)?;
        tracing::info!(address, "Printer status captured");
        Ok(snapshot)
    }
}

/// Scrapes one printer with a fresh fetch engine
///
/// # Example
///
/// ```no_run
/// use printer_status::{scrape_printer, FetchSettings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let snapshot =
///     scrape_printer("http://192.168.0.11", FetchSettings::default(), "Lexmark MS811").await?;
/// println!("Toner: {}%", snapshot.toner_pct());
/// # Ok(())
/// # }
/// ```
pub async fn scrape_printer(
    address: &str,
    settings: FetchSettings,
    model: &str,
) -> Result<PrinterStatusSnapshot, ScrapeError> {
    PrinterScraper::new(settings, model)?.scrape(address).await
}
