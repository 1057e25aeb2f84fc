use crate::fetch::PageBody;
use crate::ScrapeError;
use std::fmt;

/// The two pages read from every printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRole {
    /// Supplies and tray status frame
    Status,

    /// Header frame with product name and status line
    Topbar,
}

impl PageRole {
    /// Both roles, in fetch order
    pub const ALL: [PageRole; 2] = [PageRole::Status, PageRole::Topbar];

    /// Path appended to the printer address
    pub fn path(&self) -> &'static str {
        match self {
            Self::Status => "/cgi-bin/dynamic/printer/PrinterStatus.html",
            Self::Topbar => "/cgi-bin/dynamic/topbar.html",
        }
    }

    /// Full URL of this page for a printer address
    pub fn url(&self, address: &str) -> String {
        format!("{}{}", address.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Topbar => write!(f, "topbar"),
        }
    }
}

/// URLs of every page role for a printer, in fetch order
pub fn page_urls(address: &str) -> Vec<String> {
    PageRole::ALL.iter().map(|role| role.url(address)).collect()
}

/// Fetched bodies sorted by role
#[derive(Debug, Clone)]
pub struct PageSet {
    pub status: String,
    pub topbar: String,
}

impl PageSet {
    /// Matches fetched pages to roles by URL
    ///
    /// Pages with unknown URLs are ignored. A role with no page is reported as
    /// [`ScrapeError::MissingPage`].
    pub fn from_pages(address: &str, pages: Vec<PageBody>) -> Result<Self, ScrapeError> {
        let status_url = PageRole::Status.url(address);
        let topbar_url = PageRole::Topbar.url(address);

        let mut status = None;
        let mut topbar = None;
        for page in pages {
            if page.url == status_url {
                status = Some(page.body);
            } else if page.url == topbar_url {
                topbar = Some(page.body);
            } else {
                tracing::debug!(url = %page.url, "Ignoring page with no role");
            }
        }

        Ok(Self {
            status: status.ok_or(ScrapeError::MissingPage {
                role: PageRole::Status,
            })?,
            topbar: topbar.ok_or(ScrapeError::MissingPage {
                role: PageRole::Topbar,
            })?,
        })
    }
}
