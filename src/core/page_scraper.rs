use crate::domain::model::{BookRecord, CatalogEntry, ExtractOutcome, ScrapeTarget};
use crate::domain::ports::{BrowserSession, ConfigProvider, SessionFactory};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_MAX_BOOKS: usize = 100;
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_SCROLLS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperSettings {
    /// Records kept per target.
    pub max_books: usize,
    /// Blocking pause after each scroll while lazy content renders.
    pub scroll_delay: Duration,
    /// Hard ceiling on scroll passes, for pages that never stop growing.
    pub max_scrolls: usize,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            max_books: DEFAULT_MAX_BOOKS,
            scroll_delay: DEFAULT_SCROLL_DELAY,
            max_scrolls: DEFAULT_MAX_SCROLLS,
        }
    }
}

impl ScraperSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            max_books: config.max_books(),
            scroll_delay: config.scroll_delay(),
            max_scrolls: config.max_scrolls(),
        }
    }
}

/// Scrolls one infinite-scroll catalog page and collects its book links.
///
/// Each target gets a fresh session from the factory. The session is dropped
/// (and the browser torn down) before `extract` returns, whatever happened.
pub struct PageScraper<F: SessionFactory> {
    factory: F,
    settings: ScraperSettings,
}

impl<F: SessionFactory> PageScraper<F> {
    pub fn new(factory: F, settings: ScraperSettings) -> Self {
        Self { factory, settings }
    }

    pub fn settings(&self) -> &ScraperSettings {
        &self.settings
    }

    /// Never fails: an error ends the scroll loop and is reported in
    /// `ExtractOutcome::failure` next to whatever was collected before it.
    pub fn extract(&self, target: &ScrapeTarget) -> ExtractOutcome {
        tracing::info!("Extracting books for genre: {}", target.category);

        let mut records = Vec::new();
        let failure = match self.scroll_and_collect(target, &mut records) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Error occurred while scraping {}: {}", target.category, e);
                Some(e.to_string())
            }
        };

        tracing::debug!(
            "Collected {} books for genre: {}",
            records.len(),
            target.category
        );
        ExtractOutcome { records, failure }
    }

    fn scroll_and_collect(&self, target: &ScrapeTarget, records: &mut Vec<BookRecord>) -> Result<()> {
        let max_books = self.settings.max_books;
        let mut session = self.factory.open()?;
        session.navigate(&target.url)?;

        // Every pass re-reads all rendered anchors, so a book already taken
        // from this page is recognised by its detail URL and skipped.
        let mut seen_urls = HashSet::new();
        let mut last_height = session.content_height()?;
        let mut scrolls = 0;

        while records.len() < max_books {
            if scrolls >= self.settings.max_scrolls {
                tracing::warn!(
                    "Stopped after {} scrolls for genre: {} ({} books collected)",
                    scrolls,
                    target.category,
                    records.len()
                );
                break;
            }
            scrolls += 1;

            session.scroll_to_bottom()?;
            if !self.settings.scroll_delay.is_zero() {
                std::thread::sleep(self.settings.scroll_delay);
            }

            for entry in session.catalog_entries()? {
                let Some(record) = to_record(entry, &target.category) else {
                    continue;
                };
                if !seen_urls.insert(record.url.clone()) {
                    continue;
                }
                records.push(record);
                if records.len() >= max_books {
                    break;
                }
            }

            let new_height = session.content_height()?;
            if new_height == last_height {
                tracing::info!("Reached the bottom of the page for genre: {}", target.category);
                break;
            }
            last_height = new_height;
        }

        Ok(())
    }
}

/// Entries missing a title or a link are dropped.
fn to_record(entry: CatalogEntry, genre: &str) -> Option<BookRecord> {
    let name = entry.name?.trim().to_string();
    let url = entry.url?.trim().to_string();
    if name.is_empty() || url.is_empty() {
        tracing::debug!("Skipping catalog entry without title or link (genre: {})", genre);
        return None;
    }

    Some(BookRecord {
        genre: genre.to_string(),
        name,
        url,
    })
}
