use serde::{Deserialize, Serialize};

/// One catalog page to scrape, tagged with the genre its books are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub url: String,
    pub category: String,
}

impl ScrapeTarget {
    pub fn new(url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            category: category.into(),
        }
    }
}

/// One output row. Field renames fix the CSV header to `Genre,Name,URL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Raw read of one catalog anchor, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }
}

/// What one target produced: every record collected, plus the reason the
/// scroll loop stopped early if it failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub records: Vec<BookRecord>,
    pub failure: Option<String>,
}

impl ExtractOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub category: String,
    pub url: String,
    pub collected: usize,
    pub failure: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<BookRecord>,
    pub csv_output: String,
}
