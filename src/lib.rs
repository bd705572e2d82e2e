pub mod browser;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use browser::{ChromeConfig, ChromeSessionFactory};
pub use config::cli::LocalStorage;
pub use core::{
    batch_runner::BatchRunner,
    etl::EtlEngine,
    page_scraper::{PageScraper, ScraperSettings},
    pipeline::BookPipeline,
};
pub use domain::model::{BookRecord, CatalogEntry, ExtractOutcome, ScrapeTarget};
pub use utils::error::{EtlError, Result};
