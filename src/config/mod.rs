pub mod cli;
pub mod targets;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::browser::ChromeConfig;
    use crate::config::targets::{default_targets, validate_targets, TargetsFile};
    use crate::core::page_scraper::{DEFAULT_MAX_BOOKS, DEFAULT_MAX_SCROLLS};
    use crate::core::{ConfigProvider, ScrapeTarget};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_path, validate_positive_number, validate_range, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "booklist-etl")]
    #[command(about = "Scrape Goodreads list pages into a Genre,Name,URL CSV table")]
    pub struct CliConfig {
        /// Directory the CSV file is written to
        #[arg(long, default_value = ".")]
        pub output_path: String,

        #[arg(long, default_value = "books.csv")]
        pub output_file: String,

        /// Books kept per list page
        #[arg(long, default_value_t = DEFAULT_MAX_BOOKS)]
        pub max_books: usize,

        /// Pause after each scroll so lazy-loaded entries can render
        #[arg(long, default_value = "2000")]
        pub scroll_delay_ms: u64,

        /// Upper bound on scrolls per page
        #[arg(long, default_value_t = DEFAULT_MAX_SCROLLS)]
        pub max_scrolls: usize,

        /// TOML file replacing the built-in list of pages
        #[arg(long)]
        pub targets_file: Option<String>,

        #[arg(long, help = "Show the browser window instead of running headless")]
        pub headed: bool,

        #[arg(long, help = "List the pages that would be scraped and exit")]
        pub dry_run: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log as JSON lines on stderr")]
        pub log_json: bool,

        #[arg(long, help = "Log process CPU and memory after each phase")]
        pub monitor: bool,
    }

    impl CliConfig {
        /// The targets file if one was given, the built-in table otherwise.
        pub fn targets(&self) -> Result<Vec<ScrapeTarget>> {
            match &self.targets_file {
                Some(path) => {
                    tracing::info!("📁 Loading targets from: {}", path);
                    let file = TargetsFile::from_file(path)?;
                    file.validate()?;
                    Ok(file.targets)
                }
                None => Ok(default_targets()),
            }
        }

        pub fn chrome_config(&self) -> ChromeConfig {
            if self.headed {
                ChromeConfig::headed()
            } else {
                ChromeConfig::default()
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_file(&self) -> &str {
            &self.output_file
        }

        fn max_books(&self) -> usize {
            self.max_books
        }

        fn scroll_delay(&self) -> Duration {
            Duration::from_millis(self.scroll_delay_ms)
        }

        fn max_scrolls(&self) -> usize {
            self.max_scrolls
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_path", &self.output_path)?;
            validate_path("output_file", &self.output_file)?;
            validate_range("max_books", self.max_books, 1, 10_000)?;
            validate_positive_number("max_scrolls", self.max_scrolls, 1)?;
            if self.targets_file.is_none() {
                validate_targets(&default_targets())?;
            }
            Ok(())
        }
    }

}
