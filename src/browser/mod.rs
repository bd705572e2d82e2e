//! Headless Chrome implementation of the browser session ports.
//!
//! # Example
//!
//! ```no_run
//! use booklist_etl::browser::{ChromeConfig, ChromeSessionFactory};
//! use booklist_etl::core::{BrowserSession, SessionFactory};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = ChromeSessionFactory::new(ChromeConfig::default());
//! let mut session = factory.open()?;
//!
//! session.navigate("https://www.goodreads.com/list/show/1.Best_Books_Ever")?;
//! session.scroll_to_bottom()?;
//! let entries = session.catalog_entries()?;
//!
//! println!("Found {} books", entries.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod session;

pub use config::ChromeConfig;
pub use session::{ChromeSession, ChromeSessionFactory};
