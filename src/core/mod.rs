pub mod batch_runner;
pub mod etl;
pub mod page_scraper;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{BookRecord, ScrapeTarget, TransformResult};
pub use crate::domain::ports::{BrowserSession, ConfigProvider, Pipeline, SessionFactory, Storage};
pub use crate::utils::error::Result;
