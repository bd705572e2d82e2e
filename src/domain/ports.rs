use crate::domain::model::{BookRecord, CatalogEntry, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A live, exclusively owned browser page.
///
/// Implementations release the underlying browser in `Drop`, so a session
/// going out of scope is the teardown on every path, early returns included.
pub trait BrowserSession {
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Current scrollable extent of the document body, in pixels.
    fn content_height(&mut self) -> Result<i64>;

    fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Every catalog anchor currently rendered, in document order.
    fn catalog_entries(&mut self) -> Result<Vec<CatalogEntry>>;
}

pub trait SessionFactory: Send + Sync {
    type Session: BrowserSession;

    fn open(&self) -> Result<Self::Session>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn max_books(&self) -> usize;
    fn scroll_delay(&self) -> Duration;
    fn max_scrolls(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<BookRecord>>;
    async fn transform(&self, data: Vec<BookRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
