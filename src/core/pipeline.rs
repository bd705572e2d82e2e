use crate::core::batch_runner::BatchRunner;
use crate::core::page_scraper::{PageScraper, ScraperSettings};
use crate::core::{ConfigProvider, Pipeline, SessionFactory, Storage};
use crate::domain::model::{BookRecord, ScrapeTarget, TransformResult};
use crate::utils::error::{EtlError, Result};
use std::path::Path;
use std::sync::Arc;

pub const CSV_HEADERS: [&str; 3] = ["Genre", "Name", "URL"];

/// Scrape every target, render one CSV table, write it once at the end.
pub struct BookPipeline<S: Storage, C: ConfigProvider, F: SessionFactory> {
    storage: S,
    config: C,
    runner: Arc<BatchRunner<F>>,
}

impl<S: Storage, C: ConfigProvider, F: SessionFactory> BookPipeline<S, C, F> {
    pub fn new(storage: S, config: C, factory: F, targets: Vec<ScrapeTarget>) -> Self {
        let scraper = PageScraper::new(factory, ScraperSettings::from_config(&config));
        Self {
            storage,
            config,
            runner: Arc::new(BatchRunner::new(scraper, targets)),
        }
    }

    pub fn output_location(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_file())
            .display()
            .to_string()
    }
}

#[async_trait::async_trait]
impl<S, C, F> Pipeline for BookPipeline<S, C, F>
where
    S: Storage,
    C: ConfigProvider,
    F: SessionFactory + 'static,
{
    async fn extract(&self) -> Result<Vec<BookRecord>> {
        let runner = Arc::clone(&self.runner);
        tracing::debug!("Scraping {} targets", runner.targets().len());

        // Scroll delays are blocking sleeps; keep them off the async workers.
        let batch = tokio::task::spawn_blocking(move || runner.run())
            .await
            .map_err(|e| EtlError::ProcessingError {
                message: format!("Scrape worker stopped unexpectedly: {}", e),
            })?;

        for report in batch.reports.iter().filter(|r| r.failure.is_some()) {
            tracing::warn!(
                "Partial results for genre {}: {} books kept ({})",
                report.category,
                report.collected,
                report.failure.as_deref().unwrap_or_default()
            );
        }
        tracing::info!(
            "Scraped {} books from {} targets ({} failed)",
            batch.records.len(),
            batch.reports.len(),
            batch.failed_targets()
        );

        Ok(batch.records)
    }

    async fn transform(&self, data: Vec<BookRecord>) -> Result<TransformResult> {
        // Headers are written by hand so an empty run still yields a header row.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for record in &data {
            writer.serialize(record)?;
        }

        let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
            message: format!("Failed to flush CSV buffer: {}", e),
        })?;
        let csv_output = String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })?;

        Ok(TransformResult {
            records: data,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.output_location();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.records.len(),
            result.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(self.config.output_file(), result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
