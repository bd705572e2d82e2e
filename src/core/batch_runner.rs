use crate::core::page_scraper::PageScraper;
use crate::domain::model::{BookRecord, ScrapeTarget, TargetReport};
use crate::domain::ports::SessionFactory;

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub records: Vec<BookRecord>,
    pub reports: Vec<TargetReport>,
}

impl BatchResult {
    pub fn failed_targets(&self) -> usize {
        self.reports.iter().filter(|r| r.failure.is_some()).count()
    }
}

/// Walks the target table one page at a time, in table order.
pub struct BatchRunner<F: SessionFactory> {
    scraper: PageScraper<F>,
    targets: Vec<ScrapeTarget>,
}

impl<F: SessionFactory> BatchRunner<F> {
    pub fn new(scraper: PageScraper<F>, targets: Vec<ScrapeTarget>) -> Self {
        Self { scraper, targets }
    }

    pub fn targets(&self) -> &[ScrapeTarget] {
        &self.targets
    }

    pub fn run(&self) -> BatchResult {
        let mut result = BatchResult::default();

        for (index, target) in self.targets.iter().enumerate() {
            tracing::debug!(
                "Target {}/{}: {} ({})",
                index + 1,
                self.targets.len(),
                target.category,
                target.url
            );

            let outcome = self.scraper.extract(target);
            result.reports.push(TargetReport {
                category: target.category.clone(),
                url: target.url.clone(),
                collected: outcome.records.len(),
                failure: outcome.failure,
            });
            result.records.extend(outcome.records);
        }

        result
    }
}
