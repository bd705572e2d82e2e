use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting book list scrape");
        self.monitor.log_stats("Start");

        let books = self.pipeline.extract().await?;
        tracing::info!("Extracted {} books", books.len());
        self.monitor.log_stats("Extract");

        let table = self.pipeline.transform(books).await?;
        tracing::info!("Rendered {} rows", table.records.len());
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(table).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BookRecord, TransformResult};
    use crate::utils::error::EtlError;
    use std::sync::Mutex;

    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
        fail_load: bool,
    }

    impl RecordingPipeline {
        fn new(fail_load: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_load,
            }
        }

        fn push(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Vec<BookRecord>> {
            self.push("extract");
            Ok(vec![BookRecord {
                genre: "Travel".to_string(),
                name: "In a Sunburned Country".to_string(),
                url: "https://www.goodreads.com/book/show/24".to_string(),
            }])
        }

        async fn transform(&self, data: Vec<BookRecord>) -> Result<TransformResult> {
            self.push("transform");
            Ok(TransformResult {
                records: data,
                csv_output: String::new(),
            })
        }

        async fn load(&self, _result: TransformResult) -> Result<String> {
            self.push("load");
            if self.fail_load {
                return Err(EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "books.csv is read-only",
                )));
            }
            Ok("./books.csv".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_calls_phases_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::new(false));

        let output = engine.run().await.unwrap();

        assert_eq!(output, "./books.csv");
        assert_eq!(
            *engine.pipeline.calls.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_load_failure_propagates() {
        let engine = EtlEngine::new(RecordingPipeline::new(true));

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, EtlError::IoError(_)));
    }
}
