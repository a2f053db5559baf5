use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AreaEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AreaEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting area batch...");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} ellipses", rows.len());

        let report = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Computed {} areas ({} skipped), total area {:.6}",
            report.records.len(),
            report.skipped,
            report.total_area
        );

        let written = self.pipeline.load(report).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AreaRecord, AreaReport, EllipseRow};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingPipeline {
        steps: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Vec<EllipseRow>> {
            self.steps.lock().unwrap().push("extract");
            Ok(vec![EllipseRow {
                id: None,
                semi_major_axis: 1.0,
                semi_minor_axis: 1.0,
            }])
        }

        async fn transform(&self, rows: Vec<EllipseRow>) -> Result<AreaReport> {
            self.steps.lock().unwrap().push("transform");
            let records: Vec<AreaRecord> = rows
                .into_iter()
                .map(|row| AreaRecord {
                    area: row.ellipse().area(),
                    id: row.id,
                    semi_major_axis: row.semi_major_axis,
                    semi_minor_axis: row.semi_minor_axis,
                })
                .collect();
            Ok(AreaReport {
                total_area: records.iter().map(|r| r.area).sum(),
                records,
                skipped: 0,
            })
        }

        async fn load(&self, report: AreaReport) -> Result<Vec<String>> {
            self.steps.lock().unwrap().push("load");
            Ok(vec![format!("{} records", report.records.len())])
        }
    }

    #[tokio::test]
    async fn test_run_executes_steps_in_order() {
        let engine = AreaEngine::new(RecordingPipeline {
            steps: Mutex::new(Vec::new()),
        });

        let written = engine.run().await.unwrap();

        assert_eq!(written, vec!["1 records".to_string()]);
        assert_eq!(
            *engine.pipeline.steps.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }
}
