use crate::adapters::csv_source::parse_subsidies_csv;
use crate::config::search::SubsidyConfig;
use crate::core::report::{render_subsidies, STATS_FILE};
use crate::core::subsidy::summarize_subsidies;
use crate::core::{Pipeline, Storage};
use crate::domain::model::{SubsidyRecord, SubsidySummary};
use crate::utils::error::Result;

pub const SUBSIDY_REPORT_DIR: &str = "subsidies";

pub struct SubsidyPipeline<S: Storage> {
    sources: S,
    output: S,
    config: SubsidyConfig,
}

impl<S: Storage> SubsidyPipeline<S> {
    pub fn new(sources: S, output: S, config: SubsidyConfig) -> Self {
        Self {
            sources,
            output,
            config,
        }
    }
}

impl<S: Storage> Pipeline for SubsidyPipeline<S> {
    type Extracted = Vec<SubsidyRecord>;
    type Transformed = SubsidySummary;

    fn extract(&self) -> Result<Vec<SubsidyRecord>> {
        let data = self.sources.read_file(&self.config.input)?;
        let records = parse_subsidies_csv(&data)?;
        tracing::info!("📥 Loaded {} subsidy rows from {}", records.len(), self.config.input);
        Ok(records)
    }

    fn transform(&self, data: Vec<SubsidyRecord>) -> Result<SubsidySummary> {
        let summary = summarize_subsidies(&data)?;
        tracing::info!(
            "💰 Sent {:.2}, engaged {:.2}, {} organisations",
            summary.total_sent,
            summary.total_engaged,
            summary.organisations.len()
        );
        Ok(summary)
    }

    fn load(&self, result: SubsidySummary) -> Result<String> {
        let path = format!("{}/{}", SUBSIDY_REPORT_DIR, STATS_FILE);
        self.output
            .write_file(&path, render_subsidies(&result).as_bytes())?;
        Ok(format!("{}/{}", self.config.output_path, SUBSIDY_REPORT_DIR))
    }
}
