pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::{SearchPipeline, SearchResult, SubsidyPipeline};
pub use config::cli::LocalStorage;
pub use config::search::{SearchConfig, SubsidyConfig};
pub use config::toml_config::ReportConfig;
pub use crate::core::etl::ReportEngine;
pub use domain::model::{Project, ProjectCollection, StatsSummary, Transaction, TransactionKind};
pub use utils::error::{AidError, Result};
