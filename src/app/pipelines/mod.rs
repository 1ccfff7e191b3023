pub mod search_pipeline;
pub mod subsidy_pipeline;

pub use search_pipeline::{SearchPipeline, SearchResult};
pub use subsidy_pipeline::SubsidyPipeline;
