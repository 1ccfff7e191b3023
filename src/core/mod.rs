pub mod aggregate;
pub mod contribution;
pub mod dedup;
pub mod etl;
pub mod filter;
pub mod report;
pub mod serialize;
pub mod sort;
pub mod stats;
pub mod subsidy;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    Project, ProjectCollection, StatsSummary, Transaction, TransactionKind, TransactionView,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SortOrder, Storage};
pub use crate::utils::error::Result;
