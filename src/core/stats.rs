use crate::core::aggregate::sum_disbursed;
use crate::core::transactions::extract_transactions;
use crate::domain::model::{Project, StatsSummary};
use crate::utils::error::Result;

pub fn summarize(projects: &[Project], country_query: &str) -> Result<StatsSummary> {
    let sent = extract_transactions(projects, false, false);

    Ok(StatsSummary {
        nb_projects: projects.len(),
        total_contrib: sum_disbursed(projects, country_query)?,
        nb_transactions: extract_transactions(projects, true, false).len(),
        nb_transactions_sent: sent.len(),
        transactions: sent,
    })
}
