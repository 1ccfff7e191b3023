use crate::core::contribution::contribution_share;
use crate::domain::model::{Project, Transaction};
use crate::utils::error::{AidError, Result};

/// Sums the disbursed amounts of every project, each scaled by the project's
/// contribution share for `country_query`. Pledges never count.
pub fn sum_disbursed(projects: &[Project], country_query: &str) -> Result<f64> {
    projects.iter().try_fold(0.0, |total, project| {
        Ok(total + project_disbursed(project, country_query)?)
    })
}

pub fn project_disbursed(project: &Project, country_query: &str) -> Result<f64> {
    let share = contribution_share(project, country_query)?;
    let mut total = 0.0;
    for transaction in project.transactions.iter().filter(|t| t.is_disbursement()) {
        total += parse_amount(project, transaction)? * share;
    }
    Ok(total)
}

// 空白或缺少的金額視為 0，非數字則為錯誤
fn parse_amount(project: &Project, transaction: &Transaction) -> Result<f64> {
    let text = transaction.amount.as_deref().unwrap_or("").trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    parse_number(text).ok_or_else(|| AidError::MalformedAmount {
        project: project.title.clone(),
        value: text.to_string(),
    })
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
