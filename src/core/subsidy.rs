use crate::core::aggregate::parse_number;
use crate::domain::model::{Organisation, SubsidyRecord, SubsidySummary};
use crate::utils::error::{AidError, Result};
use std::collections::BTreeMap;

/// 彙總補助計畫：已撥款總額（五期撥款合計）、承諾總額與受補助機構
pub fn summarize_subsidies(records: &[SubsidyRecord]) -> Result<SubsidySummary> {
    let mut total_sent = 0.0;
    let mut total_engaged = 0.0;
    let mut organisations = BTreeMap::new();

    for record in records {
        for installment in record.installments() {
            total_sent += parse_cell(record, installment)?;
        }
        total_engaged += parse_cell(record, &record.subsidy_amount)?;

        // 同一機構出現多次時以最後一筆名稱為準
        organisations.insert(
            record.org_id.clone(),
            Organisation {
                name_local: record.org_name_local.clone(),
                name_foreign: record.org_name_foreign.clone(),
            },
        );
    }

    Ok(SubsidySummary {
        nb_records: records.len(),
        total_sent,
        total_engaged,
        organisations,
    })
}

fn parse_cell(record: &SubsidyRecord, cell: &str) -> Result<f64> {
    let text = cell.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    parse_number(text).ok_or_else(|| AidError::MalformedAmount {
        project: format!("subsidy for organisation {}", record.org_id),
        value: text.to_string(),
    })
}
