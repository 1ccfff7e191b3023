use crate::domain::model::SubsidyRecord;
use crate::utils::error::Result;

/// Reads subsidy rows from a CSV file with a header row.
pub fn parse_subsidies_csv(data: &[u8]) -> Result<Vec<SubsidyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    tracing::debug!("Parsed {} subsidy rows", records.len());
    Ok(records)
}
