use crate::domain::model::{Project, ProjectCollection, Transaction, TransactionKind};
use crate::utils::error::{AidError, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

// XML 原始結構，只在這個邊界使用，轉換後即丟棄
#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(rename = "project", default)]
    projects: Vec<XmlProject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XmlProject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    program_name: Option<String>,
    #[serde(default)]
    executing_agency_partner: Option<String>,
    #[serde(default)]
    maximum_contribution: Option<String>,
    #[serde(default)]
    countries: Option<XmlCountries>,
    #[serde(default)]
    transactions: Option<XmlTransactions>,
}

// <countries> 底下的子元素不論標籤名稱，一律視為一筆國家資料
#[derive(Debug)]
struct XmlCountries {
    entries: Vec<String>,
}

impl<'de> Deserialize<'de> for XmlCountries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = XmlCountries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a list of country entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(tag) = map.next_key::<String>()? {
                    let text: String = map.next_value()?;
                    // 屬性與元素本身的文字不是國家資料
                    if tag.starts_with('@') || tag == "$text" {
                        continue;
                    }
                    entries.push(text.trim().to_string());
                }
                Ok(XmlCountries { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Debug, Deserialize)]
struct XmlTransactions {
    #[serde(rename = "transaction", default)]
    entries: Vec<XmlTransaction>,
}

#[derive(Debug, Deserialize)]
struct XmlTransaction {
    #[serde(rename = "@transactionType")]
    kind: String,
    #[serde(rename = "@transactionDate", default)]
    date: String,
    #[serde(rename = "$text", default)]
    amount: Option<String>,
}

/// Parses a project tree document: any root element holding `<project>`
/// children.
pub fn parse_projects_xml(source_name: &str, text: &str) -> Result<ProjectCollection> {
    let document: XmlDocument = quick_xml::de::from_str(text)?;

    document
        .projects
        .into_iter()
        .enumerate()
        .map(|(index, raw)| into_project(source_name, index, raw))
        .collect()
}

fn into_project(source_name: &str, index: usize, raw: XmlProject) -> Result<Project> {
    let title = raw.title.unwrap_or_default();
    let malformed = |message: String| AidError::MalformedRecord {
        source_name: source_name.to_string(),
        message: format!("project #{} ('{}'): {}", index + 1, title, message),
    };

    let max_text = raw.maximum_contribution.unwrap_or_default();
    let maximum_contribution = max_text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| malformed(format!("invalid maximumContribution '{}'", max_text)))?;

    let raw_transactions = raw
        .transactions
        .map(|t| t.entries)
        .unwrap_or_default();
    if raw_transactions.is_empty() {
        return Err(malformed("missing transactions".to_string()));
    }

    let transactions = raw_transactions
        .into_iter()
        .map(|t| {
            let kind = TransactionKind::from_label(&t.kind)
                .ok_or_else(|| malformed(format!("unknown transactionType '{}'", t.kind)))?;
            Ok(Transaction {
                transaction_type: kind,
                transaction_date: t.date,
                amount: t.amount.map(|a| a.trim().to_string()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Project {
        title,
        description: raw.description.unwrap_or_default(),
        program_name: raw.program_name.unwrap_or_default(),
        executing_agency_partner: raw.executing_agency_partner.unwrap_or_default(),
        maximum_contribution,
        countries: raw.countries.map(|c| c.entries).unwrap_or_default(),
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<projects>
  <project>
    <title>Paix au Bangsamoro</title>
    <description>Soutien &amp; transition</description>
    <programName>Philippines</programName>
    <executingAgencyPartner>CECI</executingAgencyPartner>
    <maximumContribution>150000.50</maximumContribution>
    <countries>
      <country>Philippines (45,5%)</country>
      <country>Laos (54,5%)</country>
    </countries>
    <transactions>
      <transaction transactionType="Engagement" transactionDate="2018-01-01">150000.50</transaction>
      <transaction transactionType="Déboursé" transactionDate="2018-06-30">5000</transaction>
      <transaction transactionType="Déboursé" transactionDate="2018-12-31"/>
    </transactions>
  </project>
  <project>
    <title>Eau potable</title>
    <description>Puits</description>
    <programName>Haïti</programName>
    <executingAgencyPartner>Oxfam</executingAgencyPartner>
    <maximumContribution>20</maximumContribution>
    <countries>
      <country>Haïti (100,00%)</country>
    </countries>
    <transactions>
      <transaction transactionType="Déboursé" transactionDate="2019-01-01">20</transaction>
    </transactions>
  </project>
</projects>
"#;

    #[test]
    fn test_parse_projects() {
        let projects = parse_projects_xml("sample.xml", SAMPLE).unwrap();
        assert_eq!(projects.len(), 2);

        let first = &projects[0];
        assert_eq!(first.title, "Paix au Bangsamoro");
        assert_eq!(first.description, "Soutien & transition");
        assert_eq!(first.maximum_contribution, 150000.50);
        assert_eq!(first.countries, vec!["Philippines (45,5%)", "Laos (54,5%)"]);
        assert_eq!(first.transactions.len(), 3);
        assert!(first.transactions[0].is_pledge());
        assert_eq!(first.transactions[1].amount.as_deref(), Some("5000"));
        assert_eq!(first.transactions[1].transaction_date, "2018-06-30");
        assert!(!first.transactions[2].has_nonzero_amount_text());

        assert_eq!(projects[1].countries.len(), 1);
    }

    #[test]
    fn test_missing_transactions_is_malformed() {
        let text = r#"<projects><project>
            <title>Sans transactions</title>
            <maximumContribution>10</maximumContribution>
        </project></projects>"#;
        let err = parse_projects_xml("bad.xml", text).unwrap_err();
        assert!(matches!(err, AidError::MalformedRecord { .. }));
        assert!(err.to_string().contains("Sans transactions"));
    }

    #[test]
    fn test_unknown_transaction_type_is_malformed() {
        let text = r#"<projects><project>
            <title>Type inconnu</title>
            <maximumContribution>10</maximumContribution>
            <transactions><transaction transactionType="Remboursement" transactionDate="2020-01-01">5</transaction></transactions>
        </project></projects>"#;
        assert!(matches!(
            parse_projects_xml("bad.xml", text),
            Err(AidError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_invalid_max_contribution_is_malformed() {
        let text = r#"<projects><project>
            <title>Montant</title>
            <maximumContribution>beaucoup</maximumContribution>
            <transactions><transaction transactionType="Déboursé" transactionDate="2020-01-01">5</transaction></transactions>
        </project></projects>"#;
        assert!(parse_projects_xml("bad.xml", text).is_err());
    }

    #[test]
    fn test_country_entries_under_any_tag() {
        let text = r#"<projects><project>
            <title>Contributions</title>
            <maximumContribution>10</maximumContribution>
            <countries>
              <countryContribution>Philippines (45,5%)</countryContribution>
              <country>Laos (54,5%)</country>
            </countries>
            <transactions><transaction transactionType="Déboursé" transactionDate="2020-01-01">5</transaction></transactions>
        </project></projects>"#;
        let projects = parse_projects_xml("any_tag.xml", text).unwrap();
        assert_eq!(
            projects[0].countries,
            vec!["Philippines (45,5%)", "Laos (54,5%)"]
        );
    }

    #[test]
    fn test_other_elements_between_projects() {
        let text = r#"<projects>
            <project>
              <title>Premier</title>
              <maximumContribution>10</maximumContribution>
              <transactions><transaction transactionType="Déboursé" transactionDate="2020-01-01">5</transaction></transactions>
            </project>
            <meta/>
            <project>
              <title>Second</title>
              <maximumContribution>20</maximumContribution>
              <transactions><transaction transactionType="Engagement" transactionDate="2020-02-01">20</transaction></transactions>
            </project>
        </projects>"#;
        let projects = parse_projects_xml("meta.xml", text).unwrap();
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Premier", "Second"]);
    }

    #[test]
    fn test_empty_root() {
        let projects = parse_projects_xml("empty.xml", "<projects></projects>").unwrap();
        assert!(projects.is_empty());
    }
}
