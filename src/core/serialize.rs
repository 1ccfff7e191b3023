// 去重、關鍵字搜尋與 projects.json 共用同一份 JSON 文字，欄位順序固定

use crate::domain::model::{Project, ProjectCollection};
use crate::utils::error::Result;

pub fn serialize_project(project: &Project) -> Result<String> {
    Ok(serde_json::to_string(project)?)
}

pub fn serialize_collection(projects: &[Project]) -> Result<String> {
    Ok(serde_json::to_string_pretty(projects)?)
}

pub fn parse_project(text: &str) -> Result<Project> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_collection(text: &str) -> Result<ProjectCollection> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{disbursed, pledged, project};

    #[test]
    fn test_round_trip_preserves_content() {
        let mut p = project("Éducation à Mindanao", 123456.78, vec![disbursed("1.5"), pledged("")]);
        p.countries.push("Laos (12,5%)".to_string());

        let text = serialize_project(&p).unwrap();
        assert_eq!(parse_project(&text).unwrap(), p);
        assert_eq!(serialize_project(&parse_project(&text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let p = project("A", 10.0, vec![disbursed("10")]);
        assert_eq!(serialize_project(&p).unwrap(), serialize_project(&p.clone()).unwrap());
    }

    #[test]
    fn test_field_order_and_names() {
        let p = project("A", 10.0, vec![disbursed("10")]);
        let text = serialize_project(&p).unwrap();
        let title = text.find("\"title\"").unwrap();
        let program = text.find("\"programName\"").unwrap();
        let transactions = text.find("\"transactions\"").unwrap();
        assert!(title < program && program < transactions);
        assert!(text.contains("\"transactionType\":\"Déboursé\""));
    }

    #[test]
    fn test_collection_round_trip() {
        let projects = vec![
            project("A", 10.0, vec![disbursed("10")]),
            project("B", 20.0, vec![pledged("20")]),
        ];
        let text = serialize_collection(&projects).unwrap();
        assert_eq!(parse_collection(&text).unwrap(), projects);
    }
}
