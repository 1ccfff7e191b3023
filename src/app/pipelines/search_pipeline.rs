use crate::adapters::parse_projects;
use crate::core::report::{self, DESCRIPTIONS_FILE, PROJECTS_FILE, STATS_FILE, TRANSACTIONS_FILE};
use crate::core::serialize::serialize_collection;
use crate::core::{
    dedup, filter, sort, stats, ConfigProvider, Pipeline, ProjectCollection, SortOrder,
    StatsSummary, Storage,
};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub projects: ProjectCollection,
    pub stats: StatsSummary,
}

/// Merges every configured project source, removes duplicates, filters by
/// keyword (and country when one is set), sorts and writes the report files.
pub struct SearchPipeline<S: Storage, C: ConfigProvider> {
    sources: S,
    output: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SearchPipeline<S, C> {
    pub fn new(sources: S, output: S, config: C) -> Self {
        Self {
            sources,
            output,
            config,
        }
    }

    fn wants(&self, format: &str) -> bool {
        self.config.report_formats().iter().any(|f| f == format)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SearchPipeline<S, C> {
    type Extracted = Vec<ProjectCollection>;
    type Transformed = SearchResult;

    fn extract(&self) -> Result<Vec<ProjectCollection>> {
        let mut collections = Vec::with_capacity(self.config.sources().len());

        for path in self.config.sources() {
            tracing::debug!("Reading project source: {}", path);
            let data = self.sources.read_file(path)?;
            let projects = parse_projects(path, &data)?;
            tracing::info!("📥 Loaded {} projects from {}", projects.len(), path);
            collections.push(projects);
        }

        Ok(collections)
    }

    fn transform(&self, data: Vec<ProjectCollection>) -> Result<SearchResult> {
        let merged = dedup::merge(&data);
        let unique = dedup::dedup(&merged)?;
        tracing::info!(
            "🔗 Merged {} projects, {} after removing duplicates",
            merged.len(),
            unique.len()
        );

        let mut found =
            filter::by_keyword(&unique, self.config.keyword(), self.config.include_zero())?;
        if !self.config.country().is_empty() {
            found = filter::by_country(&found, self.config.country());
        }

        let projects = match self.config.sort_order() {
            SortOrder::Desc => sort::sort_by_contribution(&found, true),
            SortOrder::Asc => sort::sort_by_contribution(&found, false),
            SortOrder::Input => found,
        };

        let stats = stats::summarize(&projects, self.config.country())?;
        tracing::info!(
            "🔍 Found {} projects, total sent {:.2} over {} transactions",
            stats.nb_projects,
            stats.total_contrib,
            stats.nb_transactions_sent
        );

        Ok(SearchResult { projects, stats })
    }

    fn load(&self, result: SearchResult) -> Result<String> {
        let name = self.config.report_name();
        let file = |file_name: &str| format!("{}/{}", name, file_name);

        if self.wants("stats") {
            let text = report::render_stats(&result.stats, self.config.keyword());
            self.output.write_file(&file(STATS_FILE), text.as_bytes())?;
        }
        if self.wants("projects") {
            let text = serialize_collection(&result.projects)?;
            self.output.write_file(&file(PROJECTS_FILE), text.as_bytes())?;
        }
        if self.wants("transactions") {
            let text = report::render_transactions(&result.stats.transactions);
            self.output.write_file(&file(TRANSACTIONS_FILE), text.as_bytes())?;
        }
        if self.wants("descriptions") {
            let text =
                report::render_project_descriptions(&result.projects, self.config.country())?;
            self.output.write_file(&file(DESCRIPTIONS_FILE), text.as_bytes())?;
        }

        let output_dir = format!("{}/{}", self.config.output_path(), name);
        tracing::info!("📝 Report written to {}", output_dir);
        Ok(output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::search::SearchConfig;
    use crate::utils::error::AidError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MemoryStorage {
        fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
            self
        }

        fn text(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                AidError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn project_xml(title: &str, max: &str, country: &str, transactions: &str) -> String {
        format!(
            "<project><title>{title}</title><description>Projet {title}</description>\
             <programName>Programme</programName><executingAgencyPartner>SUCO</executingAgencyPartner>\
             <maximumContribution>{max}</maximumContribution>\
             <countries><country>{country}</country></countries>\
             <transactions>{transactions}</transactions></project>"
        )
    }

    fn disbursed(amount: &str) -> String {
        format!(
            "<transaction transactionType=\"Déboursé\" transactionDate=\"2019-01-01\">{amount}</transaction>"
        )
    }

    fn pledged(amount: &str) -> String {
        format!(
            "<transaction transactionType=\"Engagement\" transactionDate=\"2018-01-01\">{amount}</transaction>"
        )
    }

    fn sources() -> MemoryStorage {
        let shared = project_xml("Bangsamoro école", "300", "Philippines (50%)", &disbursed("100"));
        let active = format!(
            "<projects>{}{}</projects>",
            shared,
            project_xml("Santé Ukraine", "900", "Ukraine (100%)", &disbursed("40")),
        );
        let closed = format!(
            "<projects>{}{}</projects>",
            shared,
            project_xml(
                "Bangsamoro promesse",
                "50",
                "Philippines (100%)",
                &pledged("70")
            ),
        );
        MemoryStorage::default()
            .with_file("active.xml", &active)
            .with_file("closed.xml", &closed)
    }

    fn config(keyword: &str) -> SearchConfig {
        SearchConfig {
            sources: vec!["active.xml".to_string(), "closed.xml".to_string()],
            output_path: "out".to_string(),
            keyword: keyword.to_string(),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_transform_dedups_and_sorts() {
        let pipeline = SearchPipeline::new(sources(), MemoryStorage::default(), config(""));
        let extracted = pipeline.extract().unwrap();
        assert_eq!(extracted.iter().map(Vec::len).sum::<usize>(), 4);

        let result = pipeline.transform(extracted).unwrap();
        let titles: Vec<&str> = result.projects.iter().map(|p| p.title.as_str()).collect();
        // 只有承諾款的專案被零金額篩選排除
        assert_eq!(titles, vec!["Santé Ukraine", "Bangsamoro école"]);
        assert_eq!(result.stats.total_contrib, 140.0);
    }

    #[test]
    fn test_country_filter_and_share() {
        let mut config = config("");
        config.country = "philippines".to_string();
        let pipeline = SearchPipeline::new(sources(), MemoryStorage::default(), config);
        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert_eq!(result.stats.nb_projects, 1);
        assert_eq!(result.stats.total_contrib, 50.0);
    }

    #[test]
    fn test_load_writes_selected_formats() {
        let mut config = config("bangsamoro");
        config.include_zero = true;
        config.formats = vec!["stats".to_string(), "projects".to_string()];
        let pipeline = SearchPipeline::new(sources(), MemoryStorage::default(), config);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert_eq!(result.stats.nb_projects, 2);
        assert_eq!(result.stats.nb_transactions, 2);
        assert_eq!(result.stats.nb_transactions_sent, 1);

        let output_dir = pipeline.load(result).unwrap();
        assert_eq!(output_dir, "out/bangsamoro");

        let readme = pipeline.output.text("bangsamoro/README.md").unwrap();
        assert!(readme.contains("__Number of projects__ : 2"));
        let projects = pipeline.output.text("bangsamoro/projects.json").unwrap();
        assert_eq!(crate::core::serialize::parse_collection(&projects).unwrap().len(), 2);
        assert!(pipeline.output.text("bangsamoro/transactions.txt").is_none());
    }

    #[test]
    fn test_missing_source_fails() {
        let mut config = config("");
        config.sources.push("missing.xml".to_string());
        let pipeline = SearchPipeline::new(sources(), MemoryStorage::default(), config);
        assert!(matches!(pipeline.extract(), Err(AidError::IoError(_))));
    }
}
