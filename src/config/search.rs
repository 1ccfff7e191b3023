use crate::config::toml_config::{ReportConfig, REPORT_FORMATS, SOURCE_EXTENSIONS};
use crate::core::ConfigProvider;
use crate::domain::ports::SortOrder;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_OUTPUT_PATH: &str = "Search results";
const ALL_PROJECTS_NAME: &str = "all_projects";

/// Resolved settings of one search report run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub sources: Vec<String>,
    pub output_path: String,
    pub name: Option<String>,
    pub keyword: String,
    pub country: String,
    pub include_zero: bool,
    pub sort: SortOrder,
    pub formats: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            name: None,
            keyword: String::new(),
            country: String::new(),
            include_zero: false,
            sort: SortOrder::default(),
            formats: REPORT_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl From<ReportConfig> for SearchConfig {
    fn from(file: ReportConfig) -> Self {
        let defaults = Self::default();
        Self {
            sources: file.sources.files,
            output_path: file.output.path.unwrap_or(defaults.output_path),
            name: file.output.name,
            keyword: file.search.keyword.unwrap_or_default(),
            country: file.search.country.unwrap_or_default(),
            include_zero: file.search.include_zero.unwrap_or(defaults.include_zero),
            sort: file.search.sort.unwrap_or(defaults.sort),
            formats: file.output.formats.unwrap_or(defaults.formats),
        }
    }
}

impl ConfigProvider for SearchConfig {
    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    /// 輸出子目錄：指定名稱，否則使用關鍵字與國家
    fn report_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return path_component(name.trim());
        }
        let parts: Vec<&str> = [self.keyword.trim(), self.country.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            ALL_PROJECTS_NAME.to_string()
        } else {
            path_component(&parts.join("_"))
        }
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn include_zero(&self) -> bool {
        self.include_zero
    }

    fn sort_order(&self) -> SortOrder {
        self.sort
    }

    fn report_formats(&self) -> &[String] {
        &self.formats
    }
}

// 報告名稱只能是輸出目錄下的單一層目錄
fn path_component(raw: &str) -> String {
    let name: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            other => other,
        })
        .collect();
    if name.chars().all(|c| c == '.') {
        name.replace('.', "_")
    } else {
        name
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("sources", &self.sources)?;
        validation::validate_file_extensions("sources", &self.sources, &SOURCE_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("name", &self.report_name())?;
        validation::validate_one_of("formats", &self.formats, &REPORT_FORMATS)?;
        Ok(())
    }
}

/// Settings of the tabular subsidy summary run.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsidyConfig {
    pub input: String,
    pub output_path: String,
}

impl Validate for SubsidyConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_extensions(
            "input",
            std::slice::from_ref(&self.input),
            &["csv"],
        )?;
        validation::validate_path("output_path", &self.output_path)
    }
}
