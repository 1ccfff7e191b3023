use crate::core::aggregate::project_disbursed;
use crate::core::serialize::serialize_project;
use crate::domain::model::{Project, ProjectCollection};
use crate::utils::error::Result;

/// Keeps the projects whose serialized text contains `keyword`
/// (case-insensitive). An empty keyword keeps everything.
///
/// Unless `include_zero` is set, projects with no disbursed money are
/// dropped first, whatever the keyword.
pub fn by_keyword(
    projects: &[Project],
    keyword: &str,
    include_zero: bool,
) -> Result<ProjectCollection> {
    let needle = keyword.to_lowercase();
    let mut found = Vec::new();

    for project in projects {
        if !include_zero && project_disbursed(project, "")? == 0.0 {
            continue;
        }

        if needle.is_empty() || serialize_project(project)?.to_lowercase().contains(&needle) {
            found.push(project.clone());
        }
    }

    tracing::debug!(
        "Keyword '{}' matched {} of {} projects",
        keyword,
        found.len(),
        projects.len()
    );
    Ok(found)
}

pub fn by_country(projects: &[Project], country_query: &str) -> ProjectCollection {
    let needle = country_query.to_lowercase();
    projects
        .iter()
        .filter(|project| {
            project
                .countries
                .iter()
                .any(|entry| entry.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
