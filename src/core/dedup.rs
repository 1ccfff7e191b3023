use crate::core::serialize::serialize_project;
use crate::domain::model::{Project, ProjectCollection};
use crate::utils::error::Result;
use std::collections::HashMap;

pub fn merge(collections: &[ProjectCollection]) -> ProjectCollection {
    collections.iter().flatten().cloned().collect()
}

/// Removes projects whose canonical serialization is identical.
///
/// Identity is the full serialized content, not a business key. Output order
/// follows the hash map and is unspecified.
pub fn dedup(projects: &[Project]) -> Result<ProjectCollection> {
    let mut by_content: HashMap<String, Project> = HashMap::with_capacity(projects.len());
    for project in projects {
        by_content.insert(serialize_project(project)?, project.clone());
    }

    tracing::debug!(
        "Dedup kept {} of {} projects",
        by_content.len(),
        projects.len()
    );
    Ok(by_content.into_values().collect())
}
