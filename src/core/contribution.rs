use crate::domain::model::Project;
use crate::utils::error::{AidError, Result};

/// Returns the share of `project` attributable to the country matching
/// `country_query`, as a fraction in `[0, 1]`.
///
/// An empty query, or a query matching none of the project's country
/// entries, yields full attribution (`1.0`). Only the first matching entry
/// is considered.
pub fn contribution_share(project: &Project, country_query: &str) -> Result<f64> {
    if country_query.is_empty() {
        return Ok(1.0);
    }

    let query = country_query.to_lowercase();
    let Some(entry) = project
        .countries
        .iter()
        .find(|entry| entry.to_lowercase().contains(&query))
    else {
        tracing::trace!(
            "No country entry for '{}' in '{}', using full attribution",
            country_query,
            project.title
        );
        return Ok(1.0);
    };

    parse_percentage(entry).ok_or_else(|| AidError::MalformedPercentage {
        project: project.title.clone(),
        entry: entry.clone(),
    })
}

/// 解析像 "Philippines (45,5%)" 這樣的尾端百分比，回傳 0.455
fn parse_percentage(entry: &str) -> Option<f64> {
    let token = entry.trim_end().rsplit(' ').next()?;
    let number = token
        .trim_start_matches('(')
        .trim_end_matches(')')
        .strip_suffix('%')?
        .replace(',', ".");

    let percent: f64 = number.parse().ok()?;
    if !(0.0..=100.0).contains(&percent) {
        return None;
    }
    Some(percent / 100.0)
}
