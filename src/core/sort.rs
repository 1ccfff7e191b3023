use crate::domain::model::{Project, ProjectCollection};

// 穩定排序：相同金額保持原順序
pub fn sort_by_contribution(projects: &[Project], descending: bool) -> ProjectCollection {
    let mut sorted = projects.to_vec();
    if descending {
        sorted.sort_by(|a, b| b.maximum_contribution.total_cmp(&a.maximum_contribution));
    } else {
        sorted.sort_by(|a, b| a.maximum_contribution.total_cmp(&b.maximum_contribution));
    }
    sorted
}
