//! Project navigation subset
//!
//! The navigation menu shows shared projects only. Small installations get
//! the full list in input order; past the limit, the menu keeps the most
//! recently active projects and presents them name-sorted, signalling that
//! the listing was truncated so the caller can append an "all projects"
//! entry.

use crate::model::ProjectModel;

/// Select the menu subset from the full project list.
///
/// Returns the entries and whether the list was truncated to `limit`.
pub fn project_menu_entries(projects: &[ProjectModel], limit: usize) -> (Vec<ProjectModel>, bool) {
    let mut shared: Vec<&ProjectModel> = projects
        .iter()
        .filter(|project| !project.is_user_project())
        .collect();

    let truncated = shared.len() > limit;
    if truncated {
        shared.sort_by(|a, b| b.last_change.cmp(&a.last_change));
        shared.truncate(limit);
        shared.sort_by(|a, b| a.display_name().cmp(b.display_name()));
    }

    (shared.into_iter().cloned().collect(), truncated)
}
