//! Project aggregation
//!
//! Projects are not stored anywhere: each listing request rebuilds them from
//! the repository read-model. The recomputation is cheap and sidesteps an
//! entire class of stale-cache bugs; if a cache is ever layered on top it
//! must be keyed by a modification token and invalidated explicitly.

use crate::model::types::{ProjectModel, RepositoryModel};
use std::collections::BTreeMap;

/// Title given to the unnamed root project
pub const ROOT_PROJECT_TITLE: &str = "main";

/// Group repositories into projects by their leading path segment.
///
/// `platform/api.git` lands in project `platform`; a repository without a
/// path separator lands in the root project (named `""`, titled
/// [`ROOT_PROJECT_TITLE`]). Member lists preserve input order, each
/// project's `last_change` is the most recent change among its members, and
/// the result is ordered by project name.
pub fn aggregate_projects(repositories: &[RepositoryModel]) -> Vec<ProjectModel> {
    let mut grouped: BTreeMap<&str, ProjectModel> = BTreeMap::new();

    for repository in repositories {
        let project_name = leading_segment(&repository.name);
        let project = grouped.entry(project_name).or_insert_with(|| ProjectModel {
            name: project_name.to_string(),
            title: project_name
                .is_empty()
                .then(|| ROOT_PROJECT_TITLE.to_string()),
            description: None,
            repositories: Vec::new(),
            last_change: repository.last_change,
        });
        project.repositories.push(repository.name.clone());
        if repository.last_change > project.last_change {
            project.last_change = repository.last_change;
        }
    }

    grouped.into_values().collect()
}

/// Case-insensitive project lookup, as project URLs resolve
pub fn find_project<'a>(projects: &'a [ProjectModel], name: &str) -> Option<&'a ProjectModel> {
    projects
        .iter()
        .find(|project| project.name.eq_ignore_ascii_case(name))
}

fn leading_segment(repository_name: &str) -> &str {
    match repository_name.find('/') {
        Some(idx) => &repository_name[..idx],
        None => "",
    }
}
