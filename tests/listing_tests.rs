//! Listing filter engine integration tests
//!
//! This suite pins down the composition contract of the filter pipeline:
//! - name and team constraints union (a project needs only one of them)
//! - the recency window intersects (it narrows, never widens)
//! - unknown team names are skipped silently
//! - `days_back = 0` disables the recency filter, it never means "today"
//! - results are deduplicated and deterministically ordered

use chrono::{DateTime, TimeZone, Utc};
use gitshelf::access_control::AccessPermission;
use gitshelf::error::FilterError;
use gitshelf::listing::{
    FilterQuery, InMemoryTeamDirectory, ProjectFilterEngine, SortOrder, recency_threshold,
};
use gitshelf::model::{ProjectModel, TeamModel};
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Test Helpers
// =============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 15, 17, 30, 0).unwrap()
}

fn days_ago(days: i64) -> DateTime<Utc> {
    now() - chrono::TimeDelta::days(days)
}

fn project(name: &str, last_change: DateTime<Utc>) -> ProjectModel {
    ProjectModel {
        name: name.to_string(),
        title: None,
        description: None,
        repositories: vec![format!("{name}/main.git"), format!("{name}/docs.git")],
        last_change,
    }
}

fn team(name: &str, repositories: &[&str]) -> TeamModel {
    let mut team = TeamModel::new(name);
    for repository in repositories {
        team.grant(*repository, AccessPermission::Clone);
    }
    team
}

fn fixture() -> Vec<ProjectModel> {
    vec![
        project("platform", days_ago(1)),
        project("tools", days_ago(12)),
        project("archive", days_ago(90)),
        project("~alice", days_ago(2)),
    ]
}

fn directory() -> InMemoryTeamDirectory {
    InMemoryTeamDirectory::new([
        team("core", &["platform/main.git"]),
        team("ops", &["tools/main.git", "archive/main.git"]),
    ])
}

fn engine() -> ProjectFilterEngine<InMemoryTeamDirectory> {
    ProjectFilterEngine::new(directory(), 30)
}

fn names(projects: &[ProjectModel]) -> Vec<&str> {
    projects.iter().map(|p| p.name.as_str()).collect()
}

fn name_set(projects: &[ProjectModel]) -> HashSet<String> {
    projects.iter().map(|p| p.name.clone()).collect()
}

fn run(query: &FilterQuery) -> Vec<ProjectModel> {
    engine()
        .filter_with(&fixture(), query, SortOrder::default(), now())
        .unwrap()
}

// =============================================================================
// 1. Constraint-free and empty-input behavior
// =============================================================================

mod unconstrained {
    use super::*;

    #[test]
    fn test_no_constraints_returns_all_sorted_by_name() {
        let result = run(&FilterQuery::none());
        assert_eq!(names(&result), vec!["archive", "platform", "tools", "~alice"]);
    }

    #[test]
    fn test_empty_available_set_yields_empty_result() {
        let result = engine()
            .filter_with(&[], &FilterQuery::none(), SortOrder::default(), now())
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_default_query_equals_missing_query() {
        let explicit = run(&FilterQuery::default());
        let none = run(&FilterQuery::none());
        assert_eq!(names(&explicit), names(&none));
    }
}

// =============================================================================
// 2. Name constraint
// =============================================================================

mod name_filter {
    use super::*;

    #[test]
    fn test_substring_semantics() {
        // "o" matches anywhere within the name, not a full match
        let result = run(&FilterQuery::none().with_name_pattern("o"));
        assert_eq!(names(&result), vec!["platform", "tools"]);
    }

    #[test]
    fn test_anchored_pattern() {
        let result = run(&FilterQuery::none().with_name_pattern("^tool"));
        assert_eq!(names(&result), vec!["tools"]);
    }

    #[test]
    fn test_result_is_subset_of_available() {
        let available = name_set(&fixture());
        let result = run(&FilterQuery::none().with_name_pattern("a"));
        assert!(name_set(&result).is_subset(&available));
    }

    #[test]
    fn test_pattern_matching_nothing_yields_empty_result() {
        let result = run(&FilterQuery::none().with_name_pattern("zzz"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_malformed_pattern_surfaces_as_error() {
        let result = engine().filter_with(
            &fixture(),
            &FilterQuery::none().with_name_pattern("[unclosed"),
            SortOrder::default(),
            now(),
        );
        match result {
            Err(FilterError::InvalidPattern { pattern, .. }) => {
                assert_eq!(pattern, "[unclosed");
            }
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }
}

// =============================================================================
// 3. Team constraint
// =============================================================================

mod team_filter {
    use super::*;

    #[test]
    fn test_team_grant_selects_project() {
        let result = run(&FilterQuery::none().with_teams("core"));
        assert_eq!(names(&result), vec!["platform"]);
    }

    #[test]
    fn test_multiple_teams_are_comma_separated() {
        let result = run(&FilterQuery::none().with_teams("core,ops"));
        assert_eq!(names(&result), vec!["archive", "platform", "tools"]);
    }

    #[test]
    fn test_unknown_team_is_silently_skipped() {
        let result = run(&FilterQuery::none().with_teams("ghost-team"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_team_next_to_known_team_has_no_effect() {
        let with_ghost = run(&FilterQuery::none().with_teams("core,ghost-team"));
        let without = run(&FilterQuery::none().with_teams("core"));
        assert_eq!(names(&with_ghost), names(&without));
    }
}

// =============================================================================
// 4. Union of name and team constraints
// =============================================================================

mod union_semantics {
    use super::*;

    #[test]
    fn test_union_law() {
        let name_query = FilterQuery::none().with_name_pattern("^archive$");
        let team_query = FilterQuery::none().with_teams("core");
        let both = FilterQuery::none()
            .with_name_pattern("^archive$")
            .with_teams("core");

        let mut expected = name_set(&run(&name_query));
        expected.extend(name_set(&run(&team_query)));

        assert_eq!(name_set(&run(&both)), expected);
    }

    #[test]
    fn test_one_active_filter_suffices() {
        // "tools" fails the name constraint but satisfies the team one
        let query = FilterQuery::none().with_name_pattern("^platform$").with_teams("ops");
        let result = run(&query);
        assert!(name_set(&result).contains("tools"));
        assert!(name_set(&result).contains("platform"));
    }

    #[test]
    fn test_overlapping_matches_deduplicate() {
        // "platform" satisfies both constraints; it appears once
        let query = FilterQuery::none().with_name_pattern("^platform$").with_teams("core");
        let result = run(&query);
        assert_eq!(names(&result), vec!["platform"]);
    }
}

// =============================================================================
// 5. Recency window
// =============================================================================

mod recency {
    use super::*;

    #[test]
    fn test_window_retains_only_recent_projects() {
        let result = run(&FilterQuery::none().with_days_back(5));
        assert_eq!(names(&result), vec!["platform", "~alice"]);
    }

    #[test]
    fn test_example_alpha_beta() {
        let available = vec![
            project("alpha", days_ago(0)),
            project("beta", days_ago(10)),
        ];
        let result = engine()
            .filter_with(
                &available,
                &FilterQuery::none().with_days_back(5),
                SortOrder::default(),
                now(),
            )
            .unwrap();
        assert_eq!(names(&result), vec!["alpha"]);
    }

    #[test]
    fn test_zero_days_back_disables_the_window() {
        let result = run(&FilterQuery::none().with_days_back(0));
        assert_eq!(result.len(), fixture().len());
    }

    #[test]
    fn test_negative_days_back_disables_the_window() {
        let result = run(&FilterQuery::none().with_days_back(-3));
        assert_eq!(result.len(), fixture().len());
    }

    #[rstest]
    #[case(1, 5)]
    #[case(5, 14)]
    #[case(14, 29)]
    fn test_widening_the_window_is_monotonic(#[case] narrow: i64, #[case] wide: i64) {
        let narrow_set = name_set(&run(&FilterQuery::none().with_days_back(narrow)));
        let wide_set = name_set(&run(&FilterQuery::none().with_days_back(wide)));
        assert!(narrow_set.is_subset(&wide_set));
    }

    #[test]
    fn test_window_intersects_with_team_matches() {
        // "ops" matches tools (12d) and archive (90d); a 5-day window
        // narrows the union to nothing
        let query = FilterQuery::none().with_teams("ops").with_days_back(5);
        assert!(run(&query).is_empty());
    }

    #[test]
    fn test_threshold_is_start_of_day() {
        assert_eq!(
            recency_threshold(now(), 5),
            Utc.with_ymd_and_hms(2026, 7, 10, 0, 0, 0).unwrap()
        );
    }
}

// =============================================================================
// 6. Clamping
// =============================================================================

mod clamping {
    use super::*;

    fn result_with_clamp(max_days_back: i64, days_back: i64) -> Vec<ProjectModel> {
        ProjectFilterEngine::new(directory(), max_days_back)
            .filter_with(
                &fixture(),
                &FilterQuery::none().with_days_back(days_back),
                SortOrder::default(),
                now(),
            )
            .unwrap()
    }

    #[test]
    fn test_window_above_maximum_is_clamped() {
        // 60 days clamps to 14: archive (90d) stays out, tools (12d) stays in
        let result = result_with_clamp(14, 60);
        assert_eq!(names(&result), vec!["platform", "tools", "~alice"]);
    }

    #[test]
    fn test_window_equal_to_maximum_is_retained() {
        let at_max = result_with_clamp(14, 14);
        let clamped = result_with_clamp(14, 60);
        assert_eq!(names(&at_max), names(&clamped));
    }

    #[test]
    fn test_nonpositive_maximum_disables_clamping() {
        // with no clamp, a 120-day window reaches the 90-day-old project
        let result = result_with_clamp(0, 120);
        assert!(name_set(&result).contains("archive"));
    }
}

// =============================================================================
// 7. Ordering and idempotence
// =============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_natural_order_is_display_name_ascending() {
        let result = run(&FilterQuery::none());
        let mut sorted = names(&result);
        sorted.sort();
        assert_eq!(names(&result), sorted);
    }

    #[test]
    fn test_most_recent_first() {
        let result = engine()
            .filter_with(
                &fixture(),
                &FilterQuery::none(),
                SortOrder::MostRecentFirst,
                now(),
            )
            .unwrap();
        assert_eq!(names(&result), vec!["platform", "~alice", "tools", "archive"]);
    }

    #[test]
    fn test_same_query_twice_is_identical() {
        let query = FilterQuery::none().with_name_pattern("o").with_days_back(14);
        let first = run(&query);
        let second = run(&query);
        assert_eq!(names(&first), names(&second));
    }
}
