//! Project filter engine
//!
//! Computes the visible, filtered, sorted set of projects for a listing
//! view. The composition rule is easy to get backwards and is therefore
//! kept as two explicit match sets:
//!
//! - the name constraint and the team constraint each produce a match set,
//!   and the candidate set is their **union**: a project only needs to
//!   satisfy one active constraint;
//! - the recency window then **intersects** the candidates: it narrows,
//!   never widens.
//!
//! The engine does not re-check permissions: the available set is expected
//! to be access-filtered upstream.

use crate::config::ListingConfig;
use crate::error::{FilterError, FilterResult};
use crate::listing::query::FilterQuery;
use crate::model::{ProjectModel, TeamModel};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Team lookup seam.
///
/// Listing filters resolve team names through the authentication layer;
/// tests and the diagnostic CLI use the in-memory implementation.
pub trait TeamDirectory {
    fn team(&self, name: &str) -> Option<&TeamModel>;
}

/// Team directory backed by a map, for snapshots and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamDirectory {
    teams: HashMap<String, TeamModel>,
}

impl InMemoryTeamDirectory {
    pub fn new(teams: impl IntoIterator<Item = TeamModel>) -> Self {
        Self {
            teams: teams
                .into_iter()
                .map(|team| (team.name.clone(), team))
                .collect(),
        }
    }

    pub fn insert(&mut self, team: TeamModel) {
        self.teams.insert(team.name.clone(), team);
    }
}

impl TeamDirectory for InMemoryTeamDirectory {
    fn team(&self, name: &str) -> Option<&TeamModel> {
        self.teams.get(name)
    }
}

/// Result ordering for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by display name, case-sensitive (the natural ordering)
    #[default]
    DisplayName,
    /// Reverse-chronological on last change, for activity listings
    MostRecentFirst,
}

/// Stateless, single-pass listing filter pipeline.
///
/// Holds the configured maximum recency window and the team lookup; every
/// invocation is independent and side-effect free.
pub struct ProjectFilterEngine<D> {
    directory: D,
    max_days_back: i64,
}

impl<D: TeamDirectory> ProjectFilterEngine<D> {
    /// Create an engine with an explicit clamp.
    ///
    /// `max_days_back` of 0 or below disables clamping.
    pub fn new(directory: D, max_days_back: i64) -> Self {
        Self {
            directory,
            max_days_back,
        }
    }

    pub fn from_config(directory: D, config: &ListingConfig) -> Self {
        Self::new(directory, config.activity_duration_maximum)
    }

    /// Filter and sort the available projects against the current clock,
    /// in the natural ordering.
    pub fn filter_projects(
        &self,
        available: &[ProjectModel],
        query: &FilterQuery,
    ) -> FilterResult<Vec<ProjectModel>> {
        self.filter_with(available, query, SortOrder::DisplayName, Utc::now())
    }

    /// Fully-parameterized filter pass.
    ///
    /// `now` anchors the recency window; day boundaries are evaluated on its
    /// UTC day with the time-of-day zeroed.
    pub fn filter_with(
        &self,
        available: &[ProjectModel],
        query: &FilterQuery,
        order: SortOrder,
        now: DateTime<Utc>,
    ) -> FilterResult<Vec<ProjectModel>> {
        let mut constrained = false;

        // Match set 1: names matching the pattern anywhere (not full-match)
        let mut name_matches: HashSet<&str> = HashSet::new();
        if let Some(pattern) = query.name_pattern.as_deref() {
            constrained = true;
            let regex = Regex::new(pattern)
                .map_err(|e| FilterError::invalid_pattern(pattern, e.to_string()))?;
            for project in available {
                if regex.is_match(&project.name) {
                    name_matches.insert(project.name.as_str());
                }
            }
            trace!(pattern, matched = name_matches.len(), "Name constraint");
        }

        // Match set 2: projects with a member repository granted to a
        // resolved team. Unknown team names contribute nothing: a stale
        // filter link degrades to a wider listing instead of an error.
        let mut team_matches: HashSet<&str> = HashSet::new();
        if query.teams.is_some() {
            constrained = true;
            let mut resolved: Vec<&TeamModel> = Vec::new();
            for name in query.team_names() {
                match self.directory.team(name) {
                    Some(team) => resolved.push(team),
                    None => debug!(team = name, "Skipping unknown team in listing filter"),
                }
            }
            for project in available {
                let granted = project.repositories.iter().any(|repository| {
                    resolved
                        .iter()
                        .any(|team| team.has_repository_permission(repository))
                });
                if granted {
                    team_matches.insert(project.name.as_str());
                }
            }
            trace!(matched = team_matches.len(), "Team constraint");
        }

        // Union of the match sets; an unconstrained query keeps everything.
        // The seen-set collapses duplicate names.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates: Vec<&ProjectModel> = Vec::new();
        for project in available {
            let name = project.name.as_str();
            let included =
                !constrained || name_matches.contains(name) || team_matches.contains(name);
            if included && seen.insert(name) {
                candidates.push(project);
            }
        }

        // Recency intersects: strictly after the start-of-day threshold
        if query.days_back > 0 {
            let days_back = self.clamp_days_back(query.days_back);
            let threshold = recency_threshold(now, days_back);
            debug!(days_back, %threshold, "Applying recency window");
            candidates.retain(|project| project.last_change > threshold);
        }

        match order {
            SortOrder::DisplayName => {
                candidates.sort_by(|a, b| a.display_name().cmp(b.display_name()));
            }
            SortOrder::MostRecentFirst => {
                candidates.sort_by(|a, b| b.last_change.cmp(&a.last_change));
            }
        }

        Ok(candidates.into_iter().cloned().collect())
    }

    /// Clamp a requested window to the configured maximum. A window equal
    /// to the maximum is retained, not reduced.
    fn clamp_days_back(&self, days_back: i64) -> i64 {
        if self.max_days_back > 0 && days_back > self.max_days_back {
            self.max_days_back
        } else {
            days_back
        }
    }
}

/// Start of `now`'s day minus the window.
///
/// Total: an out-of-range window saturates to the earliest representable
/// instant, which retains everything.
pub fn recency_threshold(now: DateTime<Utc>, days_back: i64) -> DateTime<Utc> {
    let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    TimeDelta::try_days(days_back)
        .and_then(|window| day_start.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
