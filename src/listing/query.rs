//! Listing filter queries
//!
//! The optional constraints a listing request carries. Each constraint is
//! independently optional; a default query means "no constraints" and leaves
//! the available set untouched.

use serde::{Deserialize, Serialize};

/// Constraints narrowing a project listing.
///
/// `days_back` of 0 (or below) disables the recency filter entirely; it
/// never means "today only".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Regex matched anywhere within a project name
    pub name_pattern: Option<String>,

    /// Comma-separated team names, as carried by the request parameter
    pub teams: Option<String>,

    /// Recency window in days
    pub days_back: i64,
}

impl FilterQuery {
    /// A query with no constraints
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn with_teams(mut self, teams: impl Into<String>) -> Self {
        self.teams = Some(teams.into());
        self
    }

    pub fn with_days_back(mut self, days_back: i64) -> Self {
        self.days_back = days_back;
        self
    }

    /// Parsed team names: split on commas, trimmed, empties dropped
    pub fn team_names(&self) -> Vec<&str> {
        self.teams
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_constraints() {
        let query = FilterQuery::none();
        assert!(query.name_pattern.is_none());
        assert!(query.teams.is_none());
        assert_eq!(query.days_back, 0);
        assert!(query.team_names().is_empty());
    }

    #[test]
    fn test_team_names_split_and_trim() {
        let query = FilterQuery::none().with_teams("core, reviewers ,,ops");
        assert_eq!(query.team_names(), vec!["core", "reviewers", "ops"]);
    }

    #[test]
    fn test_builder_chaining() {
        let query = FilterQuery::none()
            .with_name_pattern("^platform")
            .with_teams("core")
            .with_days_back(7);
        assert_eq!(query.name_pattern.as_deref(), Some("^platform"));
        assert_eq!(query.days_back, 7);
    }

    #[test]
    fn test_deserialize_partial_query() {
        let query: FilterQuery = serde_json::from_str(r#"{"days_back": 14}"#).unwrap();
        assert_eq!(query.days_back, 14);
        assert!(query.name_pattern.is_none());
    }
}
