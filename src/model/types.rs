//! Read-model types
//!
//! Transient projections of the repository, project, user, and team records
//! owned by the persistence and authentication layers. Everything here is
//! recomputed per request and read-only to this crate; nothing mutates
//! across requests.

use crate::access_control::types::{AccessPermission, AccessRestriction, RepositoryAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Username carried by the anonymous user
pub const ANONYMOUS_USERNAME: &str = "$anonymous";

/// A repository as seen by the listing and gating logic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryModel {
    pub name: String,
    #[serde(default)]
    pub access_restriction: AccessRestriction,
    pub last_change: DateTime<Utc>,
}

/// A named grouping of repositories, aggregated by namespace for listing
/// and navigation.
///
/// Invariant: the member list is non-empty at construction and
/// `last_change` equals the most recent change among the members. Both are
/// upheld by [`aggregate_projects`](crate::model::aggregate_projects), the
/// only construction path in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModel {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub repositories: Vec<String>,
    pub last_change: DateTime<Utc>,
}

impl ProjectModel {
    /// Display name: the title when set, the project name otherwise
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Whether this is a personal (`~user`) namespace rather than a shared one
    pub fn is_user_project(&self) -> bool {
        self.name.starts_with('~')
    }
}

/// A user together with the grants the authentication layer resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserModel {
    pub username: String,

    /// Direct grants, keyed by repository name
    #[serde(default)]
    pub permissions: HashMap<String, AccessPermission>,

    /// Team memberships contributing derived grants
    #[serde(default)]
    pub teams: Vec<TeamModel>,
}

impl UserModel {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            permissions: HashMap::new(),
            teams: Vec::new(),
        }
    }

    /// The anonymous user: no grants, no teams
    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS_USERNAME)
    }

    pub fn is_anonymous(&self) -> bool {
        self.username == ANONYMOUS_USERNAME
    }

    /// Add a direct grant for a repository
    pub fn grant(&mut self, repository: impl Into<String>, permission: AccessPermission) {
        self.permissions.insert(repository.into(), permission);
    }

    /// Effective permission for a repository.
    ///
    /// A direct `Exclude` wins outright; otherwise the strongest of the
    /// direct grant and all team-derived grants applies.
    pub fn permission_for(&self, repository: &str) -> AccessPermission {
        let direct = self
            .permissions
            .get(repository)
            .copied()
            .unwrap_or_default();
        if direct == AccessPermission::Exclude {
            return AccessPermission::Exclude;
        }
        self.teams
            .iter()
            .map(|team| team.permission_for(repository))
            .fold(direct, AccessPermission::max)
    }

    /// Whether this user may perform the action on the repository
    pub fn can_access_repository(
        &self,
        repository: &RepositoryModel,
        action: RepositoryAction,
    ) -> bool {
        self.permission_for(&repository.name).permits(action)
    }
}

/// A team and the grants shared by its members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamModel {
    pub name: String,

    /// Grants, keyed by repository name
    #[serde(default)]
    pub permissions: HashMap<String, AccessPermission>,
}

impl TeamModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: HashMap::new(),
        }
    }

    /// Add a grant for a repository
    pub fn grant(&mut self, repository: impl Into<String>, permission: AccessPermission) {
        self.permissions.insert(repository.into(), permission);
    }

    /// Grant held by this team for a repository
    pub fn permission_for(&self, repository: &str) -> AccessPermission {
        self.permissions
            .get(repository)
            .copied()
            .unwrap_or_default()
    }

    /// Whether this team holds a usable grant for the repository
    pub fn has_repository_permission(&self, repository: &str) -> bool {
        let permission = self.permission_for(repository);
        permission != AccessPermission::None && permission != AccessPermission::Exclude
    }
}
