//! Read-model module
//!
//! Repository, project, user, and team projections plus the per-request
//! project aggregation. Supplied by the persistence and authentication
//! layers; read-only here.

pub mod aggregate;
pub mod types;

pub use aggregate::{ROOT_PROJECT_TITLE, aggregate_projects, find_project};
pub use types::{ANONYMOUS_USERNAME, ProjectModel, RepositoryModel, TeamModel, UserModel};
