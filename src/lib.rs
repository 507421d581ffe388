//! Project listing and access restriction core for self-hosted Git services
//!
//! gitshelf computes what a repository browser shows and who is allowed to
//! see it: the filtered, sorted project listing for a request, and the
//! access decision for restricted repositories and their feeds. Rendering,
//! sessions, and the Git plumbing itself live elsewhere; this crate is the
//! pure decision layer between them.
//!
//! ## Features
//!
//! - **Access restriction gates** - ordered restriction levels
//!   (`none < push < clone < view`) with per-repository user/team grants
//! - **Listing filters** - regex name matching, team membership, and
//!   recency windows, composed as union-then-intersect
//! - **Per-request aggregation** - projects rebuilt from the repository
//!   read-model on every listing, no stale caches
//! - **Layered configuration** via TOML files and environment variables
//!
//! ## Filter composition
//!
//! ```text
//! available ──▶ name match ──┐
//!                            ├─ union ──▶ recency window ──▶ sort
//! available ──▶ team match ──┘           (intersects)
//! ```
//!
//! A project need only satisfy one of the name/team constraints; the
//! recency window narrows the survivors. Unknown team names are skipped
//! silently - stale filter links widen the listing rather than failing.
//!
//! ## Example
//!
//! ```
//! use gitshelf::listing::{FilterQuery, InMemoryTeamDirectory, ProjectFilterEngine};
//! use gitshelf::model::aggregate_projects;
//!
//! let projects = aggregate_projects(&[]);
//! let engine = ProjectFilterEngine::new(InMemoryTeamDirectory::default(), 30);
//! let query = FilterQuery::none().with_days_back(7);
//! let visible = engine.filter_projects(&projects, &query).unwrap();
//! assert!(visible.is_empty());
//! ```

pub mod access_control;
pub mod config;
pub mod error;
pub mod listing;
pub mod model;

// Re-export main types
pub use access_control::{AccessPermission, AccessRestriction, FeedGate, RestrictionGate};
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use listing::{FilterQuery, ProjectFilterEngine};
