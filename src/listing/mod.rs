//! Listing module
//!
//! Filters and sorts the project set a listing view renders.
//!
//! ## Filter composition
//!
//! ```text
//! available ──▶ name match ──┐
//!                            ├─ union ──▶ recency window ──▶ sort
//! available ──▶ team match ──┘           (intersects)
//! ```
//!
//! Name and team constraints are independent: when both are supplied a
//! project need only satisfy one of them. The recency window then narrows
//! whatever survived. An unconstrained query passes the available set
//! through untouched.
//!
//! Note for operators: unknown team names in a filter are skipped silently
//! rather than rejected, so a stale link lists *more* than expected, not an
//! error page.

pub mod engine;
pub mod menu;
pub mod query;

pub use engine::{
    InMemoryTeamDirectory, ProjectFilterEngine, SortOrder, TeamDirectory, recency_threshold,
};
pub use menu::project_menu_entries;
pub use query::FilterQuery;
