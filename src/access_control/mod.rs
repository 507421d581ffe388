//! Access control module
//!
//! Decides, for a repository and an action, whether authentication is
//! required and whether a given user may proceed.
//!
//! ## Restriction model
//!
//! Every repository carries an access restriction level, ordered by
//! increasing strictness:
//!
//! ```text
//! none < push < clone < view
//! ```
//!
//! A repository restricted at or above `view` demands an authenticated user
//! for *any* read, including feeds. Users accumulate grants directly and
//! through their teams; a grant satisfies an action when it meets or exceeds
//! what the action requires, except that an explicit `exclude` grant bans
//! the user outright.
//!
//! Gates ([`RestrictionGate`]) wrap these decisions for one class of request
//! URL. [`FeedGate`] is the syndication variant: every request is a `view`
//! and the repository name is the path up to the query string. Decision
//! functions never fail; issuing the authentication challenge or the
//! 403-equivalent response is the calling filter chain's job.

pub mod gate;
pub mod types;

pub use gate::{FeedGate, GateOutcome, RestrictionGate};
pub use types::{AccessPermission, AccessRestriction, RepositoryAction};
