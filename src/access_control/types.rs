//! Access control types
//!
//! Core types used by the access restriction system: how strictly a
//! repository gates anonymous access, what a request wants to do, and what
//! a user or team has been granted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository access restriction level, ordered by increasing strictness.
///
/// `None` repositories are fully anonymous; `View` repositories require an
/// authenticated, authorized user even to see them. The ordering is part of
/// the contract: a restriction "at least" `Clone` also restricts cloning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessRestriction {
    /// Anonymous view, clone, and push
    #[default]
    None,
    /// Anonymous view and clone; authenticated push
    Push,
    /// Anonymous view; authenticated clone and push
    Clone,
    /// Authenticated view, clone, and push
    View,
}

impl AccessRestriction {
    /// Ordinal comparison against another restriction level
    pub const fn at_least(&self, other: AccessRestriction) -> bool {
        *self as u8 >= other as u8
    }

    /// Get the restriction name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessRestriction::None => "none",
            AccessRestriction::Push => "push",
            AccessRestriction::Clone => "clone",
            AccessRestriction::View => "view",
        }
    }

    /// Try to parse a restriction from a string
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(AccessRestriction::None),
            "push" => Some(AccessRestriction::Push),
            "clone" => Some(AccessRestriction::Clone),
            "view" => Some(AccessRestriction::View),
            _ => None,
        }
    }

    /// Get all restriction levels, in increasing strictness
    pub fn all() -> &'static [AccessRestriction] {
        &[
            AccessRestriction::None,
            AccessRestriction::Push,
            AccessRestriction::Clone,
            AccessRestriction::View,
        ]
    }
}

impl fmt::Display for AccessRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a request wants to do with a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryAction {
    /// Read access: web pages, feeds, raw blobs
    View,
    /// Fetch access over a transport
    Clone,
    /// Ref update access
    Push,
}

impl RepositoryAction {
    /// The minimum grant that satisfies this action
    pub const fn required_permission(&self) -> AccessPermission {
        match self {
            RepositoryAction::View => AccessPermission::View,
            RepositoryAction::Clone => AccessPermission::Clone,
            RepositoryAction::Push => AccessPermission::Push,
        }
    }

    /// Get the action name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            RepositoryAction::View => "view",
            RepositoryAction::Clone => "clone",
            RepositoryAction::Push => "push",
        }
    }
}

impl fmt::Display for RepositoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A permission granted to a user or team for one repository.
///
/// The ladder is ordered so `at_least` is an ordinal comparison, with one
/// exception: `Exclude` is an explicit ban and never permits anything,
/// regardless of where it sits in the ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessPermission {
    /// No grant
    #[default]
    None,
    /// Explicitly banned from the repository
    Exclude,
    /// May view
    View,
    /// May view and clone
    Clone,
    /// May push
    Push,
    /// May push and create refs
    Create,
    /// May push, create, and delete refs
    Delete,
    /// May rewrite history
    Rewind,
}

impl AccessPermission {
    /// Ordinal comparison against another grant
    pub const fn at_least(&self, other: AccessPermission) -> bool {
        *self as u8 >= other as u8
    }

    /// Whether this grant satisfies the given action.
    ///
    /// `Exclude` fails every action.
    pub const fn permits(&self, action: RepositoryAction) -> bool {
        !matches!(self, AccessPermission::Exclude) && self.at_least(action.required_permission())
    }

    /// Short grant code, as shown in permission listings
    pub const fn code(&self) -> &'static str {
        match self {
            AccessPermission::None => "N",
            AccessPermission::Exclude => "X",
            AccessPermission::View => "V",
            AccessPermission::Clone => "R",
            AccessPermission::Push => "RW",
            AccessPermission::Create => "RWC",
            AccessPermission::Delete => "RWD",
            AccessPermission::Rewind => "RW+",
        }
    }

    /// Get the permission name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessPermission::None => "none",
            AccessPermission::Exclude => "exclude",
            AccessPermission::View => "view",
            AccessPermission::Clone => "clone",
            AccessPermission::Push => "push",
            AccessPermission::Create => "create",
            AccessPermission::Delete => "delete",
            AccessPermission::Rewind => "rewind",
        }
    }

    /// Get all permission levels
    pub fn all() -> &'static [AccessPermission] {
        &[
            AccessPermission::None,
            AccessPermission::Exclude,
            AccessPermission::View,
            AccessPermission::Clone,
            AccessPermission::Push,
            AccessPermission::Create,
            AccessPermission::Delete,
            AccessPermission::Rewind,
        ]
    }
}

impl fmt::Display for AccessPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
