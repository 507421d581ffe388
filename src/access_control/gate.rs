//! Access restriction gates
//!
//! A gate sits in front of a class of requests (feeds, transports, raw
//! downloads) and decides whether the request may proceed. Each gate knows
//! how to pull the repository name out of its URL shape and which action the
//! request represents; the actual challenge/403 handling belongs to the
//! calling filter chain.

use crate::access_control::types::{AccessRestriction, RepositoryAction};
use crate::model::{RepositoryModel, UserModel};
use tracing::debug;

/// Outcome of gating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Request may proceed
    Allowed,
    /// Repository is restricted and no authenticated user is present
    AuthenticationRequired,
    /// Authenticated user lacks the required grant
    Denied(String),
}

impl GateOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateOutcome::Allowed)
    }
}

/// Decision surface of an access restriction gate.
///
/// Implementations classify the request and answer the two pure questions
/// the filter chain needs: does this repository demand authentication, and
/// may this user perform the action. None of these operations fail; a
/// missing grant is simply `false`.
pub trait RestrictionGate {
    /// Extract the repository name from the request path
    fn extract_repository_name<'a>(&self, url: &'a str) -> &'a str;

    /// Classify the action this request performs
    fn url_request_action(&self, url: &str) -> RepositoryAction;

    /// Whether the repository's restriction level demands an authenticated user
    fn requires_authentication(&self, repository: &RepositoryModel) -> bool;

    /// Whether the user may perform the action on the repository
    fn can_access(
        &self,
        repository: &RepositoryModel,
        user: &UserModel,
        action: RepositoryAction,
    ) -> bool;

    /// Gate one request end to end.
    ///
    /// Unrestricted repositories pass through untouched. Restricted ones
    /// demand a non-anonymous user with a sufficient grant.
    fn evaluate(
        &self,
        repository: &RepositoryModel,
        user: Option<&UserModel>,
        url: &str,
    ) -> GateOutcome {
        let action = self.url_request_action(url);
        if !self.requires_authentication(repository) {
            return GateOutcome::Allowed;
        }
        match user {
            Some(user) if !user.is_anonymous() => {
                if self.can_access(repository, user, action) {
                    GateOutcome::Allowed
                } else {
                    GateOutcome::Denied(format!(
                        "user '{}' may not {} repository '{}'",
                        user.username, action, repository.name
                    ))
                }
            }
            _ => GateOutcome::AuthenticationRequired,
        }
    }
}

/// Gate for feed/syndication requests.
///
/// Feeds are read-only, so every request classifies as `View`; the
/// repository name is the request path up to the query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedGate;

impl RestrictionGate for FeedGate {
    fn extract_repository_name<'a>(&self, url: &'a str) -> &'a str {
        match url.find('?') {
            Some(idx) => &url[..idx],
            None => url,
        }
    }

    fn url_request_action(&self, _url: &str) -> RepositoryAction {
        RepositoryAction::View
    }

    fn requires_authentication(&self, repository: &RepositoryModel) -> bool {
        repository.access_restriction.at_least(AccessRestriction::View)
    }

    fn can_access(
        &self,
        repository: &RepositoryModel,
        user: &UserModel,
        action: RepositoryAction,
    ) -> bool {
        let permitted = user.can_access_repository(repository, action);
        debug!(
            repository = %repository.name,
            user = %user.username,
            action = %action,
            permitted,
            "Feed access check"
        );
        permitted
    }
}
