//! Session model - the resolved principal an authorization check runs
//! against.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::membership::Membership;

/// A resolved principal.
///
/// An anonymous caller has no session at all (`None` at the call site). A
/// session with an `identity_id` but no `account` is an authenticated
/// caller that has not finished account creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    /// External identity reference from the identity provider.
    pub identity_id: Option<String>,
    pub account: Option<Account>,
    /// Memberships resolved for this principal by the session layer. The
    /// engine treats the list as read-only and does not re-filter it.
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl Session {
    /// Session for an authenticated identity that has no account yet.
    pub fn for_identity(identity_id: impl Into<String>) -> Self {
        Self {
            identity_id: Some(identity_id.into()),
            account: None,
            memberships: Vec::new(),
        }
    }

    /// Session for an account with no memberships.
    pub fn for_account(account: Account) -> Self {
        Self {
            identity_id: None,
            account: Some(account),
            memberships: Vec::new(),
        }
    }

    /// Attach resolved memberships.
    pub fn with_memberships(mut self, memberships: Vec<Membership>) -> Self {
        self.memberships = memberships;
        self
    }
}
