//! Resource- and action-scoped authorization.
//!
//! [`is_authorized`] answers whether a principal may perform an action
//! against a resolved resource. It is a pure function over caller-supplied
//! snapshots: no I/O, no mutation, deterministic, and total over the action
//! catalog. The only inputs are the session (with its pre-resolved
//! membership list), the resource, and the action; a missing resource is a
//! denial, not an error.
//!
//! Policy functions follow a common precedence: deny on a disabled
//! resource where the resource kind is disable-sensitive, deny on a
//! disabled principal account, grant to admins, then apply the
//! resource-specific rule, and finally deny. The documented exceptions to
//! that ordering live with the individual policies.

mod account;
mod api_key;
mod data_connection;
mod membership;
mod repository;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{
    Account, AccountFlag, ApiKey, DataConnection, Membership, MembershipRole, Repository, Session,
};

/// Operations the platform can request an authorization decision for.
///
/// Closed catalog: the dispatch in [`is_authorized`] matches every variant
/// with no wildcard arm, so adding an action without a policy fails to
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // Accounts
    CreateAccount,
    GetAccount,
    ListAccount,
    DisableAccount,
    GetAccountProfile,
    PutAccountProfile,
    GetAccountFlags,
    PutAccountFlags,
    ListAccountMemberships,
    // Repositories
    CreateRepository,
    GetRepository,
    ListRepository,
    PutRepository,
    DisableRepository,
    ReadRepositoryData,
    WriteRepositoryData,
    ListRepositoryApiKeys,
    ListRepositoryMemberships,
    // API keys
    CreateApiKey,
    GetApiKey,
    RevokeApiKey,
    // Memberships
    GetMembership,
    AcceptMembership,
    RejectMembership,
    InviteMembership,
    RevokeMembership,
    UpdateMembershipRole,
    // Data connections
    GetDataConnection,
    CreateDataConnection,
    PutDataConnection,
    DisableDataConnection,
    UseDataConnection,
    GetDataConnectionCredentials,
}

impl Action {
    /// Every action in the catalog, for exhaustive sweeps.
    pub const ALL: [Action; 33] = [
        Action::CreateAccount,
        Action::GetAccount,
        Action::ListAccount,
        Action::DisableAccount,
        Action::GetAccountProfile,
        Action::PutAccountProfile,
        Action::GetAccountFlags,
        Action::PutAccountFlags,
        Action::ListAccountMemberships,
        Action::CreateRepository,
        Action::GetRepository,
        Action::ListRepository,
        Action::PutRepository,
        Action::DisableRepository,
        Action::ReadRepositoryData,
        Action::WriteRepositoryData,
        Action::ListRepositoryApiKeys,
        Action::ListRepositoryMemberships,
        Action::CreateApiKey,
        Action::GetApiKey,
        Action::RevokeApiKey,
        Action::GetMembership,
        Action::AcceptMembership,
        Action::RejectMembership,
        Action::InviteMembership,
        Action::RevokeMembership,
        Action::UpdateMembershipRole,
        Action::GetDataConnection,
        Action::CreateDataConnection,
        Action::PutDataConnection,
        Action::DisableDataConnection,
        Action::UseDataConnection,
        Action::GetDataConnectionCredentials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateAccount => "CreateAccount",
            Action::GetAccount => "GetAccount",
            Action::ListAccount => "ListAccount",
            Action::DisableAccount => "DisableAccount",
            Action::GetAccountProfile => "GetAccountProfile",
            Action::PutAccountProfile => "PutAccountProfile",
            Action::GetAccountFlags => "GetAccountFlags",
            Action::PutAccountFlags => "PutAccountFlags",
            Action::ListAccountMemberships => "ListAccountMemberships",
            Action::CreateRepository => "CreateRepository",
            Action::GetRepository => "GetRepository",
            Action::ListRepository => "ListRepository",
            Action::PutRepository => "PutRepository",
            Action::DisableRepository => "DisableRepository",
            Action::ReadRepositoryData => "ReadRepositoryData",
            Action::WriteRepositoryData => "WriteRepositoryData",
            Action::ListRepositoryApiKeys => "ListRepositoryApiKeys",
            Action::ListRepositoryMemberships => "ListRepositoryMemberships",
            Action::CreateApiKey => "CreateApiKey",
            Action::GetApiKey => "GetApiKey",
            Action::RevokeApiKey => "RevokeApiKey",
            Action::GetMembership => "GetMembership",
            Action::AcceptMembership => "AcceptMembership",
            Action::RejectMembership => "RejectMembership",
            Action::InviteMembership => "InviteMembership",
            Action::RevokeMembership => "RevokeMembership",
            Action::UpdateMembershipRole => "UpdateMembershipRole",
            Action::GetDataConnection => "GetDataConnection",
            Action::CreateDataConnection => "CreateDataConnection",
            Action::PutDataConnection => "PutDataConnection",
            Action::DisableDataConnection => "DisableDataConnection",
            Action::UseDataConnection => "UseDataConnection",
            Action::GetDataConnectionCredentials => "GetDataConnectionCredentials",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of an authorization check.
///
/// `Any` is the `"*"` sentinel accepted by `CreateAccount` and
/// `CreateRepository`: "may this principal create any instance at all",
/// asked before a concrete resource exists. Every other action requires its
/// matching concrete variant; a mismatched resource kind denies.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Any,
    Account(&'a Account),
    Repository(&'a Repository),
    Membership(&'a Membership),
    ApiKey(&'a ApiKey),
    DataConnection(&'a DataConnection),
}

/// Decide whether `principal` may perform `action` against `resource`.
///
/// `None` principal is an anonymous caller. `None` resource denies
/// unconditionally, so callers that failed to resolve a target fall
/// through to a deny instead of an error path.
pub fn is_authorized(
    principal: Option<&Session>,
    resource: Option<Resource<'_>>,
    action: Action,
) -> bool {
    let Some(resource) = resource else {
        tracing::debug!(action = %action, "authorization denied: no resource");
        return false;
    };
    let authorized = match action {
        Action::CreateAccount => account::can_create_account(principal, resource),
        Action::GetAccount | Action::ListAccount => account::can_get_account(principal, resource),
        Action::DisableAccount => account::can_disable_account(principal, resource),
        Action::GetAccountProfile => account::can_get_account_profile(principal, resource),
        Action::PutAccountProfile | Action::GetAccountFlags => {
            account::can_manage_account_profile(principal, resource)
        }
        Action::PutAccountFlags => account::can_put_account_flags(principal, resource),
        Action::ListAccountMemberships => {
            account::can_list_account_memberships(principal, resource)
        }
        Action::CreateRepository => repository::can_create_repository(principal, resource),
        Action::GetRepository => repository::can_get_repository(principal, resource),
        Action::ListRepository => repository::can_list_repository(principal, resource),
        Action::ReadRepositoryData => repository::can_read_repository_data(principal, resource),
        Action::WriteRepositoryData => repository::can_write_repository_data(principal, resource),
        Action::PutRepository
        | Action::DisableRepository
        | Action::ListRepositoryApiKeys
        | Action::ListRepositoryMemberships => {
            repository::can_administer_repository(principal, resource)
        }
        Action::CreateApiKey => api_key::can_create_api_key(principal, resource),
        Action::GetApiKey | Action::RevokeApiKey => {
            api_key::can_access_api_key(principal, resource)
        }
        Action::GetMembership => membership::can_get_membership(principal, resource),
        Action::AcceptMembership | Action::RejectMembership => {
            membership::can_respond_to_membership(principal, resource)
        }
        Action::InviteMembership
        | Action::RevokeMembership
        | Action::UpdateMembershipRole => membership::can_manage_membership(principal, resource),
        Action::GetDataConnection => {
            data_connection::can_get_data_connection(principal, resource)
        }
        Action::UseDataConnection => {
            data_connection::can_use_data_connection(principal, resource)
        }
        Action::CreateDataConnection
        | Action::PutDataConnection
        | Action::DisableDataConnection
        | Action::GetDataConnectionCredentials => {
            data_connection::can_administer_data_connection(principal, resource)
        }
    };
    if authorized {
        tracing::trace!(action = %action, "authorization granted");
    } else {
        tracing::debug!(action = %action, "authorization denied");
    }
    authorized
}

/// Roles that carry management standing on a namespace.
pub(crate) const MANAGE_ROLES: [MembershipRole; 2] =
    [MembershipRole::Owners, MembershipRole::Maintainers];

/// The principal's resolved account, if any.
pub(crate) fn principal_account(principal: Option<&Session>) -> Option<&Account> {
    principal.and_then(|session| session.account.as_ref())
}

/// Whether the principal's account carries the admin flag.
///
/// Callers apply this only after the checks that disqualify admins too: a
/// disabled principal account always denies, and the write-data rule on
/// disabled repositories denies before admin is consulted.
pub(crate) fn is_admin(principal: Option<&Session>) -> bool {
    principal_account(principal).is_some_and(|account| account.has_flag(AccountFlag::Admin))
}

/// Whether the principal holds one of `roles` on the namespace owned by
/// `account_id`, optionally scoped to `repository_id`.
///
/// A principal always passes for its own namespace, regardless of `roles`.
/// Otherwise the principal's member-state memberships are scanned for a
/// matching grant: organization-wide grants cover every repository under
/// the namespace, repository-scoped grants cover exactly their own
/// repository. Invited and revoked grants never match.
pub(crate) fn has_role(
    principal: Option<&Session>,
    roles: &[MembershipRole],
    account_id: &str,
    repository_id: Option<&str>,
) -> bool {
    let Some(session) = principal else {
        return false;
    };
    let Some(account) = session.account.as_ref() else {
        return false;
    };
    if account.account_id == account_id {
        return true;
    }
    session.memberships.iter().any(|membership| {
        membership.is_active_member()
            && membership.membership_account_id == account_id
            && roles.contains(&membership.role)
            && match (membership.repository_id.as_deref(), repository_id) {
                (None, _) => true,
                (Some(scoped), Some(target)) => scoped == target,
                (Some(_), None) => false,
            }
    })
}
