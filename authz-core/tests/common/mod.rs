//! Shared fixtures for authorization integration tests.

#![allow(dead_code)]

use authz_core::{
    Account, AccountFlag, AccountType, ApiKey, DataConnection, DataMode, Membership,
    MembershipRole, MembershipState, Repository, RepositoryVisibility, Session,
};

pub const ORG: &str = "tidewater";
pub const REPO: &str = "shoreline-imagery";
pub const SIBLING_REPO: &str = "harbor-soundings";

// ============================================================================
// Sessions
// ============================================================================

pub fn admin_session() -> Session {
    let mut account = Account::new("root", AccountType::Individual);
    account.flags.push(AccountFlag::Admin);
    Session::for_account(account)
}

/// Admin flag plus org-owner standing, but a disabled account: the most
/// privileged principal that must still be denied almost everywhere.
pub fn disabled_admin_session() -> Session {
    let mut account = Account::new("root", AccountType::Individual);
    account.flags.push(AccountFlag::Admin);
    account.disabled = true;
    Session::for_account(account)
        .with_memberships(vec![membership("root", None, MembershipRole::Owners, MembershipState::Member)])
}

pub fn individual_session(account_id: &str) -> Session {
    Session::for_account(Account::new(account_id, AccountType::Individual))
}

/// Authenticated identity that has not created an account yet.
pub fn signup_session() -> Session {
    Session::for_identity("idp|7fd2c91a")
}

pub fn org_role_session(account_id: &str, role: MembershipRole) -> Session {
    Session::for_account(Account::new(account_id, AccountType::Individual))
        .with_memberships(vec![membership(account_id, None, role, MembershipState::Member)])
}

pub fn repo_role_session(account_id: &str, role: MembershipRole, repository_id: &str) -> Session {
    Session::for_account(Account::new(account_id, AccountType::Individual)).with_memberships(vec![
        membership(account_id, Some(repository_id), role, MembershipState::Member),
    ])
}

// ============================================================================
// Accounts and memberships
// ============================================================================

pub fn org_account() -> Account {
    Account::new(ORG, AccountType::Organization)
}

/// Membership on the tidewater namespace.
pub fn membership(
    account_id: &str,
    repository_id: Option<&str>,
    role: MembershipRole,
    state: MembershipState,
) -> Membership {
    let mut membership =
        Membership::new(account_id, ORG, repository_id.map(str::to_string), role);
    membership.state = state;
    membership
}

pub fn member_membership() -> Membership {
    membership("ada", None, MembershipRole::ReadData, MembershipState::Member)
}

pub fn invited_membership() -> Membership {
    membership("ada", None, MembershipRole::ReadData, MembershipState::Invited)
}

pub fn revoked_membership() -> Membership {
    membership("ada", None, MembershipRole::ReadData, MembershipState::Revoked)
}

// ============================================================================
// Repositories
// ============================================================================

pub fn public_open_repo() -> Repository {
    let mut repo = Repository::new(ORG, REPO, RepositoryVisibility::Public);
    repo.data_mode = Some(DataMode::Open);
    repo
}

pub fn private_repo() -> Repository {
    let mut repo = Repository::new(ORG, REPO, RepositoryVisibility::Restricted);
    repo.data_mode = Some(DataMode::Private);
    repo
}

pub fn public_subscription_repo() -> Repository {
    let mut repo = Repository::new(ORG, REPO, RepositoryVisibility::Public);
    repo.data_mode = Some(DataMode::Subscription);
    repo
}

pub fn disabled_repo() -> Repository {
    let mut repo = public_open_repo();
    repo.disabled = true;
    repo
}

// ============================================================================
// API keys and data connections
// ============================================================================

pub fn org_api_key() -> ApiKey {
    ApiKey::new("AK7Q2FJ3", ORG, None)
}

pub fn repo_api_key() -> ApiKey {
    ApiKey::new("AK7Q2FJ4", ORG, Some(REPO.to_string()))
}

pub fn disabled_api_key() -> ApiKey {
    let mut key = org_api_key();
    key.disabled = true;
    key
}

pub fn open_connection() -> DataConnection {
    DataConnection::new("us-coastal-mirror")
}

pub fn read_only_connection() -> DataConnection {
    let mut connection = open_connection();
    connection.read_only = true;
    connection
}
