//! Repository policies.
//!
//! Listing exposure is governed by `visibility`, data access by
//! `data_mode`; the two gates are independent. A repository can be public
//! but subscription-mode: anyone may list it, nobody reads its data without
//! standing.

use super::{has_role, is_admin, principal_account, Resource, MANAGE_ROLES};
use crate::models::{AccountFlag, MembershipRole, Session};

/// Roles that can see a repository and read its data.
const READ_ROLES: [MembershipRole; 4] = [
    MembershipRole::Owners,
    MembershipRole::Maintainers,
    MembershipRole::ReadData,
    MembershipRole::WriteData,
];

/// Roles that can write repository data. Read-data grants are excluded.
const WRITE_ROLES: [MembershipRole; 3] = [
    MembershipRole::Owners,
    MembershipRole::Maintainers,
    MembershipRole::WriteData,
];

/// Open-data repositories are visible to anyone, including anonymous
/// callers; otherwise namespace standing is required. Admins see disabled
/// repositories, nobody else does.
pub(crate) fn can_get_repository(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::Repository(repository) = resource else {
        return false;
    };
    if !repository.disabled && repository.data_is_open() {
        return true;
    }
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    if repository.disabled {
        return false;
    }
    has_role(
        principal,
        &READ_ROLES,
        &repository.account_id,
        Some(&repository.repository_id),
    )
}

/// Listing keys off `visibility`, not data mode: public repositories are
/// listable by anyone.
pub(crate) fn can_list_repository(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::Repository(repository) = resource else {
        return false;
    };
    if !repository.disabled && repository.is_public() {
        return true;
    }
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    if repository.disabled {
        return false;
    }
    has_role(
        principal,
        &READ_ROLES,
        &repository.account_id,
        Some(&repository.repository_id),
    )
}

/// Data reads key off `data_mode` alone; an unset mode counts as open.
pub(crate) fn can_read_repository_data(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Repository(repository) = resource else {
        return false;
    };
    if !repository.disabled && repository.data_is_open() {
        return true;
    }
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    if repository.disabled {
        return false;
    }
    has_role(
        principal,
        &READ_ROLES,
        &repository.account_id,
        Some(&repository.repository_id),
    )
}

/// Disabled repositories reject writes for everyone, admins included; the
/// disabled check deliberately precedes the admin bypass here.
pub(crate) fn can_write_repository_data(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Repository(repository) = resource else {
        return false;
    };
    if repository.disabled {
        return false;
    }
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    has_role(
        principal,
        &WRITE_ROLES,
        &repository.account_id,
        Some(&repository.repository_id),
    )
}

/// Management surface: updating, disabling, and enumerating a repository's
/// API keys and memberships. Data roles confer nothing here.
pub(crate) fn can_administer_repository(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Repository(repository) = resource else {
        return false;
    };
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    if repository.disabled {
        return false;
    }
    has_role(
        principal,
        &MANAGE_ROLES,
        &repository.account_id,
        Some(&repository.repository_id),
    )
}

/// Creating repositories requires the create-repositories flag (admins
/// exempt). The `Any` sentinel asks about the flag alone; a concrete target
/// additionally requires organization-wide standing on the owning account.
pub(crate) fn can_create_repository(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let repository = match resource {
        Resource::Any => None,
        Resource::Repository(repository) => Some(repository),
        _ => return false,
    };
    let Some(account) = principal_account(principal) else {
        return false;
    };
    if account.disabled {
        return false;
    }
    if is_admin(principal) {
        return true;
    }
    if !account.has_flag(AccountFlag::CreateRepositories) {
        return false;
    }
    match repository {
        None => true,
        Some(repository) => has_role(principal, &MANAGE_ROLES, &repository.account_id, None),
    }
}
