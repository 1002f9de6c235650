//! Account policies.
//!
//! Accounts are not disable-vetoed as resources: only the profile read
//! consults the target account's disabled flag. The principal's own
//! disabled flag denies everywhere, admins included.

use super::{has_role, is_admin, principal_account, Resource, MANAGE_ROLES};
use crate::models::{AccountFlag, AccountType, MembershipRole, Session};

/// Individual accounts can only be created by an authenticated identity
/// that has no account yet (signup completion). Organization accounts
/// require the create-organizations flag; service accounts are provisioned
/// by admins. The `Any` sentinel answers the flag question without a
/// concrete target.
pub(crate) fn can_create_account(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    match resource {
        Resource::Any => {
            let Some(session) = principal else {
                return false;
            };
            match session.account.as_ref() {
                None => session.identity_id.is_some(),
                Some(account) => {
                    !account.disabled
                        && (is_admin(principal)
                            || account.has_flag(AccountFlag::CreateOrganizations))
                }
            }
        }
        Resource::Account(target) => match target.account_type {
            AccountType::Individual => {
                let Some(session) = principal else {
                    return false;
                };
                session.account.is_none() && session.identity_id.is_some()
            }
            AccountType::Organization => {
                let Some(account) = principal_account(principal) else {
                    return false;
                };
                if account.disabled {
                    return false;
                }
                is_admin(principal) || account.has_flag(AccountFlag::CreateOrganizations)
            }
            AccountType::Service => {
                let Some(account) = principal_account(principal) else {
                    return false;
                };
                !account.disabled && is_admin(principal)
            }
        },
        _ => false,
    }
}

/// Organization accounts are visible to their owners and maintainers;
/// individual and service accounts only to themselves. Admin always passes.
pub(crate) fn can_get_account(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::Account(target) = resource else {
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
    match target.account_type {
        AccountType::Organization => has_role(principal, &MANAGE_ROLES, &target.account_id, None),
        AccountType::Individual | AccountType::Service => {
            account.account_id == target.account_id
        }
    }
}

/// Profiles are public: anyone may read one, anonymous callers included, as
/// long as neither side is disabled.
pub(crate) fn can_get_account_profile(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Account(target) = resource else {
        return false;
    };
    if let Some(account) = principal_account(principal) {
        if account.disabled {
            return false;
        }
        if is_admin(principal) {
            return true;
        }
    }
    !target.disabled
}

/// Self-service surface: the account itself, or the organization's owners
/// and maintainers. Covers profile updates and flag reads.
pub(crate) fn can_manage_account_profile(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Account(target) = resource else {
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
    has_role(principal, &MANAGE_ROLES, &target.account_id, None)
}

/// Flags are granted and removed by operators only.
pub(crate) fn can_put_account_flags(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Account(_) = resource else {
        return false;
    };
    let Some(account) = principal_account(principal) else {
        return false;
    };
    !account.disabled && is_admin(principal)
}

/// Organizations can be disabled by their owners; individual and service
/// accounts cannot disable themselves, only an admin can.
pub(crate) fn can_disable_account(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::Account(target) = resource else {
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
    match target.account_type {
        AccountType::Organization => {
            has_role(principal, &[MembershipRole::Owners], &target.account_id, None)
        }
        AccountType::Individual | AccountType::Service => false,
    }
}

/// Membership listings are not account-gated: anonymous callers may read
/// them and the target account's disabled flag is ignored. A disabled
/// principal is still turned away.
pub(crate) fn can_list_account_memberships(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Account(_) = resource else {
        return false;
    };
    if let Some(account) = principal_account(principal) {
        if account.disabled {
            return false;
        }
    }
    true
}
