//! Membership policies.
//!
//! Get, accept, and reject act on the membership record itself, so invited
//! and revoked states are reachable here even though such grants confer no
//! role-based access anywhere else.

use super::{has_role, is_admin, principal_account, Resource, MANAGE_ROLES};
use crate::models::{MembershipState, Session};

/// Member-state grants are public record. Invitations are visible to the
/// invited account and to the namespace's owners and maintainers; revoked
/// grants are hidden even from the account they named.
pub(crate) fn can_get_membership(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::Membership(membership) = resource else {
        return false;
    };
    if membership.state == MembershipState::Member {
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
    match membership.state {
        MembershipState::Invited => {
            account.account_id == membership.account_id
                || has_role(
                    principal,
                    &MANAGE_ROLES,
                    &membership.membership_account_id,
                    membership.repository_id.as_deref(),
                )
        }
        MembershipState::Revoked => has_role(
            principal,
            &MANAGE_ROLES,
            &membership.membership_account_id,
            membership.repository_id.as_deref(),
        ),
        MembershipState::Member => true,
    }
}

/// Only the account named in the invitation answers it; organization owners
/// cannot accept or decline on its behalf.
pub(crate) fn can_respond_to_membership(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Membership(membership) = resource else {
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
    account.account_id == membership.account_id
}

/// Inviting, revoking, and role changes take owner or maintainer standing
/// on the organization or repository the grant is scoped to.
pub(crate) fn can_manage_membership(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::Membership(membership) = resource else {
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
    has_role(
        principal,
        &MANAGE_ROLES,
        &membership.membership_account_id,
        membership.repository_id.as_deref(),
    )
}
