//! API key policies.
//!
//! Keys are managed by the owning account and its namespace's owners and
//! maintainers, mirroring repository management.

use super::{has_role, is_admin, principal_account, Resource, MANAGE_ROLES};
use crate::models::Session;

/// Reading or revoking a key. A disabled key is inert: nobody touches it,
/// admins included, so the disabled check precedes the admin bypass.
pub(crate) fn can_access_api_key(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::ApiKey(api_key) = resource else {
        return false;
    };
    if api_key.disabled {
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
        &MANAGE_ROLES,
        &api_key.account_id,
        api_key.repository_id.as_deref(),
    )
}

/// Minting a key for an account or repository. The resource is the
/// prospective key, so its disabled flag is not consulted.
pub(crate) fn can_create_api_key(principal: Option<&Session>, resource: Resource<'_>) -> bool {
    let Resource::ApiKey(api_key) = resource else {
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
        &api_key.account_id,
        api_key.repository_id.as_deref(),
    )
}
