//! API key model - programmatic credentials scoped to an account or a
//! single repository.

use serde::{Deserialize, Serialize};

/// API key entity.
///
/// Management rights mirror repository management: the owning account and
/// its organization's owners and maintainers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub access_key_id: String,
    /// Owning account.
    pub account_id: String,
    /// Repository scope. Absent means the key covers the whole account.
    pub repository_id: Option<String>,
    pub disabled: bool,
}

impl ApiKey {
    /// Create a new enabled key.
    pub fn new(
        access_key_id: impl Into<String>,
        account_id: impl Into<String>,
        repository_id: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            account_id: account_id.into(),
            repository_id,
            disabled: false,
        }
    }
}
