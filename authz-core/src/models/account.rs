//! Account model - individual, organization, and service accounts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Account type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Individual,
    Organization,
    Service,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Individual => "individual",
            AccountType::Organization => "organization",
            AccountType::Service => "service",
        }
    }
}

impl FromStr for AccountType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(AccountType::Individual),
            "organization" => Ok(AccountType::Organization),
            "service" => Ok(AccountType::Service),
            other => Err(ModelError::UnknownAccountType(other.to_string())),
        }
    }
}

/// Capability flags grantable to an account.
///
/// Flags are granted by platform operators; there is no self-service path
/// to any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFlag {
    /// Platform operator. Bypasses most, but not all, policy checks.
    Admin,
    CreateRepositories,
    CreateOrganizations,
}

impl AccountFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountFlag::Admin => "admin",
            AccountFlag::CreateRepositories => "create_repositories",
            AccountFlag::CreateOrganizations => "create_organizations",
        }
    }
}

impl FromStr for AccountFlag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AccountFlag::Admin),
            "create_repositories" => Ok(AccountFlag::CreateRepositories),
            "create_organizations" => Ok(AccountFlag::CreateOrganizations),
            other => Err(ModelError::UnknownAccountFlag(other.to_string())),
        }
    }
}

/// Account entity.
///
/// `account_id` is the account's namespace handle; repositories and
/// memberships reference it. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub account_type: AccountType,
    pub disabled: bool,
    #[serde(default)]
    pub flags: Vec<AccountFlag>,
}

impl Account {
    /// Create a new enabled account with no flags.
    pub fn new(account_id: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            account_id: account_id.into(),
            account_type,
            disabled: false,
            flags: Vec::new(),
        }
    }

    pub fn has_flag(&self, flag: AccountFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_organization(&self) -> bool {
        self.account_type == AccountType::Organization
    }
}
