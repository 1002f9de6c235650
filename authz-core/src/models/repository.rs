//! Repository model - published datasets owned by an account.
//!
//! Two independent exposure axes: `visibility` governs whether a repository
//! shows up in listings, `data_mode` governs whether its data is
//! world-readable.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Listing exposure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryVisibility {
    Public,
    Unlisted,
    Restricted,
}

impl RepositoryVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryVisibility::Public => "public",
            RepositoryVisibility::Unlisted => "unlisted",
            RepositoryVisibility::Restricted => "restricted",
        }
    }
}

impl FromStr for RepositoryVisibility {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(RepositoryVisibility::Public),
            "unlisted" => Ok(RepositoryVisibility::Unlisted),
            "restricted" => Ok(RepositoryVisibility::Restricted),
            other => Err(ModelError::UnknownVisibility(other.to_string())),
        }
    }
}

/// Data-access exposure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Open,
    Subscription,
    Private,
}

impl DataMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Open => "open",
            DataMode::Subscription => "subscription",
            DataMode::Private => "private",
        }
    }
}

impl FromStr for DataMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(DataMode::Open),
            "subscription" => Ok(DataMode::Subscription),
            "private" => Ok(DataMode::Private),
            other => Err(ModelError::UnknownDataMode(other.to_string())),
        }
    }
}

/// Repository entity.
///
/// Owned by exactly one account; `repository_id` is unique within that
/// account's namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub account_id: String,
    pub repository_id: String,
    pub disabled: bool,
    pub visibility: RepositoryVisibility,
    /// Absent on rows written before data modes existed.
    pub data_mode: Option<DataMode>,
}

impl Repository {
    /// Create a new enabled repository with no data mode set.
    pub fn new(
        account_id: impl Into<String>,
        repository_id: impl Into<String>,
        visibility: RepositoryVisibility,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            repository_id: repository_id.into(),
            disabled: false,
            visibility,
            data_mode: None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == RepositoryVisibility::Public
    }

    /// Whether the repository's data is world-readable.
    ///
    /// An unset data mode counts as open.
    // TODO: require an explicit data mode here once all persisted rows have
    // been backfilled with one.
    pub fn data_is_open(&self) -> bool {
        matches!(self.data_mode, None | Some(DataMode::Open))
    }
}
