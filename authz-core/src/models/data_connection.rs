//! Data connection model - storage endpoints repositories mirror to.

use serde::{Deserialize, Serialize};

use super::account::AccountFlag;

/// Data connection entity.
///
/// Platform-level resource: no account owns one. Mutation and credential
/// access are operator concerns; usage is gated only by the connection's
/// own attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConnection {
    pub data_connection_id: String,
    /// Read-only connections are never selectable as a write target.
    pub read_only: bool,
    /// Account flag required to use this connection, if any.
    pub required_flag: Option<AccountFlag>,
}

impl DataConnection {
    pub fn new(data_connection_id: impl Into<String>) -> Self {
        Self {
            data_connection_id: data_connection_id.into(),
            read_only: false,
            required_flag: None,
        }
    }
}
