//! Membership model - role grants linking accounts to organizations and
//! repositories.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

/// Membership role codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Owners,
    Maintainers,
    ReadData,
    WriteData,
}

impl MembershipRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRole::Owners => "owners",
            MembershipRole::Maintainers => "maintainers",
            MembershipRole::ReadData => "read_data",
            MembershipRole::WriteData => "write_data",
        }
    }
}

impl FromStr for MembershipRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owners" => Ok(MembershipRole::Owners),
            "maintainers" => Ok(MembershipRole::Maintainers),
            "read_data" => Ok(MembershipRole::ReadData),
            "write_data" => Ok(MembershipRole::WriteData),
            other => Err(ModelError::UnknownMembershipRole(other.to_string())),
        }
    }
}

/// Membership lifecycle state codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    Invited,
    Member,
    Revoked,
}

impl MembershipState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipState::Invited => "invited",
            MembershipState::Member => "member",
            MembershipState::Revoked => "revoked",
        }
    }
}

impl FromStr for MembershipState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invited" => Ok(MembershipState::Invited),
            "member" => Ok(MembershipState::Member),
            "revoked" => Ok(MembershipState::Revoked),
            other => Err(ModelError::UnknownMembershipState(other.to_string())),
        }
    }
}

/// Membership entity.
///
/// Grants `role` on the namespace owned by `membership_account_id` to
/// `account_id`. A grant with no `repository_id` is organization-wide and
/// covers every repository under the namespace; a repository-scoped grant
/// covers exactly that repository and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub membership_id: Uuid,
    /// Account the role is granted to.
    pub account_id: String,
    /// Organization or repository-owner account the grant is scoped to.
    pub membership_account_id: String,
    /// Repository scope. Absent means organization-wide.
    pub repository_id: Option<String>,
    pub role: MembershipRole,
    pub state: MembershipState,
    pub state_changed_utc: Option<DateTime<Utc>>,
}

impl Membership {
    /// Create a new invitation.
    pub fn new(
        account_id: impl Into<String>,
        membership_account_id: impl Into<String>,
        repository_id: Option<String>,
        role: MembershipRole,
    ) -> Self {
        Self {
            membership_id: Uuid::new_v4(),
            account_id: account_id.into(),
            membership_account_id: membership_account_id.into(),
            repository_id,
            role,
            state: MembershipState::Invited,
            state_changed_utc: None,
        }
    }

    /// Only member-state grants confer role-based access.
    pub fn is_active_member(&self) -> bool {
        self.state == MembershipState::Member
    }

    pub fn is_organization_wide(&self) -> bool {
        self.repository_id.is_none()
    }

    /// Accept the invitation.
    pub fn accept(&mut self) {
        self.transition(MembershipState::Member);
    }

    /// Decline the invitation.
    pub fn reject(&mut self) {
        self.transition(MembershipState::Revoked);
    }

    /// Terminate the grant.
    pub fn revoke(&mut self) {
        self.transition(MembershipState::Revoked);
    }

    fn transition(&mut self, state: MembershipState) {
        self.state = state;
        self.state_changed_utc = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_membership_starts_invited() {
        let membership =
            Membership::new("finn", "tidewater", None, MembershipRole::Maintainers);
        assert_eq!(membership.state, MembershipState::Invited);
        assert!(membership.state_changed_utc.is_none());
        assert!(!membership.is_active_member());
        assert!(membership.is_organization_wide());
    }

    #[test]
    fn accept_marks_member_and_stamps_transition() {
        let mut membership =
            Membership::new("finn", "tidewater", None, MembershipRole::ReadData);
        membership.accept();
        assert!(membership.is_active_member());
        assert!(membership.state_changed_utc.is_some());
    }

    #[test]
    fn reject_and_revoke_both_end_in_revoked() {
        let mut invited = Membership::new("finn", "tidewater", None, MembershipRole::Owners);
        invited.reject();
        assert_eq!(invited.state, MembershipState::Revoked);

        let mut member = Membership::new("finn", "tidewater", None, MembershipRole::Owners);
        member.accept();
        member.revoke();
        assert_eq!(member.state, MembershipState::Revoked);
        assert!(!member.is_active_member());
    }

    #[test]
    fn wire_codes_match_persisted_columns() {
        let membership = Membership::new("finn", "tidewater", None, MembershipRole::ReadData);
        let value = serde_json::to_value(&membership).unwrap();
        assert_eq!(value["role"], "read_data");
        assert_eq!(value["state"], "invited");
        assert_eq!(value["repository_id"], serde_json::Value::Null);
    }

    #[test]
    fn role_codes_round_trip() {
        for role in [
            MembershipRole::Owners,
            MembershipRole::Maintainers,
            MembershipRole::ReadData,
            MembershipRole::WriteData,
        ] {
            assert_eq!(role.as_str().parse::<MembershipRole>().unwrap(), role);
        }
    }
}
