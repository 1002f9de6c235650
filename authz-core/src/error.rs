use thiserror::Error;

/// Errors raised when decoding persisted model codes.
///
/// Parsing is strict: an unrecognized code is an error, never coerced to a
/// default. The authorization engine itself has no error path - its outcome
/// space is the boolean returned by `is_authorized`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown account type code: {0}")]
    UnknownAccountType(String),

    #[error("unknown account flag code: {0}")]
    UnknownAccountFlag(String),

    #[error("unknown repository visibility code: {0}")]
    UnknownVisibility(String),

    #[error("unknown data mode code: {0}")]
    UnknownDataMode(String),

    #[error("unknown membership role code: {0}")]
    UnknownMembershipRole(String),

    #[error("unknown membership state code: {0}")]
    UnknownMembershipState(String),
}
