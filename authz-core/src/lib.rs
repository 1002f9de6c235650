//! Authorization engine for the data cooperative platform.
//!
//! Every permission check on the platform's accounts, repositories,
//! memberships, API keys, and data connections funnels through
//! [`is_authorized`]: a pure decision function over a resolved principal, a
//! resolved resource, and a closed action catalog. The engine performs no
//! I/O, never mutates its inputs, and always answers with a boolean - a
//! missing resource is a denial, not an error. Callers translate `false`
//! into a 401/403 response or a hidden UI affordance.

pub mod authorization;
pub mod error;
pub mod models;

pub use authorization::{is_authorized, Action, Resource};
pub use error::ModelError;
pub use models::{
    Account, AccountFlag, AccountType, ApiKey, DataConnection, DataMode, Membership,
    MembershipRole, MembershipState, Repository, RepositoryVisibility, Session,
};
