pub mod account;
pub mod api_key;
pub mod data_connection;
pub mod membership;
pub mod repository;
pub mod session;

pub use account::{Account, AccountFlag, AccountType};
pub use api_key::ApiKey;
pub use data_connection::DataConnection;
pub use membership::{Membership, MembershipRole, MembershipState};
pub use repository::{DataMode, Repository, RepositoryVisibility};
pub use session::Session;
