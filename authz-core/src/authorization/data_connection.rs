//! Data connection policies.
//!
//! Connections are platform-level resources: no account owns one, and
//! mutation or credential access is an operator concern.

use super::{is_admin, principal_account, Resource};
use crate::models::Session;

/// Connections are discoverable by anyone who is not disabled, anonymous
/// callers included.
pub(crate) fn can_get_data_connection(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::DataConnection(_) = resource else {
        return false;
    };
    if let Some(account) = principal_account(principal) {
        if account.disabled {
            return false;
        }
    }
    true
}

/// Selecting a connection as a storage target. Read-only connections are
/// never selectable; a required flag restricts use to accounts carrying it.
/// Admins are exempt from both gates.
pub(crate) fn can_use_data_connection(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::DataConnection(connection) = resource else {
        return false;
    };
    if let Some(account) = principal_account(principal) {
        if account.disabled {
            return false;
        }
    }
    if is_admin(principal) {
        return true;
    }
    if connection.read_only {
        return false;
    }
    match connection.required_flag {
        None => true,
        Some(flag) => {
            principal_account(principal).is_some_and(|account| account.has_flag(flag))
        }
    }
}

/// Creating, updating, disabling, and credential reads are admin-only.
pub(crate) fn can_administer_data_connection(
    principal: Option<&Session>,
    resource: Resource<'_>,
) -> bool {
    let Resource::DataConnection(_) = resource else {
        return false;
    };
    let Some(account) = principal_account(principal) else {
        return false;
    };
    !account.disabled && is_admin(principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountFlag, AccountType, DataConnection};

    fn connection() -> DataConnection {
        DataConnection::new("us-coastal-mirror")
    }

    fn admin_session() -> Session {
        let mut account = Account::new("root", AccountType::Individual);
        account.flags.push(AccountFlag::Admin);
        Session::for_account(account)
    }

    #[test]
    fn anyone_discovers_connections_except_disabled_principals() {
        let connection = connection();
        assert!(can_get_data_connection(None, Resource::DataConnection(&connection)));

        let mut account = Account::new("ada", AccountType::Individual);
        account.disabled = true;
        let disabled = Session::for_account(account);
        assert!(!can_get_data_connection(
            Some(&disabled),
            Resource::DataConnection(&connection)
        ));
    }

    #[test]
    fn writable_unflagged_connection_is_usable_by_anyone() {
        let connection = connection();
        assert!(can_use_data_connection(None, Resource::DataConnection(&connection)));
        let session = Session::for_account(Account::new("ada", AccountType::Individual));
        assert!(can_use_data_connection(
            Some(&session),
            Resource::DataConnection(&connection)
        ));
    }

    #[test]
    fn read_only_connection_is_usable_only_by_admins() {
        let mut connection = connection();
        connection.read_only = true;
        let session = Session::for_account(Account::new("ada", AccountType::Individual));
        assert!(!can_use_data_connection(
            Some(&session),
            Resource::DataConnection(&connection)
        ));
        assert!(can_use_data_connection(
            Some(&admin_session()),
            Resource::DataConnection(&connection)
        ));
    }

    #[test]
    fn required_flag_gates_use() {
        let mut connection = connection();
        connection.required_flag = Some(AccountFlag::CreateRepositories);

        assert!(!can_use_data_connection(None, Resource::DataConnection(&connection)));
        let plain = Session::for_account(Account::new("ada", AccountType::Individual));
        assert!(!can_use_data_connection(
            Some(&plain),
            Resource::DataConnection(&connection)
        ));

        let mut flagged = Account::new("ada", AccountType::Individual);
        flagged.flags.push(AccountFlag::CreateRepositories);
        let session = Session::for_account(flagged);
        assert!(can_use_data_connection(
            Some(&session),
            Resource::DataConnection(&connection)
        ));
    }

    #[test]
    fn administration_is_admin_only() {
        let connection = connection();
        let session = Session::for_account(Account::new("ada", AccountType::Individual));
        assert!(!can_administer_data_connection(
            Some(&session),
            Resource::DataConnection(&connection)
        ));
        assert!(can_administer_data_connection(
            Some(&admin_session()),
            Resource::DataConnection(&connection)
        ));

        let mut disabled_admin = admin_session();
        disabled_admin.account.as_mut().unwrap().disabled = true;
        assert!(!can_administer_data_connection(
            Some(&disabled_admin),
            Resource::DataConnection(&connection)
        ));
    }
}
