//! Account entities and roles.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Authorization role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Name stored in the `accounts.roles` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// A stored account.
///
/// `password_hash` is a PHC string produced by the configured
/// [`crate::domain::password::PasswordHasher`]; the plain password is never kept.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

/// The account behind the current authenticated request.
///
/// Produced by the route guards and handed to services explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveIdentity {
    pub username: String,
    pub roles: Vec<Role>,
}

impl ActiveIdentity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl From<Account> for ActiveIdentity {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            roles: account.roles,
        }
    }
}
