use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Roles a platform account can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    College,
    Employer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::College => "college",
            Role::Employer => "employer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "college" => Some(Role::College),
            "employer" => Some(Role::Employer),
            _ => None,
        }
    }
}

/// Signed-in account attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Explicit session context handed to services that need it. There is no
/// hidden login flag; callers are anonymous until they carry an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserAccount),
}

impl Session {
    pub fn authenticated(account: UserAccount) -> Self {
        Session::Authenticated(account)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(account) => Some(account.role),
        }
    }

    pub fn account(&self) -> Option<&UserAccount> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(account) => Some(account),
        }
    }

    /// Recover the session from the simulated auth headers. All three headers
    /// must be present and well formed; anything less is anonymous.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let id = header_value(headers, "x-account-id");
        let name = header_value(headers, "x-account-name");
        let role = header_value(headers, "x-account-role").and_then(|raw| Role::parse(&raw));

        match (id, name, role) {
            (Some(id), Some(name), Some(role)) => {
                Session::Authenticated(UserAccount { id, name, role })
            }
            _ => Session::Anonymous,
        }
    }
}

fn header_value(headers: &HeaderMap, key: &str) -> Option<String> {
    headers
        .get(key)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
