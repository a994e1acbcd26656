use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// School user role controlling navigation and data scoping.
///
/// - `Admin` — every section, every record.
/// - `Teacher` — classes they teach and the records tied to them.
/// - `Student` — their own records only.
/// - `Unknown` — any role value the client does not recognise. Gets no
///   permissions beyond the dashboard and profile.
///
/// On the wire a role is the integer code `1 | 2 | 3`; lowercase names are
/// accepted as well. Anything else decodes to `Unknown` instead of failing
/// the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RoleCode", into = "i64")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    #[default]
    Unknown,
}

/// Every role the policy table can grant something to.
pub const KNOWN_ROLES: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

impl Role {
    /// Parse the integer role code used by the API.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Role::Admin,
            2 => Role::Teacher,
            3 => Role::Student,
            _ => Role::Unknown,
        }
    }

    /// Parse a role name, defaulting to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" | "1" => Role::Admin,
            "teacher" | "2" => Role::Teacher,
            "student" | "3" => Role::Student,
            _ => Role::Unknown,
        }
    }

    /// Integer code sent to the API. `Unknown` encodes as 0.
    pub fn code(&self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Teacher => 2,
            Role::Student => 3,
            Role::Unknown => 0,
        }
    }

    /// Human-readable label shown next to the user's name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Unknown => "User",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleCode {
    Code(i64),
    Name(String),
    Other(IgnoredAny),
}

impl From<RoleCode> for Role {
    fn from(code: RoleCode) -> Self {
        match code {
            RoleCode::Code(n) => Role::from_code(n),
            RoleCode::Name(s) => Role::from_str_or_default(&s),
            RoleCode::Other(_) => Role::Unknown,
        }
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

/// The authenticated user's profile, as returned by `/users/profile/` and
/// inside login/register responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Identity {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::school::null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "crate::school::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::school::null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::school::null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Identity {
    /// "First Last", falling back to the username when both names are empty.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }

    pub fn initials(&self) -> String {
        crate::school::initials(&self.first_name, &self.last_name)
    }
}
