use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Access role attached to a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Admin,
    User,
    Moderator,
    Editor,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::User, Role::Moderator, Role::Editor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "moderator" => Ok(Role::Moderator),
            "editor" => Ok(Role::Editor),
            other => Err(RoleParseError(String::from(other))),
        }
    }
}

/// One entry in the directory.
///
/// Opaque to the windowing engine; persistence of records is the host's
/// concern (an opaque key-value blob store), so `created_at` stays a plain
/// ISO-8601 string rather than pulling in a datetime stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}
