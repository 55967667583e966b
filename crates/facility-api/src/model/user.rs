// User and authentication model types

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SysAdmin,
    Admin,
    Manager,
    User,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserRole::SysAdmin => "SYS_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::User => "USER",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: u64,
    pub name: String,
    pub code: String,
}

/// Identity returned by `/users/me` and `/users/{username}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub unit: Option<UnitInfo>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful `POST /auth/login`; the session itself travels as a cookie
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub unit_id: Option<u64>,
    #[serde(default)]
    pub unit_name: Option<String>,
}
