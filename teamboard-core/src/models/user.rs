use serde::{Deserialize, Serialize};

/// The account behind a session.
///
/// Users are separate from [`super::Member`]s: signing up does not create a
/// member and the new user is not queryable through the store afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Result of a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Input for registering a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
