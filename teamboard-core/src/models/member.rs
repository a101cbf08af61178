use serde::{Deserialize, Serialize};

use super::SelectOption;

/// A person who belongs to one or more teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Ids of the teams this member belongs to.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Ids of the projects this member is currently working on.
    #[serde(default)]
    pub active_projects: Vec<String>,
}

impl Member {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(&self.name, &self.id)
    }
}

/// The permission level of a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Admin, Self::Manager, Self::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Member => "Member",
        }
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|r| SelectOption::new(r.label(), r.as_str()))
            .collect()
    }
}
