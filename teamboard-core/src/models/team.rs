use serde::{Deserialize, Deserializer, Serialize};

use super::SelectOption;

/// A group of members working on a set of projects.
///
/// `members` and `projects` hold ids in insertion order. The order is only
/// meaningful for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Team {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(&self.name, &self.id)
    }
}

/// Input for creating a new team. The id is assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

/// Input for updating an existing team. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamInput {
    pub name: Option<String>,
    /// `None` leaves the description alone, `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub members: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
}

impl UpdateTeamInput {
    /// Shallow-merge this input into `team`. Fields left as `None` keep their
    /// current value.
    pub fn apply_to(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(description) = self.description {
            team.description = description;
        }
        if let Some(members) = self.members {
            team.members = members;
        }
        if let Some(projects) = self.projects {
            team.projects = projects;
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
