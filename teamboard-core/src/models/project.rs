use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SelectOption;

/// A piece of work owned by a single team.
///
/// `assigned_members` and `tasks` are id references. A member id that no
/// longer resolves is skipped when the project's members are projected to
/// options, it is never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub team_id: String,
    pub due_date: NaiveDate,
    pub status: ProjectStatus,
    #[serde(default)]
    pub assigned_members: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// The progress status of a project.
///
/// - `Active`: Planned and staffed
/// - `InProgress`: Work is underway
/// - `OnHold`: Paused
/// - `Completed`: Delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    InProgress,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        Self::Active,
        Self::Completed,
        Self::OnHold,
        Self::InProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "onHold",
            Self::InProgress => "inProgress",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "onHold" => Some(Self::OnHold),
            "inProgress" => Some(Self::InProgress),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::InProgress => "In Progress",
        }
    }

    /// Whether the project still counts as open work on the dashboard.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Active | Self::InProgress)
    }

    pub fn options() -> Vec<SelectOption> {
        Self::ALL
            .iter()
            .map(|s| SelectOption::new(s.label(), s.as_str()))
            .collect()
    }
}
