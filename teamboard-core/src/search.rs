//! Text and status filters applied by the list screens.
//!
//! All text matching is a case-insensitive substring test. An empty query
//! matches every record.

use serde::{Deserialize, Serialize};

use crate::models::{Member, Project, ProjectStatus, Team};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Matches teams by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamQuery {
    #[serde(default)]
    pub text: String,
}

impl TeamQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn matches(&self, team: &Team) -> bool {
        contains_ignore_case(&team.name, &self.text)
    }
}

/// Matches members by name or email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberQuery {
    #[serde(default)]
    pub text: String,
}

impl MemberQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn matches(&self, member: &Member) -> bool {
        contains_ignore_case(&member.name, &self.text)
            || contains_ignore_case(&member.email, &self.text)
    }
}

/// Matches projects by name and, optionally, by exact status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectQuery {
    #[serde(default)]
    pub text: String,
    /// `None` means "All".
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl ProjectQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        let status_ok = self.status.map_or(true, |s| s == project.status);
        status_ok && contains_ignore_case(&project.name, &self.text)
    }
}

/// Keep the records accepted by `pred`, preserving order.
pub fn filter_by<T: Clone>(items: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| pred(item)).cloned().collect()
}
