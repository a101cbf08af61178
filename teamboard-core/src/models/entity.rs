use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Member, Project, Task, Team};

/// Selector for one of the four entity collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Team,
    Member,
    Project,
    Task,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [Self::Team, Self::Member, Self::Project, Self::Task];

    /// Same spelling as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Member => "member",
            Self::Project => "project",
            Self::Task => "task",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Team => "Team",
            Self::Member => "Member",
            Self::Project => "Project",
            Self::Task => "Task",
        }
    }

    /// Accepts both the collection name and the singular form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "teams" | "team" => Some(Self::Team),
            "members" | "member" => Some(Self::Member),
            "projects" | "project" => Some(Self::Project),
            "tasks" | "task" => Some(Self::Task),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of any kind, returned by kind-selected fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Entity {
    Team(Team),
    Member(Member),
    Project(Project),
    Task(Task),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Team(_) => EntityKind::Team,
            Self::Member(_) => EntityKind::Member,
            Self::Project(_) => EntityKind::Project,
            Self::Task(_) => EntityKind::Task,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Team(t) => &t.id,
            Self::Member(m) => &m.id,
            Self::Project(p) => &p.id,
            Self::Task(t) => &t.id,
        }
    }
}

/// The four entity collections held by a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Dataset {
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Team => self.teams.len(),
            EntityKind::Member => self.members.len(),
            EntityKind::Project => self.projects.len(),
            EntityKind::Task => self.tasks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|k| self.len(*k) == 0)
    }

    /// Clone every record of `kind` into [`Entity`] values, in collection order.
    pub fn entities(&self, kind: EntityKind) -> Vec<Entity> {
        match kind {
            EntityKind::Team => self.teams.iter().cloned().map(Entity::Team).collect(),
            EntityKind::Member => self.members.iter().cloned().map(Entity::Member).collect(),
            EntityKind::Project => self.projects.iter().cloned().map(Entity::Project).collect(),
            EntityKind::Task => self.tasks.iter().cloned().map(Entity::Task).collect(),
        }
    }

    pub fn entity(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        match kind {
            EntityKind::Team => find(&self.teams, id).map(Entity::Team),
            EntityKind::Member => find(&self.members, id).map(Entity::Member),
            EntityKind::Project => find(&self.projects, id).map(Entity::Project),
            EntityKind::Task => find(&self.tasks, id).map(Entity::Task),
        }
    }
}

fn find<T: Record>(items: &[T], id: &str) -> Option<T> {
    items.iter().find(|item| item.id() == id).cloned()
}

/// A record type stored in one of the [`Dataset`] collections.
pub trait Record: Clone {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn collection(data: &Dataset) -> &[Self];
}

impl Record for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.teams
    }
}

impl Record for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.members
    }
}

impl Record for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.projects
    }
}

impl Record for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.tasks
    }
}
