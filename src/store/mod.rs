//! In-memory data store for teams, members, projects and tasks.
//!
//! Every call waits for its configured [`Latency`] before touching the data,
//! and every value handed out is an owned copy: changing a returned record
//! never changes what the store holds. The delay is awaited before the lock
//! is taken, so overlapping writes to the same record resolve last-write-wins.

mod ids;
mod seed;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::latency::{Latency, Op};
use crate::models::*;
use crate::search::{filter_by, MemberQuery, ProjectQuery, TeamQuery};

use ids::IdGenerator;

/// The only account `login` accepts.
pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Signup rejects this address as already taken.
pub const RESERVED_EMAIL: &str = "existing@example.com";

/// The account behind the demo credentials, also restored from a saved session.
pub fn demo_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Test User".to_string(),
        email: DEMO_EMAIL.to_string(),
    }
}

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Projects that are `active` or `inProgress`.
    pub active_projects: usize,
    pub pending_tasks: usize,
    pub team_members: usize,
}

struct Inner {
    data: Dataset,
    ids: IdGenerator,
}

/// Handle to a store instance. Clones share the same data.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
    latency: Latency,
}

impl Store {
    /// An empty store.
    pub fn new(latency: Latency) -> Self {
        Self::with_dataset(Dataset::default(), latency)
    }

    /// A store pre-loaded with the demo teams, members, projects and tasks.
    pub fn seeded(latency: Latency) -> Self {
        Self::with_dataset(seed::dataset(), latency)
    }

    pub fn with_dataset(data: Dataset, latency: Latency) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                data,
                ids: IdGenerator::default(),
            })),
            latency,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    // ============================================================
    // Generic reads
    // ============================================================

    /// All records of `kind`, in collection order.
    pub async fn fetch_all(&self, kind: EntityKind) -> Vec<Entity> {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        tracing::debug!(%kind, count = inner.data.len(kind), "fetch_all");
        inner.data.entities(kind)
    }

    /// The record of `kind` with `id`, or `None` if there is none.
    pub async fn fetch_by_id(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.latency.wait(Op::FetchById).await;
        let inner = self.inner.read().await;
        let found = inner.data.entity(kind, id);
        tracing::debug!(%kind, id, found = found.is_some(), "fetch_by_id");
        found
    }

    pub async fn fetch_all_of<T: Record>(&self) -> Vec<T> {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        let records = T::collection(&inner.data);
        tracing::debug!(kind = %T::KIND, count = records.len(), "fetch_all_of");
        records.to_vec()
    }

    pub async fn fetch_by_id_of<T: Record>(&self, id: &str) -> Option<T> {
        self.latency.wait(Op::FetchById).await;
        let inner = self.inner.read().await;
        let found = T::collection(&inner.data)
            .iter()
            .find(|record| record.id() == id)
            .cloned();
        tracing::debug!(kind = %T::KIND, id, found = found.is_some(), "fetch_by_id_of");
        found
    }

    /// A copy of every collection.
    pub async fn snapshot(&self) -> Dataset {
        self.latency.wait(Op::FetchAll).await;
        self.inner.read().await.data.clone()
    }

    // ============================================================
    // Team operations
    // ============================================================

    pub async fn create_team(&self, input: CreateTeamInput) -> Team {
        self.latency.wait(Op::Create).await;
        let mut inner = self.inner.write().await;
        let Inner { data, ids } = &mut *inner;
        let id = ids.next("t", |candidate| data.teams.iter().any(|t| t.id == candidate));

        let team = Team {
            id,
            name: input.name,
            description: input.description,
            members: input.members,
            projects: input.projects,
        };
        data.teams.push(team.clone());

        tracing::info!(id = %team.id, name = %team.name, "Created team");
        team
    }

    /// Shallow-merge `input` into the team. Returns `None` if no team has `id`.
    pub async fn update_team(&self, id: &str, input: UpdateTeamInput) -> Option<Team> {
        self.latency.wait(Op::Update).await;
        let mut inner = self.inner.write().await;
        let Some(team) = inner.data.teams.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "update_team: no such team");
            return None;
        };

        input.apply_to(team);
        tracing::info!(id, "Updated team");
        Some(team.clone())
    }

    /// Remove the team with `id`. Returns whether a team was removed; a missing
    /// id is not an error. Members and projects that reference the team are
    /// left untouched.
    pub async fn delete_team(&self, id: &str) -> bool {
        self.latency.wait(Op::Delete).await;
        let mut inner = self.inner.write().await;
        let before = inner.data.teams.len();
        inner.data.teams.retain(|t| t.id != id);
        let removed = inner.data.teams.len() < before;

        if removed {
            tracing::info!(id, "Deleted team");
        } else {
            tracing::debug!(id, "delete_team: nothing to delete");
        }
        removed
    }

    // ============================================================
    // Option projections
    // ============================================================

    pub async fn get_all_members_as_options(&self) -> Vec<SelectOption> {
        self.latency.wait(Op::Options).await;
        let inner = self.inner.read().await;
        inner.data.members.iter().map(Member::to_option).collect()
    }

    pub async fn get_all_teams_as_options(&self) -> Vec<SelectOption> {
        self.latency.wait(Op::Options).await;
        let inner = self.inner.read().await;
        inner.data.teams.iter().map(Team::to_option).collect()
    }

    /// Options for the members assigned to a project. Member ids that no
    /// longer resolve are skipped; an unknown project gives an empty list.
    pub async fn get_project_members_as_options(&self, project_id: &str) -> Vec<SelectOption> {
        self.latency.wait(Op::Options).await;
        let inner = self.inner.read().await;
        let Some(project) = inner.data.projects.iter().find(|p| p.id == project_id) else {
            return Vec::new();
        };

        project
            .assigned_members
            .iter()
            .filter_map(|member_id| inner.data.members.iter().find(|m| &m.id == member_id))
            .map(Member::to_option)
            .collect()
    }

    // ============================================================
    // Search and dashboard
    // ============================================================

    pub async fn search_teams(&self, query: &TeamQuery) -> Vec<Team> {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        filter_by(&inner.data.teams, |t| query.matches(t))
    }

    pub async fn search_members(&self, query: &MemberQuery) -> Vec<Member> {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        filter_by(&inner.data.members, |m| query.matches(m))
    }

    pub async fn search_projects(&self, query: &ProjectQuery) -> Vec<Project> {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        filter_by(&inner.data.projects, |p| query.matches(p))
    }

    pub async fn dashboard_summary(&self) -> DashboardSummary {
        self.latency.wait(Op::FetchAll).await;
        let inner = self.inner.read().await;
        let data = &inner.data;
        DashboardSummary {
            active_projects: data.projects.iter().filter(|p| p.status.is_open()).count(),
            pending_tasks: data
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
            team_members: data.members.len(),
        }
    }

    // ============================================================
    // Authentication
    // ============================================================

    /// Check credentials against the fixed demo account.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.latency.wait(Op::Auth).await;
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            tracing::debug!(email, "login accepted");
            Ok(AuthResponse {
                token: new_token(),
                user: demo_user(),
            })
        } else {
            tracing::debug!(email, "login rejected");
            Err(Error::InvalidCredentials)
        }
    }

    /// Register a new account and return a session for it.
    ///
    /// The returned user is not added to any collection.
    pub async fn signup(&self, input: SignupInput) -> Result<AuthResponse> {
        self.latency.wait(Op::Auth).await;
        if input.email == RESERVED_EMAIL {
            return Err(Error::EmailAlreadyRegistered);
        }

        let id = self.inner.write().await.ids.next("u", |_| false);
        tracing::debug!(id = %id, email = %input.email, "signup accepted");
        Ok(AuthResponse {
            token: new_token(),
            user: User {
                id,
                name: input.name,
                email: input.email,
            },
        })
    }
}

fn new_token() -> String {
    Uuid::new_v4().to_string()
}
