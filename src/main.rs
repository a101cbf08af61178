use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teamboard::config::AppConfig;
use teamboard::display::{format_due_date, member_count_label, project_subtitle};
use teamboard::latency::Latency;
use teamboard::models::*;
use teamboard::search::{MemberQuery, ProjectQuery, TeamQuery};
use teamboard::session::{LogNotifier, MemoryTokenStore, SessionManager};
use teamboard::store::Store;
use teamboard::Error;

#[derive(Parser)]
#[command(name = "teamboard")]
#[command(about = "Browse the demo team, project and task data")]
struct Cli {
    /// Read configuration from this file instead of the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the simulated network delays
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline counts
    Dashboard,
    /// List teams
    Teams {
        /// Case-insensitive match on the team name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List members
    Members {
        /// Case-insensitive match on name or email
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List projects
    Projects {
        #[arg(short, long)]
        search: Option<String>,
        /// One of: active, completed, onHold, inProgress
        #[arg(long)]
        status: Option<String>,
    },
    /// List tasks
    Tasks,
    /// Show one record
    Show {
        /// teams, members, projects or tasks
        kind: String,
        id: String,
    },
    /// Print selection options
    Options {
        #[command(subcommand)]
        target: OptionsTarget,
    },
    /// Run the startup check, then log in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Run the startup check, then sign up
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum OptionsTarget {
    Members,
    Teams,
    /// Members assigned to a project
    Project { id: String },
    Roles,
    ProjectStatuses,
    TaskStatuses,
    Priorities,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamRow {
    #[serde(flatten)]
    team: Team,
    subtitle: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRow {
    #[serde(flatten)]
    project: Project,
    subtitle: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskRow {
    #[serde(flatten)]
    task: Task,
    subtitle: String,
}

/// Logs go to stderr so stdout carries only JSON.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "teamboard=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Turn a session call's `false` into an error so `main` exits non-zero.
fn ensure_succeeded(ok: bool, action: &str) -> anyhow::Result<()> {
    if !ok {
        anyhow::bail!("{} failed", action);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => AppConfig::load(),
    };
    if cli.no_latency {
        config.latency = Latency::none();
    }
    Ok(config)
}

fn session_manager(store: &Store, config: &AppConfig) -> SessionManager {
    let tokens = if config.remember_session {
        MemoryTokenStore::with_token("stored-session-token")
    } else {
        MemoryTokenStore::new()
    };
    SessionManager::new(
        store.clone(),
        Arc::new(tokens),
        Arc::new(LogNotifier),
        config.latency,
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let store = Store::seeded(config.latency);

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => print_json(&store.dashboard_summary().await)?,
        Commands::Teams { search } => {
            let query = TeamQuery::new(search.unwrap_or_default());
            let rows: Vec<TeamRow> = store
                .search_teams(&query)
                .await
                .into_iter()
                .map(|team| TeamRow {
                    subtitle: member_count_label(team.members.len()),
                    team,
                })
                .collect();
            print_json(&rows)?;
        }
        Commands::Members { search } => {
            let query = MemberQuery::new(search.unwrap_or_default());
            print_json(&store.search_members(&query).await)?;
        }
        Commands::Projects { search, status } => {
            let mut query = ProjectQuery::new(search.unwrap_or_default());
            if let Some(status) = status {
                let status = ProjectStatus::from_str(&status)
                    .ok_or_else(|| anyhow::anyhow!("Unknown project status: {}", status))?;
                query = query.with_status(status);
            }

            let teams = store.fetch_all_of::<Team>().await;
            let rows: Vec<ProjectRow> = store
                .search_projects(&query)
                .await
                .into_iter()
                .map(|project| {
                    let team_name = teams
                        .iter()
                        .find(|t| t.id == project.team_id)
                        .map_or(project.team_id.as_str(), |t| t.name.as_str());
                    ProjectRow {
                        subtitle: project_subtitle(team_name, project.due_date),
                        project,
                    }
                })
                .collect();
            print_json(&rows)?;
        }
        Commands::Tasks => {
            let rows: Vec<TaskRow> = store
                .fetch_all_of::<Task>()
                .await
                .into_iter()
                .map(|task| TaskRow {
                    subtitle: format!(
                        "Due: {} - {}",
                        format_due_date(task.due_date),
                        task.status.as_str()
                    ),
                    task,
                })
                .collect();
            print_json(&rows)?;
        }
        Commands::Show { kind, id } => {
            let kind = EntityKind::from_str(&kind)
                .ok_or_else(|| anyhow::anyhow!("Unknown entity kind: {}", kind))?;
            let entity = store
                .fetch_by_id(kind, &id)
                .await
                .ok_or_else(|| Error::not_found(kind, &id))?;
            print_json(&entity)?;
        }
        Commands::Options { target } => {
            let options = match target {
                OptionsTarget::Members => store.get_all_members_as_options().await,
                OptionsTarget::Teams => store.get_all_teams_as_options().await,
                OptionsTarget::Project { id } => store.get_project_members_as_options(&id).await,
                OptionsTarget::Roles => Role::options(),
                OptionsTarget::ProjectStatuses => ProjectStatus::options(),
                OptionsTarget::TaskStatuses => TaskStatus::options(),
                OptionsTarget::Priorities => Priority::options(),
            };
            print_json(&options)?;
        }
        Commands::Login { email, password } => {
            let session = session_manager(&store, &config);
            session.initialize().await;
            if session.is_authenticated() {
                tracing::info!("Restored saved session, logging out first");
                session.logout().await;
            }
            let ok = session.login(&email, &password).await;
            print_json(&session.state())?;
            ensure_succeeded(ok, "login")?;
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let session = session_manager(&store, &config);
            session.initialize().await;
            let ok = session
                .signup(SignupInput {
                    name,
                    email,
                    password,
                })
                .await;
            print_json(&session.state())?;
            ensure_succeeded(ok, "signup")?;
        }
    }

    Ok(())
}
