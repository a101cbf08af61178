//! Fixture dataset loaded by [`super::Store::seeded`].

use chrono::NaiveDate;

use crate::models::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn team(id: &str, name: &str, description: &str, members: &[&str], projects: &[&str]) -> Team {
    Team {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
        members: ids(members),
        projects: ids(projects),
    }
}

fn member(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    color: &str,
    teams: &[&str],
    active_projects: &[&str],
) -> Member {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();
    Member {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        profile_picture_url: Some(format!(
            "https://via.placeholder.com/150/{}/FFFFFF?text={}",
            color, initials
        )),
        teams: ids(teams),
        active_projects: ids(active_projects),
    }
}

pub fn dataset() -> Dataset {
    Dataset {
        teams: vec![
            team("t1", "Marketing Team", "Handles all marketing campaigns.", &["m1", "m2"], &["p1"]),
            team(
                "t2",
                "Development Team",
                "Focuses on software and app development.",
                &["m3", "m4"],
                &["p2", "p4"],
            ),
            team(
                "t3",
                "Sales Team",
                "Manages all sales activities and client relationships.",
                &["m5"],
                &["p3"],
            ),
        ],
        members: vec![
            member("m1", "John Doe", "john.doe@example.com", Role::Member, "FF5733", &["t1"], &["p1"]),
            member("m2", "Jane Smith", "jane.smith@example.com", Role::Manager, "33FF57", &["t1"], &["p1"]),
            member("m3", "Mike Johnson", "mike.j@example.com", Role::Admin, "3357FF", &["t2"], &["p2", "p4"]),
            member("m4", "Emily White", "emily.w@example.com", Role::Member, "FF33A1", &["t2"], &["p2"]),
            member("m5", "David Lee", "david.l@example.com", Role::Manager, "33FFA1", &["t3"], &["p3"]),
        ],
        projects: vec![
            Project {
                id: "p1".into(),
                name: "Website Redesign".into(),
                description: Some("Complete overhaul of the company website.".into()),
                team_id: "t1".into(),
                due_date: date(2023, 12, 31),
                status: ProjectStatus::Active,
                assigned_members: ids(&["m1", "m2"]),
                tasks: ids(&["tk1"]),
            },
            Project {
                id: "p2".into(),
                name: "Mobile App Development".into(),
                description: Some("Developing a new mobile application for iOS and Android.".into()),
                team_id: "t2".into(),
                due_date: date(2024, 3, 15),
                status: ProjectStatus::InProgress,
                assigned_members: ids(&["m3", "m4"]),
                tasks: ids(&["tk2"]),
            },
            Project {
                id: "p3".into(),
                name: "Q1 Sales Campaign".into(),
                description: Some("Strategy and execution for Q1 sales targets.".into()),
                team_id: "t3".into(),
                due_date: date(2023, 9, 30),
                status: ProjectStatus::Completed,
                assigned_members: ids(&["m5"]),
                tasks: Vec::new(),
            },
            Project {
                id: "p4".into(),
                name: "Internal Tool Build".into(),
                description: Some("Building a new internal management tool.".into()),
                team_id: "t2".into(),
                due_date: date(2024, 6, 1),
                status: ProjectStatus::OnHold,
                assigned_members: ids(&["m3"]),
                tasks: Vec::new(),
            },
        ],
        tasks: vec![
            Task {
                id: "tk1".into(),
                name: "Design UI Mockups".into(),
                description: Some("Create wireframes and high-fidelity mockups.".into()),
                project_id: "p1".into(),
                assigned_to_id: Some("m1".into()),
                due_date: date(2023, 11, 15),
                status: TaskStatus::InProgress,
                priority: Priority::High,
            },
            Task {
                id: "tk2".into(),
                name: "Backend API Integration".into(),
                description: Some("Integrate the mobile app with existing backend services.".into()),
                project_id: "p2".into(),
                assigned_to_id: Some("m2".into()),
                due_date: date(2024, 2, 1),
                status: TaskStatus::Pending,
                priority: Priority::Medium,
            },
        ],
    }
}
