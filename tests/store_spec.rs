use teamboard::latency::Latency;
use teamboard::models::*;
use teamboard::search::{MemberQuery, ProjectQuery, TeamQuery};
use teamboard::store::{Store, DEMO_EMAIL, DEMO_PASSWORD, RESERVED_EMAIL};
use teamboard::Error;

fn setup() -> Store {
    Store::seeded(Latency::none())
}

fn team_input(name: &str) -> CreateTeamInput {
    CreateTeamInput {
        name: name.to_string(),
        description: Some("Created in a test".to_string()),
        members: vec!["m1".to_string()],
        projects: Vec::new(),
    }
}

mod fetch {
    use super::*;

    #[tokio::test]
    async fn fetch_all_returns_every_seeded_record() {
        let store = setup();

        assert_eq!(store.fetch_all(EntityKind::Team).await.len(), 3);
        assert_eq!(store.fetch_all(EntityKind::Member).await.len(), 5);
        assert_eq!(store.fetch_all(EntityKind::Project).await.len(), 4);
        assert_eq!(store.fetch_all(EntityKind::Task).await.len(), 2);
    }

    #[tokio::test]
    async fn fetch_all_on_an_empty_store_is_empty() {
        let store = Store::new(Latency::none());

        for kind in EntityKind::ALL {
            assert!(store.fetch_all(kind).await.is_empty());
        }
    }

    #[tokio::test]
    async fn fetch_by_id_returns_the_requested_record() {
        let store = setup();

        for (kind, id) in [
            (EntityKind::Team, "t2"),
            (EntityKind::Member, "m4"),
            (EntityKind::Project, "p3"),
            (EntityKind::Task, "tk1"),
        ] {
            let entity = store.fetch_by_id(kind, id).await.expect("record exists");
            assert_eq!(entity.id(), id);
            assert_eq!(entity.kind(), kind);
        }
    }

    #[tokio::test]
    async fn fetch_by_id_returns_none_for_missing_ids() {
        let store = setup();

        assert!(store.fetch_by_id(EntityKind::Team, "nope").await.is_none());
        // ids are per collection
        assert!(store.fetch_by_id(EntityKind::Member, "t1").await.is_none());
    }

    #[tokio::test]
    async fn fetch_all_agrees_with_fetch_by_id() {
        let store = setup();

        for kind in EntityKind::ALL {
            for entity in store.fetch_all(kind).await {
                let single = store.fetch_by_id(kind, entity.id()).await;
                assert_eq!(single, Some(entity));
            }
        }
    }

    #[tokio::test]
    async fn typed_fetches_match_kind_selected_fetches() {
        let store = setup();

        let projects = store.fetch_all_of::<Project>().await;
        assert_eq!(projects[1].name, "Mobile App Development");
        assert_eq!(projects[1].status, ProjectStatus::InProgress);

        let task = store.fetch_by_id_of::<Task>("tk2").await.expect("task exists");
        assert_eq!(task.assigned_to_id.as_deref(), Some("m2"));
        assert_eq!(
            store.fetch_by_id(EntityKind::Task, "tk2").await,
            Some(Entity::Task(task))
        );
    }

    #[tokio::test]
    async fn mutating_a_fetched_record_does_not_change_the_store() {
        let store = setup();

        let mut team = store.fetch_by_id_of::<Team>("t1").await.unwrap();
        team.name = "Changed".to_string();
        team.members.clear();

        let mut all = store.fetch_all_of::<Member>().await;
        all[0].email = "changed@example.com".to_string();
        all.truncate(1);

        let team = store.fetch_by_id_of::<Team>("t1").await.unwrap();
        assert_eq!(team.name, "Marketing Team");
        assert_eq!(team.members, vec!["m1", "m2"]);

        let members = store.fetch_all_of::<Member>().await;
        assert_eq!(members.len(), 5);
        assert_eq!(members[0].email, "john.doe@example.com");
    }

    #[tokio::test]
    async fn clones_share_the_same_data() {
        let store = setup();
        let other = store.clone();

        other.delete_team("t3").await;
        assert!(store.fetch_by_id_of::<Team>("t3").await.is_none());
    }

    #[tokio::test]
    async fn separate_instances_are_isolated() {
        let a = setup();
        let b = setup();

        a.delete_team("t1").await;
        assert_eq!(b.fetch_all(EntityKind::Team).await.len(), 3);
    }
}

mod teams {
    use super::*;

    #[tokio::test]
    async fn create_team_appends_and_returns_the_record() {
        let store = setup();

        let team = store.create_team(team_input("Support Team")).await;

        assert!(team.id.starts_with('t'));
        assert_eq!(team.name, "Support Team");
        assert_eq!(team.members, vec!["m1"]);

        let teams = store.fetch_all_of::<Team>().await;
        assert_eq!(teams.len(), 4);
        assert_eq!(teams.last(), Some(&team));
    }

    #[tokio::test]
    async fn create_team_twice_gives_distinct_ids() {
        let store = setup();

        let a = store.create_team(team_input("A")).await;
        let b = store.create_team(team_input("B")).await;

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn concurrent_creates_give_distinct_ids() {
        let store = setup();

        let (a, b, c) = tokio::join!(
            store.create_team(team_input("A")),
            store.create_team(team_input("B")),
            store.create_team(team_input("C")),
        );

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[tokio::test]
    async fn update_team_changes_only_the_given_fields() {
        let store = setup();
        let before = store.fetch_by_id_of::<Team>("t2").await.unwrap();

        let updated = store
            .update_team(
                "t2",
                UpdateTeamInput {
                    name: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("team exists");

        assert_eq!(updated.name, "X");
        assert_eq!(updated.id, before.id);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.members, before.members);
        assert_eq!(updated.projects, before.projects);
        assert_eq!(store.fetch_by_id_of::<Team>("t2").await, Some(updated));
    }

    #[tokio::test]
    async fn update_team_replaces_reference_lists() {
        let store = setup();

        let updated = store
            .update_team(
                "t1",
                UpdateTeamInput {
                    members: Some(vec!["m5".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.members, vec!["m5"]);
        assert_eq!(updated.name, "Marketing Team");
    }

    #[tokio::test]
    async fn update_team_clears_description_on_explicit_null() {
        let store = setup();
        let input: UpdateTeamInput =
            serde_json::from_str(r#"{"description": null}"#).expect("valid input");

        let updated = store.update_team("t1", input).await.expect("team exists");

        assert_eq!(updated.description, None);
        assert_eq!(updated.name, "Marketing Team");
        let stored = store.fetch_by_id_of::<Team>("t1").await.unwrap();
        assert_eq!(stored.description, None);
    }

    #[tokio::test]
    async fn update_team_keeps_description_when_absent() {
        let store = setup();
        let input: UpdateTeamInput =
            serde_json::from_str(r#"{"name": "Growth"}"#).expect("valid input");

        let updated = store.update_team("t1", input).await.expect("team exists");

        assert_eq!(updated.name, "Growth");
        assert_eq!(
            updated.description.as_deref(),
            Some("Handles all marketing campaigns.")
        );
    }

    #[tokio::test]
    async fn update_team_returns_none_for_missing_team() {
        let store = setup();

        let result = store
            .update_team(
                "missing",
                UpdateTeamInput {
                    name: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_none());
        assert_eq!(store.fetch_all(EntityKind::Team).await.len(), 3);
    }

    #[tokio::test]
    async fn delete_team_removes_the_record() {
        let store = setup();

        assert!(store.delete_team("t1").await);
        assert!(store.fetch_by_id(EntityKind::Team, "t1").await.is_none());
        assert_eq!(store.fetch_all(EntityKind::Team).await.len(), 2);
    }

    #[tokio::test]
    async fn delete_team_is_a_no_op_for_missing_ids() {
        let store = setup();

        assert!(!store.delete_team("missing").await);
        assert_eq!(store.fetch_all(EntityKind::Team).await.len(), 3);
    }

    #[tokio::test]
    async fn delete_team_does_not_cascade() {
        let store = setup();

        store.delete_team("t1").await;

        let project = store.fetch_by_id_of::<Project>("p1").await.unwrap();
        assert_eq!(project.team_id, "t1");
        let member = store.fetch_by_id_of::<Member>("m1").await.unwrap();
        assert_eq!(member.teams, vec!["t1"]);
    }
}

mod options {
    use super::*;

    #[tokio::test]
    async fn member_options_follow_collection_order() {
        let store = setup();

        let options = store.get_all_members_as_options().await;

        assert_eq!(options.len(), 5);
        assert_eq!(options[0], SelectOption::new("John Doe", "m1"));
        assert_eq!(options[4], SelectOption::new("David Lee", "m5"));
    }

    #[tokio::test]
    async fn team_options_reflect_live_data() {
        let store = setup();

        let created = store.create_team(team_input("Support Team")).await;
        store.delete_team("t2").await;

        let options = store.get_all_teams_as_options().await;
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["t1", "t3", created.id.as_str()]);
    }

    #[tokio::test]
    async fn project_member_options_resolve_assigned_members() {
        let store = setup();

        let options = store.get_project_members_as_options("p2").await;

        assert_eq!(
            options,
            vec![
                SelectOption::new("Mike Johnson", "m3"),
                SelectOption::new("Emily White", "m4"),
            ]
        );
    }

    #[tokio::test]
    async fn project_member_options_skip_dangling_ids() {
        let mut data = Store::seeded(Latency::none()).snapshot().await;
        data.projects[0].assigned_members = vec!["m1".into(), "ghost".into(), "m2".into()];
        let store = Store::with_dataset(data, Latency::none());

        let options = store.get_project_members_as_options("p1").await;

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn project_member_options_for_unknown_project_are_empty() {
        let store = setup();

        assert!(store.get_project_members_as_options("nope").await.is_empty());
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn search_teams_matches_name_case_insensitively() {
        let store = setup();

        let teams = store.search_teams(&TeamQuery::new("DEV")).await;

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id, "t2");
    }

    #[tokio::test]
    async fn search_members_matches_email_too() {
        let store = setup();

        let members = store.search_members(&MemberQuery::new("mike.j@")).await;

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Mike Johnson");
    }

    #[tokio::test]
    async fn search_projects_combines_text_and_status() {
        let store = setup();

        let all = store.search_projects(&ProjectQuery::default()).await;
        assert_eq!(all.len(), 4);

        let on_hold = store
            .search_projects(&ProjectQuery::new("").with_status(ProjectStatus::OnHold))
            .await;
        assert_eq!(on_hold.len(), 1);
        assert_eq!(on_hold[0].id, "p4");

        let none = store
            .search_projects(&ProjectQuery::new("website").with_status(ProjectStatus::Completed))
            .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn dashboard_summary_counts_live_records() {
        let store = setup();

        let summary = store.dashboard_summary().await;

        assert_eq!(summary.active_projects, 2);
        assert_eq!(summary.pending_tasks, 1);
        assert_eq!(summary.team_members, 5);
    }
}

mod auth {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn login_accepts_the_demo_credentials() {
        let store = setup();

        let response = assert_ok!(store.login(DEMO_EMAIL, DEMO_PASSWORD).await);

        assert_eq!(response.user.email, "test@example.com");
        assert_eq!(response.user.id, "u1");
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn login_rejects_anything_else() {
        let store = setup();

        let err = assert_err!(store.login("wrong@example.com", "x").await);
        assert_eq!(err, Error::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = store.login(DEMO_EMAIL, "wrong").await.unwrap_err();
        assert_eq!(err, Error::InvalidCredentials);
    }

    #[tokio::test]
    async fn signup_rejects_the_reserved_email() {
        let store = setup();

        let err = store
            .signup(SignupInput {
                name: "Someone".into(),
                email: RESERVED_EMAIL.into(),
                password: "secret".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, Error::EmailAlreadyRegistered);
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn signup_returns_a_fresh_session_without_storing_the_user() {
        let store = setup();

        let first = store
            .signup(SignupInput {
                name: "New Person".into(),
                email: "new@example.com".into(),
                password: "secret".into(),
            })
            .await
            .expect("signup");
        let second = store
            .signup(SignupInput {
                name: "Other Person".into(),
                email: "other@example.com".into(),
                password: "secret".into(),
            })
            .await
            .expect("signup");

        assert_eq!(first.user.name, "New Person");
        assert_eq!(first.user.email, "new@example.com");
        assert!(first.user.id.starts_with('u'));
        assert_ne!(first.user.id, second.user.id);
        assert_ne!(first.token, second.token);

        assert_eq!(store.fetch_all(EntityKind::Member).await.len(), 5);
        assert!(store
            .fetch_by_id(EntityKind::Member, &first.user.id)
            .await
            .is_none());
    }
}

mod latency {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn calls_wait_for_the_configured_delay() {
        let store = Store::seeded(Latency::default());
        let start = tokio::time::Instant::now();

        store.fetch_by_id(EntityKind::Team, "t1").await;
        assert!(start.elapsed() >= Duration::from_millis(300));

        let start = tokio::time::Instant::now();
        store.create_team(team_input("Slow")).await;
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_updates_to_different_fields_both_land() {
        let store = Store::seeded(Latency::default());
        let first = store.update_team(
            "t1",
            UpdateTeamInput {
                name: Some("First".into()),
                ..Default::default()
            },
        );
        let second = store.update_team(
            "t1",
            UpdateTeamInput {
                description: Some(Some("Second".into())),
                ..Default::default()
            },
        );

        tokio::join!(first, second);

        let team = store.fetch_by_id_of::<Team>("t1").await.unwrap();
        assert_eq!(team.name, "First");
        assert_eq!(team.description.as_deref(), Some("Second"));
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_updates_to_the_same_field_keep_the_later_write() {
        let store = Store::seeded(Latency::default());
        let earlier = store.update_team(
            "t1",
            UpdateTeamInput {
                name: Some("Earlier".into()),
                ..Default::default()
            },
        );
        let later = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            store
                .update_team(
                    "t1",
                    UpdateTeamInput {
                        name: Some("Later".into()),
                        ..Default::default()
                    },
                )
                .await
        };

        let (earlier, later) = tokio::join!(earlier, later);

        assert_eq!(earlier.unwrap().name, "Earlier");
        assert_eq!(later.unwrap().name, "Later");
        let team = store.fetch_by_id_of::<Team>("t1").await.unwrap();
        assert_eq!(team.name, "Later");
    }
}
