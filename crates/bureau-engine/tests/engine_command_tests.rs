mod common;

use bureau_core::{ExErrorKind, FilterCriteria};
use bureau_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult, ProfileChanges,
};
use common::{form, new_store};

#[test]
fn test_register_login_like_message_flow() {
    let conn = new_store();

    let anna = match apply_engine_command(
        EngineCommand::Register(form("Анна", "27", "Женский", "кино")),
        &conn,
    )
    .unwrap()
    {
        EngineCommandResult::Registered(id) => id,
        other => panic!("unexpected result: {:?}", other),
    };
    let ivan = match apply_engine_command(
        EngineCommand::Register(form("Иван", "31", "Мужской", "шахматы")),
        &conn,
    )
    .unwrap()
    {
        EngineCommandResult::Registered(id) => id,
        other => panic!("unexpected result: {:?}", other),
    };

    let logged_in = apply_engine_command(
        EngineCommand::Login {
            name: "Иван".to_string(),
            password: "Иван-pass".to_string(),
        },
        &conn,
    )
    .unwrap();
    assert!(matches!(logged_in, EngineCommandResult::LoggedIn(u) if u.id == ivan));

    let liked = apply_engine_command(
        EngineCommand::Like {
            liker: ivan,
            liked: anna,
        },
        &conn,
    )
    .unwrap();
    assert!(matches!(liked, EngineCommandResult::Liked));

    apply_engine_command(
        EngineCommand::SendMessage {
            sender: ivan,
            receiver: anna,
            body: "Привет".to_string(),
        },
        &conn,
    )
    .unwrap();

    match apply_engine_command(EngineCommand::Messages(anna), &conn).unwrap() {
        EngineCommandResult::Messages(messages) => {
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].sender_id, ivan);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    match apply_engine_command(EngineCommand::Search(FilterCriteria::default()), &conn).unwrap() {
        EngineCommandResult::Profiles(users) => assert_eq!(users.len(), 2),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_partial_update_keeps_unchanged_fields() {
    let conn = new_store();
    let id = match apply_engine_command(
        EngineCommand::Register(form("Анна", "27", "Женский", "кино")),
        &conn,
    )
    .unwrap()
    {
        EngineCommandResult::Registered(id) => id,
        other => panic!("unexpected result: {:?}", other),
    };

    let result = apply_engine_command(
        EngineCommand::UpdateProfile {
            id,
            changes: ProfileChanges {
                age: Some("28".to_string()),
                ..Default::default()
            },
        },
        &conn,
    )
    .unwrap();

    match result {
        EngineCommandResult::ProfileUpdated(user) => {
            assert_eq!(user.age, 28);
            assert_eq!(user.name, "Анна");
            assert_eq!(user.password.expose(), "Анна-pass");
            assert_eq!(user.interests, "кино");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_partial_update_with_empty_value_is_rejected() {
    let conn = new_store();
    apply_engine_command(
        EngineCommand::Register(form("Анна", "27", "Женский", "кино")),
        &conn,
    )
    .unwrap();

    let err = apply_engine_command(
        EngineCommand::UpdateProfile {
            id: bureau_core::UserId(1),
            changes: ProfileChanges {
                name: Some(String::new()),
                ..Default::default()
            },
        },
        &conn,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingField);
}
