// Integration tests for user persistence

use bureau_core::{ExErrorKind, Gender, NewUser, UserId};
use bureau_store::db::open_in_memory_store;
use bureau_store::SqliteRepo;

fn anna() -> NewUser {
    NewUser {
        name: "Анна".to_string(),
        password: "Secret1".into(),
        age: 27,
        gender: Gender::Female,
        interests: "Хайкинг и кино".to_string(),
        photo: "/home/anna/photo.jpg".to_string(),
    }
}

fn ivan() -> NewUser {
    NewUser {
        name: "Иван".to_string(),
        password: "qwerty".into(),
        age: 31,
        gender: Gender::Male,
        interests: "Шахматы".to_string(),
        photo: "/home/ivan/me.png".to_string(),
    }
}

#[test]
fn test_create_user_preserves_fields_verbatim() {
    let conn = open_in_memory_store().unwrap();

    let id = SqliteRepo::create_user(&conn, &anna()).unwrap();

    assert_eq!(SqliteRepo::count_users(&conn).unwrap(), 1);
    let stored = SqliteRepo::get_user(&conn, id).unwrap().unwrap();
    assert_eq!(stored, anna().into_user(id));
}

#[test]
fn test_duplicate_name_rejected_and_store_unchanged() {
    let conn = open_in_memory_store().unwrap();
    SqliteRepo::create_user(&conn, &anna()).unwrap();

    let mut clash = ivan();
    clash.name = "Анна".to_string();
    let err = SqliteRepo::create_user(&conn, &clash).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DuplicateName);
    assert_eq!(err.entity_id(), Some("Анна"));
    assert_eq!(SqliteRepo::count_users(&conn).unwrap(), 1);
    let users = SqliteRepo::list_users(&conn).unwrap();
    assert_eq!(users[0].age, 27, "Original row must be untouched");
}

#[test]
fn test_authenticate_requires_exact_match() {
    let conn = open_in_memory_store().unwrap();
    let id = SqliteRepo::create_user(&conn, &anna()).unwrap();

    let user = SqliteRepo::authenticate(&conn, "Анна", "Secret1").unwrap();
    assert_eq!(user.map(|u| u.id), Some(id));

    for (name, password) in [
        ("Анна", "secret1"),
        ("анна", "Secret1"),
        ("Анна", ""),
        ("Анна ", "Secret1"),
        ("Борис", "Secret1"),
    ] {
        assert!(
            SqliteRepo::authenticate(&conn, name, password)
                .unwrap()
                .is_none(),
            "{:?}/{:?} must not authenticate",
            name,
            password
        );
    }
}

#[test]
fn test_list_users_in_storage_order() {
    let conn = open_in_memory_store().unwrap();
    let a = SqliteRepo::create_user(&conn, &anna()).unwrap();
    let i = SqliteRepo::create_user(&conn, &ivan()).unwrap();

    let ids: Vec<UserId> = SqliteRepo::list_users(&conn)
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![a, i]);
}

#[test]
fn test_get_unknown_user_is_none() {
    let conn = open_in_memory_store().unwrap();
    assert!(SqliteRepo::get_user(&conn, UserId(404)).unwrap().is_none());
}

#[test]
fn test_update_then_get_returns_updated_fields() {
    let conn = open_in_memory_store().unwrap();
    let id = SqliteRepo::create_user(&conn, &anna()).unwrap();

    let updated = NewUser {
        name: "Анна К.".to_string(),
        password: "NewSecret".into(),
        age: 28,
        gender: Gender::Female,
        interests: "Театр".to_string(),
        photo: "/home/anna/new.jpg".to_string(),
    };
    SqliteRepo::update_user(&conn, id, &updated).unwrap();

    let stored = SqliteRepo::get_user(&conn, id).unwrap().unwrap();
    assert_eq!(stored, updated.into_user(id));
}

#[test]
fn test_rename_onto_taken_name_hits_unique_constraint() {
    let conn = open_in_memory_store().unwrap();
    SqliteRepo::create_user(&conn, &anna()).unwrap();
    let ivan_id = SqliteRepo::create_user(&conn, &ivan()).unwrap();

    let mut renamed = ivan();
    renamed.name = "Анна".to_string();
    let err = SqliteRepo::update_user(&conn, ivan_id, &renamed).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DuplicateName);
    let stored = SqliteRepo::get_user(&conn, ivan_id).unwrap().unwrap();
    assert_eq!(stored.name, "Иван");
}

#[test]
fn test_update_keeping_own_name_succeeds() {
    let conn = open_in_memory_store().unwrap();
    let id = SqliteRepo::create_user(&conn, &ivan()).unwrap();

    let mut older = ivan();
    older.age = 32;
    SqliteRepo::update_user(&conn, id, &older).unwrap();

    assert_eq!(SqliteRepo::get_user(&conn, id).unwrap().unwrap().age, 32);
}
