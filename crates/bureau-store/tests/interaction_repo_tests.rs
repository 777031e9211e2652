// Integration tests for likes and messages

use bureau_core::{ExErrorKind, Gender, NewUser, UserId};
use bureau_store::db::open_in_memory_store;
use bureau_store::SqliteRepo;
use rusqlite::Connection;

fn add_user(conn: &Connection, name: &str) -> UserId {
    SqliteRepo::create_user(
        conn,
        &NewUser {
            name: name.to_string(),
            password: "pw".into(),
            age: 30,
            gender: Gender::Female,
            interests: "книги".to_string(),
            photo: format!("/photos/{}.jpg", name),
        },
    )
    .unwrap()
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_repeated_likes_are_not_deduplicated() {
    let conn = open_in_memory_store().unwrap();
    let a = add_user(&conn, "a");
    let b = add_user(&conn, "b");

    SqliteRepo::record_like(&conn, a, b).unwrap();
    SqliteRepo::record_like(&conn, a, b).unwrap();

    assert_eq!(count(&conn, "likes"), 2);
    let likes = SqliteRepo::likes_given(&conn, a).unwrap();
    assert_eq!(likes.len(), 2);
    assert!(likes.iter().all(|l| l.liker_id == a && l.liked_id == b));
    assert!(SqliteRepo::likes_given(&conn, b).unwrap().is_empty());
}

#[test]
fn test_like_to_unknown_user_violates_foreign_key() {
    let conn = open_in_memory_store().unwrap();
    let a = add_user(&conn, "a");

    let err = SqliteRepo::record_like(&conn, a, UserId(999)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(count(&conn, "likes"), 0);
}

#[test]
fn test_get_messages_covers_both_directions() {
    let conn = open_in_memory_store().unwrap();
    let a = add_user(&conn, "a");
    let b = add_user(&conn, "b");
    let c = add_user(&conn, "c");

    SqliteRepo::send_message(&conn, a, b, "Привет!").unwrap();
    SqliteRepo::send_message(&conn, b, a, "Здравствуй").unwrap();
    SqliteRepo::send_message(&conn, b, c, "Не для a").unwrap();

    let inbox = SqliteRepo::get_messages(&conn, a).unwrap();
    let bodies: Vec<&str> = inbox.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["Привет!", "Здравствуй"]);
    assert!(inbox.iter().all(|m| m.involves(a)));

    assert_eq!(SqliteRepo::get_messages(&conn, b).unwrap().len(), 3);
    assert_eq!(SqliteRepo::get_messages(&conn, c).unwrap().len(), 1);
}

#[test]
fn test_message_to_self_listed_once() {
    let conn = open_in_memory_store().unwrap();
    let a = add_user(&conn, "a");

    SqliteRepo::send_message(&conn, a, a, "заметка").unwrap();

    assert_eq!(SqliteRepo::get_messages(&conn, a).unwrap().len(), 1);
}
