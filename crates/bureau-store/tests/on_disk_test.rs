// Data written through one connection is visible to the next one

use bureau_core::{Gender, NewUser};
use bureau_store::db::open_store;
use bureau_store::SqliteRepo;
use tempfile::TempDir;

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("dating_bureau.db");

    let id = {
        let conn = open_store(&db_path).unwrap();
        let id = SqliteRepo::create_user(
            &conn,
            &NewUser {
                name: "Мария".to_string(),
                password: "pw".into(),
                age: 24,
                gender: Gender::Female,
                interests: "Танцы".to_string(),
                photo: "m.jpg".to_string(),
            },
        )
        .unwrap();
        SqliteRepo::send_message(&conn, id, id, "черновик").unwrap();
        id
    };

    let conn = open_store(&db_path).unwrap();
    let user = SqliteRepo::authenticate(&conn, "Мария", "pw").unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(SqliteRepo::get_messages(&conn, id).unwrap().len(), 1);
}
