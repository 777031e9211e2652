use bureau_core::ProfileForm;
use rusqlite::Connection;

#[allow(dead_code)]
pub fn new_store() -> Connection {
    bureau_store::db::open_in_memory_store().unwrap()
}

/// A complete, valid registration form
#[allow(dead_code)]
pub fn form(name: &str, age: &str, gender: &str, interests: &str) -> ProfileForm {
    ProfileForm {
        name: name.to_string(),
        password: format!("{}-pass", name),
        age: age.to_string(),
        gender: gender.to_string(),
        interests: interests.to_string(),
        photo: format!("/photos/{}.jpg", name),
    }
}

#[allow(dead_code)]
pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}
