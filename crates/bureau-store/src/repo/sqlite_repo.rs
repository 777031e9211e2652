//! SQLite repository for users, likes and messages
//!
//! Every function takes the connection explicitly; the caller decides how
//! long a connection lives.

#![allow(clippy::result_large_err)]

use crate::errors::{duplicate_name, from_rusqlite, is_unique_violation, Result};
use bureau_core::model::{Gender, Like, Message, NewUser, User, UserId};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

const USER_COLUMNS: &str = "id, name, password, age, gender, interests, photo";

/// SQLite repository for bureau records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new user and return its id
    ///
    /// # Errors
    /// * `DuplicateName` - a user with the same name exists; nothing is written
    pub fn create_user(conn: &Connection, user: &NewUser) -> Result<UserId> {
        conn.execute(
            "INSERT INTO users (name, password, age, gender, interests, photo)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                user.name,
                user.password.expose(),
                user.age,
                user.gender.label(),
                user.interests,
                user.photo,
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_name("create_user", &user.name)
            } else {
                from_rusqlite(e)
            }
        })?;

        let id = UserId(conn.last_insert_rowid());
        tracing::debug!(user_id = id.get(), "inserted user");
        Ok(id)
    }

    /// Look up a user by exact name and password
    ///
    /// Returns `None` for an unknown name and for a wrong password alike.
    pub fn authenticate(conn: &Connection, name: &str, password: &str) -> Result<Option<User>> {
        let user = Self::find_user_by_name(conn, name)?;
        Ok(user.filter(|u| u.password_matches(password)))
    }

    /// Get a user by exact (case-sensitive) name
    pub fn find_user_by_name(conn: &Connection, name: &str) -> Result<Option<User>> {
        conn.query_row(
            &format!("SELECT {} FROM users WHERE name = ?1", USER_COLUMNS),
            [name],
            user_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a user by id
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            [id.get()],
            user_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All users in storage order
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
            .map_err(from_rusqlite)?;

        let users = stmt
            .query_map([], user_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(users)
    }

    pub fn count_users(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Overwrite every field of user `id`
    ///
    /// There is no application-level name check; a rename onto an existing
    /// name is rejected by the UNIQUE constraint and reported as
    /// `DuplicateName`. Updating an id that does not exist is a no-op.
    pub fn update_user(conn: &Connection, id: UserId, user: &NewUser) -> Result<()> {
        let changed = conn
            .execute(
                "UPDATE users
                 SET name = ?1, password = ?2, age = ?3, gender = ?4, interests = ?5, photo = ?6
                 WHERE id = ?7",
                rusqlite::params![
                    user.name,
                    user.password.expose(),
                    user.age,
                    user.gender.label(),
                    user.interests,
                    user.photo,
                    id.get(),
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    duplicate_name("update_user", &user.name)
                } else {
                    from_rusqlite(e)
                }
            })?;

        tracing::debug!(user_id = id.get(), changed, "updated user");
        Ok(())
    }

    /// Record a like; repeated likes each get their own row
    pub fn record_like(conn: &Connection, liker: UserId, liked: UserId) -> Result<()> {
        conn.execute(
            "INSERT INTO likes (user_id, liked_user_id) VALUES (?1, ?2)",
            [liker.get(), liked.get()],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(user_id = liker.get(), target_user_id = liked.get(), "recorded like");
        Ok(())
    }

    /// Likes given by `liker`, in storage order
    pub fn likes_given(conn: &Connection, liker: UserId) -> Result<Vec<Like>> {
        let mut stmt = conn
            .prepare("SELECT id, user_id, liked_user_id FROM likes WHERE user_id = ?1 ORDER BY id")
            .map_err(from_rusqlite)?;

        let likes = stmt
            .query_map([liker.get()], |row| {
                Ok(Like {
                    id: row.get(0)?,
                    liker_id: UserId(row.get(1)?),
                    liked_id: UserId(row.get(2)?),
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(likes)
    }

    /// Store a message
    ///
    /// The body is written as given; rejecting empty bodies is the caller's
    /// job.
    pub fn send_message(
        conn: &Connection,
        sender: UserId,
        receiver: UserId,
        body: &str,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO messages (sender_id, receiver_id, message) VALUES (?1, ?2, ?3)",
            rusqlite::params![sender.get(), receiver.get(), body],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(
            user_id = sender.get(),
            target_user_id = receiver.get(),
            "stored message"
        );
        Ok(())
    }

    /// Messages sent or received by `user`, in storage order
    pub fn get_messages(conn: &Connection, user: UserId) -> Result<Vec<Message>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, sender_id, receiver_id, message FROM messages
                 WHERE sender_id = ?1 OR receiver_id = ?1
                 ORDER BY id",
            )
            .map_err(from_rusqlite)?;

        let messages = stmt
            .query_map([user.get()], |row| {
                Ok(Message {
                    id: row.get(0)?,
                    sender_id: UserId(row.get(1)?),
                    receiver_id: UserId(row.get(2)?),
                    body: row.get(3)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(messages)
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    let gender_label: String = row.get(4)?;
    let gender = gender_label
        .parse::<Gender>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(User {
        id: UserId(row.get(0)?),
        name: row.get(1)?,
        password: row.get::<_, String>(2)?.into(),
        age: row.get(3)?,
        gender,
        interests: row.get(5)?,
        photo: row.get(6)?,
    })
}
