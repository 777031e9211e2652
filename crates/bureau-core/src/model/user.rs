use bureau_core_types::Sensitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::gender::Gender;

/// Numeric identity of a user (SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user, as stored
///
/// The password is kept exactly as entered; `Sensitive` only keeps it out of
/// debug output and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,

    /// Display name, unique across the bureau
    pub name: String,

    pub password: Sensitive<String>,

    pub age: i64,

    pub gender: Gender,

    /// Free-text interests, matched by substring in search
    pub interests: String,

    /// Filesystem path of the profile photo
    pub photo: String,
}

impl User {
    /// The password-free view shown to other users
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
            interests: self.interests.clone(),
            photo: self.photo.clone(),
        }
    }

    /// Exact, case-sensitive credential comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose() == candidate
    }
}

/// Public attributes of a user as displayed to others
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub interests: String,
    pub photo: String,
}

/// Validated field set for registration or a profile overwrite
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub password: Sensitive<String>,
    pub age: i64,
    pub gender: Gender,
    pub interests: String,
    pub photo: String,
}

impl NewUser {
    /// Attach a stored id, yielding the record the store will hold
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            password: self.password,
            age: self.age,
            gender: self.gender,
            interests: self.interests,
            photo: self.photo,
        }
    }
}
