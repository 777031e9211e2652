use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Directed expression of interest; duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub liker_id: UserId,
    pub liked_id: UserId,
}

/// Immutable text message from one user to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub body: String,
}

impl Message {
    /// Whether `user` is the sender or the receiver
    pub fn involves(&self, user: UserId) -> bool {
        self.sender_id == user || self.receiver_id == user
    }

    /// The other side of the conversation from `user`'s point of view
    pub fn counterpart(&self, user: UserId) -> UserId {
        if self.sender_id == user {
            self.receiver_id
        } else {
            self.sender_id
        }
    }
}
