//! Single dispatch point for front ends.
//!
//! A front end turns one user action into an `EngineCommand`, applies it and
//! renders the `EngineCommandResult`.

#![allow(clippy::result_large_err)]

use bureau_core::model::{Like, Message, User, UserId};
use bureau_core::{FilterCriteria, ProfileForm};
use bureau_store::errors::Result;
use rusqlite::Connection;

use super::{account, interaction, search};

/// One user action
#[derive(Debug, Clone)]
pub enum EngineCommand {
    Register(ProfileForm),
    Login {
        name: String,
        password: String,
    },
    ViewProfile(UserId),
    /// Overwrite a profile; fields left `None` keep their stored value
    UpdateProfile {
        id: UserId,
        changes: ProfileChanges,
    },
    Browse {
        viewer: UserId,
    },
    Search(FilterCriteria),
    Like {
        liker: UserId,
        liked: UserId,
    },
    LikesGiven(UserId),
    SendMessage {
        sender: UserId,
        receiver: UserId,
        body: String,
    },
    Messages(UserId),
}

/// Partial profile edit, applied on top of the stored record
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub password: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub interests: Option<String>,
    pub photo: Option<String>,
}

impl ProfileChanges {
    /// The edit form as the user would submit it: stored values overlaid
    /// with whatever was changed
    pub fn apply_to(self, current: &User) -> ProfileForm {
        let base = ProfileForm::from(current);
        ProfileForm {
            name: self.name.unwrap_or(base.name),
            password: self.password.unwrap_or(base.password),
            age: self.age.unwrap_or(base.age),
            gender: self.gender.unwrap_or(base.gender),
            interests: self.interests.unwrap_or(base.interests),
            photo: self.photo.unwrap_or(base.photo),
        }
    }
}

/// Result of applying an engine command
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Registered(UserId),
    LoggedIn(User),
    Profile(User),
    ProfileUpdated(User),
    Profiles(Vec<User>),
    Liked,
    Likes(Vec<Like>),
    MessageSent,
    Messages(Vec<Message>),
}

/// Apply an engine command against an open store
pub fn apply_engine_command(cmd: EngineCommand, conn: &Connection) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Register(form) => {
            account::register(conn, &form).map(EngineCommandResult::Registered)
        }
        EngineCommand::Login { name, password } => {
            account::login(conn, &name, &password).map(EngineCommandResult::LoggedIn)
        }
        EngineCommand::ViewProfile(id) => {
            account::view_profile(conn, id).map(EngineCommandResult::Profile)
        }
        EngineCommand::UpdateProfile { id, changes } => {
            let current = account::view_profile(conn, id)?;
            let form = changes.apply_to(&current);
            account::update_profile(conn, id, &form).map(EngineCommandResult::ProfileUpdated)
        }
        EngineCommand::Browse { viewer } => {
            search::browse_profiles(conn, viewer).map(EngineCommandResult::Profiles)
        }
        EngineCommand::Search(criteria) => {
            search::search_profiles(conn, &criteria).map(EngineCommandResult::Profiles)
        }
        EngineCommand::Like { liker, liked } => {
            interaction::like(conn, liker, liked).map(|()| EngineCommandResult::Liked)
        }
        EngineCommand::LikesGiven(user) => {
            interaction::likes_given(conn, user).map(EngineCommandResult::Likes)
        }
        EngineCommand::SendMessage {
            sender,
            receiver,
            body,
        } => interaction::send_message(conn, sender, receiver, &body)
            .map(|()| EngineCommandResult::MessageSent),
        EngineCommand::Messages(user) => {
            interaction::messages_for(conn, user).map(EngineCommandResult::Messages)
        }
    }
}
