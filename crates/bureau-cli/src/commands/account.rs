//! Account commands: register, login, profile show/edit

use bureau_core::{ProfileForm, UserId};
use bureau_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult, ProfileChanges,
};
use clap::{Args, Subcommand};
use rusqlite::Connection;

use super::render::print_profile;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub password: String,

    /// Age in whole years
    #[arg(long)]
    pub age: String,

    /// "Мужской"/"Женский", or male/female
    #[arg(long)]
    pub gender: String,

    #[arg(long)]
    pub interests: String,

    /// Photo file path
    #[arg(long)]
    pub photo: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show a stored profile
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Overwrite profile fields; omitted fields keep their value
    Edit(EditArgs),
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub interests: Option<String>,

    #[arg(long)]
    pub photo: Option<String>,
}

pub fn execute_register(
    args: RegisterArgs,
    conn: &Connection,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = ProfileForm {
        name: args.name,
        password: args.password,
        age: args.age,
        gender: args.gender,
        interests: args.interests,
        photo: args.photo,
    };

    match apply_engine_command(EngineCommand::Register(form), conn)? {
        EngineCommandResult::Registered(id) => {
            println!("Registered user {}", id);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}

pub fn execute_login(args: LoginArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::Login {
        name: args.name,
        password: args.password,
    };

    match apply_engine_command(cmd, conn)? {
        EngineCommandResult::LoggedIn(user) => {
            println!("Logged in as {} (id {})", user.name, user.id);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}

pub fn execute_profile(
    args: ProfileArgs,
    conn: &Connection,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = match args.command {
        ProfileCommand::Show { id } => EngineCommand::ViewProfile(UserId(id)),
        ProfileCommand::Edit(edit) => EngineCommand::UpdateProfile {
            id: UserId(edit.id),
            changes: ProfileChanges {
                name: edit.name,
                password: edit.password,
                age: edit.age,
                gender: edit.gender,
                interests: edit.interests,
                photo: edit.photo,
            },
        },
    };

    match apply_engine_command(cmd, conn)? {
        EngineCommandResult::Profile(user) => {
            print_profile(&user);
            Ok(())
        }
        EngineCommandResult::ProfileUpdated(user) => {
            println!("Profile updated");
            print_profile(&user);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}
