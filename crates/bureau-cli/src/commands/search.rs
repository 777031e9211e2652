//! Browse and search commands

use bureau_core::filter::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
use bureau_core::{FilterCriteria, GenderChoice, Profile, UserId};
use bureau_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use clap::Args;
use rusqlite::Connection;

use super::render::print_profile_list;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Id of the logged-in user; their own profile is left out
    #[arg(long)]
    pub viewer: i64,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, default_value_t = DEFAULT_MIN_AGE)]
    pub min_age: i64,

    #[arg(long, default_value_t = DEFAULT_MAX_AGE)]
    pub max_age: i64,

    /// any, male or female
    #[arg(long, default_value = "any")]
    pub gender: GenderChoice,

    /// Case-insensitive substring of the interests text
    #[arg(long, default_value = "")]
    pub interests: String,

    /// Print matching profiles as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute_browse(args: BrowseArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::Browse {
        viewer: UserId(args.viewer),
    };

    match apply_engine_command(cmd, conn)? {
        EngineCommandResult::Profiles(users) => {
            print_profile_list(&users);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}

pub fn execute_search(args: SearchArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let criteria = FilterCriteria {
        min_age: args.min_age,
        max_age: args.max_age,
        gender: args.gender,
        interests: args.interests,
    };

    let users = match apply_engine_command(EngineCommand::Search(criteria), conn)? {
        EngineCommandResult::Profiles(users) => users,
        other => return Err(format!("Unexpected engine result: {:?}", other).into()),
    };

    if args.json {
        let profiles: Vec<Profile> = users.iter().map(|u| u.profile()).collect();
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        print_profile_list(&users);
    }

    Ok(())
}
