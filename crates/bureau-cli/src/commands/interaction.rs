//! Like and message commands

use bureau_core::UserId;
use bureau_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use clap::{Args, Subcommand};
use rusqlite::Connection;

use super::render::{print_likes, print_messages};

#[derive(Debug, Args)]
pub struct LikeArgs {
    #[arg(long)]
    pub from: i64,

    #[arg(long)]
    pub to: i64,
}

#[derive(Debug, Args)]
pub struct MessageArgs {
    #[command(subcommand)]
    pub command: MessageCommand,
}

#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// Send a message to another user
    Send {
        #[arg(long)]
        from: i64,

        #[arg(long)]
        to: i64,

        #[arg(long)]
        body: String,
    },
    /// List every message a user sent or received
    List {
        #[arg(long)]
        user: i64,
    },
}

#[derive(Debug, Args)]
pub struct LikesArgs {
    #[arg(long)]
    pub user: i64,
}

pub fn execute_like(args: LikeArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = EngineCommand::Like {
        liker: UserId(args.from),
        liked: UserId(args.to),
    };

    match apply_engine_command(cmd, conn)? {
        EngineCommandResult::Liked => {
            println!("Liked user {}", args.to);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}

pub fn execute_message(
    args: MessageArgs,
    conn: &Connection,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = match args.command {
        MessageCommand::Send { from, to, body } => EngineCommand::SendMessage {
            sender: UserId(from),
            receiver: UserId(to),
            body,
        },
        MessageCommand::List { user } => EngineCommand::Messages(UserId(user)),
    };

    match apply_engine_command(cmd, conn)? {
        EngineCommandResult::MessageSent => {
            println!("Message sent");
            Ok(())
        }
        EngineCommandResult::Messages(messages) => {
            print_messages(&messages);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}

pub fn execute_likes(args: LikesArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    match apply_engine_command(EngineCommand::LikesGiven(UserId(args.user)), conn)? {
        EngineCommandResult::Likes(likes) => {
            print_likes(&likes);
            Ok(())
        }
        other => Err(format!("Unexpected engine result: {:?}", other).into()),
    }
}
