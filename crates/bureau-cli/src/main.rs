//! Dating bureau CLI
//!
//! Command-line front end over the bureau engine

use clap::{Parser, Subcommand};

use bureau_core::logging_facility::{self, Profile};
use bureau_store::db::{open_store, DEFAULT_DB_FILE};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bureau")]
#[command(about = "Dating bureau - profiles, search, likes and messages", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    db: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a new account
    Register(commands::account::RegisterArgs),
    /// Check a name and password
    Login(commands::account::LoginArgs),
    /// Show or edit a profile
    Profile(commands::account::ProfileArgs),
    /// List everyone except the viewer
    Browse(commands::search::BrowseArgs),
    /// Filter profiles by age, gender and interests
    Search(commands::search::SearchArgs),
    /// Like another user
    Like(commands::interaction::LikeArgs),
    /// Send or list messages
    Message(commands::interaction::MessageArgs),
    /// List likes a user has given
    Likes(commands::interaction::LikesArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(&cli.db)?;

    match cli.command {
        Commands::Register(args) => commands::account::execute_register(args, &conn),
        Commands::Login(args) => commands::account::execute_login(args, &conn),
        Commands::Profile(args) => commands::account::execute_profile(args, &conn),
        Commands::Browse(args) => commands::search::execute_browse(args, &conn),
        Commands::Search(args) => commands::search::execute_search(args, &conn),
        Commands::Like(args) => commands::interaction::execute_like(args, &conn),
        Commands::Message(args) => commands::interaction::execute_message(args, &conn),
        Commands::Likes(args) => commands::interaction::execute_likes(args, &conn),
    }
}
