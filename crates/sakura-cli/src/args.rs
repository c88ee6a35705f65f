use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Ask someone out from the terminal
///
/// Sakura walks the invitee through a short wizard: accept, pick a day, a
/// kind of date, food and something to do afterwards. Each completed
/// invitation is saved on this device under a short ID that can be looked up
/// again later.
#[derive(Parser)]
#[command(version, about, name = "sakura")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sakura/sakura.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sakura CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run the invitation wizard interactively (default)
    #[command(alias = "i")]
    Invite,
    /// Answer the whole invitation at once from flags
    #[command(alias = "r")]
    Respond(RespondArgs),
    /// Look up, export or remove saved responses
    #[command(alias = "rs")]
    Responses {
        #[command(subcommand)]
        command: ResponseCommands,
    },
    /// Show every date type, food and after-date option
    #[command(alias = "o")]
    Options,
}

/// Answers for a non-interactive invitation
#[derive(ClapArgs)]
pub struct RespondArgs {
    #[arg(
        long,
        help = "Day of the date as YYYY-MM-DD, between tomorrow and three months from today"
    )]
    pub date: Date,
    #[arg(long, help = "Kind of date, e.g. coffee, dinner, movie, concert, outdoor")]
    pub date_type: String,
    #[arg(long, help = "Optional sub-option of the date type, e.g. rooftop for dinner")]
    pub specifics: Option<String>,
    #[arg(long, help = "Food preference, e.g. italian or thai")]
    pub food: String,
    #[arg(long, help = "What to do after the date, e.g. walk or dessert")]
    pub after: String,
    #[arg(long, default_value = "", help = "Optional free-text suggestions")]
    pub suggestions: String,
}

#[derive(Subcommand)]
pub enum ResponseCommands {
    /// List the invitation IDs saved on this device
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the answers saved under an invitation ID
    #[command(alias = "s")]
    Show {
        #[arg(help = "Invitation ID to look up")]
        id: String,
    },
    /// Delete one saved invitation
    #[command(aliases = ["d", "rm"])]
    Delete {
        #[arg(help = "Invitation ID to delete")]
        id: String,
    },
    /// Delete every saved invitation
    Clear {
        /// Confirm the deletion (required to prevent accidental data loss)
        #[arg(long)]
        yes: bool,
    },
    /// Write the plain-text response summary to a file
    #[command(alias = "e")]
    Export {
        #[arg(help = "Invitation ID to export")]
        id: String,
        /// Destination file. Defaults to date-invitation-response-<ID>.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
