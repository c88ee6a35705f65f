//! Sakura CLI Application
//!
//! Terminal front end for the date invitation wizard.

mod args;
mod cli;
mod prompt;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sakura_core::InvitationsBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let invitations = InvitationsBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open the invitation store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Sakura started");

    let mut cli = Cli::new(invitations, renderer);
    match command {
        Some(Respond(args)) => cli.respond(args),
        Some(Responses { command }) => cli.handle_responses_command(command),
        Some(Options) => cli.show_options(),
        Some(Invite) | None => cli.invite(io::stdin().lock(), io::stdout()),
    }
}
