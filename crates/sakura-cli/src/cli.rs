//! Command handlers for the `sakura` binary.
//!
//! Each handler maps one subcommand onto the core API and renders the
//! result. Argument definitions live in [`crate::args`].

use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use jiff::{civil::Date, Zoned};
use log::info;
use sakura_core::{
    display::{CatalogListing, OperationStatus, RecordDetails, ResponseSummary, SavedIds},
    models::catalog,
    AcceptanceSelection, AfterDateSelection, DateSelection, DateTypeSelection, FoodSelection,
    Invitations, RandomIdGenerator, RecordUpdate, SqliteStore, StepSelection, WizardEngine,
};

use crate::{
    args::{RespondArgs, ResponseCommands},
    prompt::Prompter,
    renderer::TerminalRenderer,
};

pub struct Cli {
    invitations: Invitations<SqliteStore>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(invitations: Invitations<SqliteStore>, renderer: TerminalRenderer) -> Self {
        Self {
            invitations,
            renderer,
        }
    }

    /// Runs the interactive wizard.
    pub fn invite<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let id = Prompter::new(input, output, &self.renderer, today())
            .run(&mut self.invitations, &mut RandomIdGenerator)?;
        info!("Saved interactive invitation {id}");
        Ok(())
    }

    /// Runs the wizard with every answer taken from flags.
    pub fn respond(&mut self, args: RespondArgs) -> Result<()> {
        let RespondArgs {
            date,
            date_type,
            specifics,
            food,
            after,
            suggestions,
        } = args;

        if catalog::find_date_type(&date_type).is_none() {
            bail!("Unknown date type '{date_type}'. Run 'sakura options' to see the choices");
        }
        if !catalog::is_known_food(&food) {
            bail!("Unknown food '{food}'. Run 'sakura options' to see the choices");
        }
        if !catalog::is_known_activity(&after) {
            bail!("Unknown activity '{after}'. Run 'sakura options' to see the choices");
        }

        let mut wizard = WizardEngine::new();
        wizard.advance(RecordUpdate::none())?;

        let mut acceptance = AcceptanceSelection::new();
        acceptance.accept();
        acceptance.submit(&mut wizard)?;

        answer_date(&mut wizard, date)?;

        let mut kind = DateTypeSelection::new(date_type);
        if let Some(specifics) = specifics {
            kind = kind.with_specifics(specifics);
        }
        kind.submit(&mut wizard)
            .context("That option does not belong to the chosen date type")?;

        FoodSelection::new(food).submit(&mut wizard)?;
        AfterDateSelection::new(after, suggestions).submit(&mut wizard)?;

        let id = match wizard.save(&mut self.invitations, &mut RandomIdGenerator) {
            Ok(id) => id.to_string(),
            Err(err) => {
                if err.is_retryable() {
                    let status = OperationStatus::failure(
                        "Your answers were not saved. Run the same command again to retry.",
                    );
                    self.renderer.render(&status.to_string())?;
                }
                return Err(err).context("Failed to save your responses");
            }
        };
        info!("Saved invitation {id}");

        let summary = ResponseSummary::new(&id, wizard.record());
        self.renderer.render(&format!("{summary}\n"))
    }

    pub fn handle_responses_command(&mut self, command: ResponseCommands) -> Result<()> {
        match command {
            ResponseCommands::List => self.list_responses(),
            ResponseCommands::Show { id } => self.show_response(&id),
            ResponseCommands::Delete { id } => self.delete_response(&id),
            ResponseCommands::Clear { yes } => self.clear_responses(yes),
            ResponseCommands::Export { id, output } => self.export_response(&id, output),
        }
    }

    pub fn list_responses(&self) -> Result<()> {
        let ids = self
            .invitations
            .list_known_ids()
            .context("Failed to list saved invitations")?;
        self.renderer.render(&SavedIds(ids).to_string())
    }

    pub fn show_response(&self, id: &str) -> Result<()> {
        let id = id.trim();
        let record = self.invitations.find(id)?;
        self.renderer
            .render(&RecordDetails::new(&record).with_id(id).to_string())
    }

    pub fn delete_response(&mut self, id: &str) -> Result<()> {
        let id = id.trim();
        self.invitations.delete_one(id)?;
        let status = OperationStatus::success(format!("Deleted invitation {id}"));
        self.renderer.render(&status.to_string())
    }

    pub fn clear_responses(&mut self, confirmed: bool) -> Result<()> {
        if !confirmed {
            bail!("Refusing to delete every saved invitation without --yes");
        }
        let removed = self
            .invitations
            .clear_all()
            .context("Failed to clear saved invitations")?;
        let status = OperationStatus::success(format!(
            "Cleared {removed} saved invitation{}",
            if removed == 1 { "" } else { "s" }
        ));
        self.renderer.render(&status.to_string())
    }

    pub fn export_response(&self, id: &str, output: Option<PathBuf>) -> Result<()> {
        let id = id.trim();
        let record = self.invitations.find(id)?;
        let path = output
            .unwrap_or_else(|| PathBuf::from(format!("date-invitation-response-{id}.txt")));

        fs::write(&path, ResponseSummary::new(id, &record).to_string())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let status = OperationStatus::success(format!("Saved responses to {}", path.display()));
        self.renderer.render(&status.to_string())
    }

    pub fn show_options(&self) -> Result<()> {
        self.renderer.render(&CatalogListing.to_string())
    }
}

fn today() -> Date {
    Zoned::now().date()
}

fn answer_date(wizard: &mut WizardEngine, date: Date) -> Result<()> {
    let mut selection = DateSelection::new(today());
    selection.select(date)?;
    selection.submit(wizard)?;
    Ok(())
}
