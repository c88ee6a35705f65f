//! Interactive wizard over a line-based reader and writer.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use jiff::civil::Date;
use log::debug;
use sakura_core::{
    display::{LongDate, OperationStatus, RecordDetails, ResponseSummary, ShortDate},
    models::{Choice, AFTER_DATE_ACTIVITIES, DATE_TYPE_OPTIONS, FOOD_OPTIONS},
    AcceptanceSelection, AfterDateSelection, DateSelection, DateTypeSelection, FoodSelection,
    IdGenerator, Invitations, KeyValueStore, RecordUpdate, StepSelection, WizardEngine,
    WizardStep,
};

use crate::renderer::TerminalRenderer;

/// Drives one [`WizardEngine`] session from typed answers.
pub struct Prompter<'a, R, W> {
    input: R,
    output: W,
    renderer: &'a TerminalRenderer,
    today: Date,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: W, renderer: &'a TerminalRenderer, today: Date) -> Self {
        Self {
            input,
            output,
            renderer,
            today,
        }
    }

    /// Runs the wizard to the end, saves the answers and returns the new ID.
    pub fn run<S, G>(&mut self, invitations: &mut Invitations<S>, ids: &mut G) -> Result<String>
    where
        S: KeyValueStore,
        G: IdGenerator + ?Sized,
    {
        let mut wizard = WizardEngine::new();

        self.heading(WizardStep::Invitation)?;
        self.ask("Press Enter to open it")?;
        wizard.advance(RecordUpdate::none())?;

        self.heading(WizardStep::Acceptance)?;
        self.acceptance()?.submit(&mut wizard)?;

        self.heading(WizardStep::DatePicker)?;
        self.date()?.submit(&mut wizard)?;

        self.heading(WizardStep::DateType)?;
        self.date_type()?.submit(&mut wizard)?;

        self.heading(WizardStep::FoodPreference)?;
        let food = self.choose(FOOD_OPTIONS)?;
        FoodSelection::new(food.value).submit(&mut wizard)?;

        self.heading(WizardStep::AfterDate)?;
        let activity = self.choose(AFTER_DATE_ACTIVITIES)?;
        let suggestions = self.ask("Any other suggestions? (optional)")?;
        AfterDateSelection::new(activity.value, suggestions).submit(&mut wizard)?;

        self.heading(WizardStep::Confirmation)?;
        let details = RecordDetails::new(wizard.record()).to_string();
        self.renderer.render_on(&mut self.output, &details)?;
        self.ask("Press Enter to save your answers")?;

        let id = loop {
            match wizard.save(invitations, ids) {
                Ok(id) => break id.to_string(),
                Err(err) if err.is_retryable() => {
                    let status =
                        OperationStatus::failure(format!("Your answers were not saved: {err}"));
                    self.renderer.render_on(&mut self.output, &status.to_string())?;
                    self.ask("Press Enter to try again")?;
                }
                Err(err) => return Err(err).context("Failed to save your responses"),
            }
        };
        debug!("Interactive session saved as {id}");

        self.heading(WizardStep::Responses)?;
        writeln!(self.output, "{}", ResponseSummary::new(&id, wizard.record()))?;
        self.output.flush()?;
        Ok(id)
    }

    fn heading(&mut self, step: WizardStep) -> Result<()> {
        let markdown = format!("\n# {}\n\n{}\n\n", step.title(), step.prompt());
        self.renderer.render_on(&mut self.output, &markdown)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input ended before the invitation was finished");
        }
        Ok(line.trim().to_string())
    }

    fn acceptance(&mut self) -> Result<AcceptanceSelection> {
        let mut acceptance = AcceptanceSelection::new();
        loop {
            let question = format!("[y] Yes  [n] {}", acceptance.decline_label());
            match self.ask(&question)?.to_lowercase().as_str() {
                "y" | "yes" => {
                    acceptance.accept();
                    return Ok(acceptance);
                }
                "n" | "no" => {
                    acceptance.decline();
                }
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }

    fn date(&mut self) -> Result<DateSelection> {
        let mut selection = DateSelection::new(self.today);
        let window = selection.window();
        writeln!(
            self.output,
            "Pick a day between {} and {}",
            ShortDate(&window.earliest),
            ShortDate(&window.latest)
        )?;
        loop {
            let answer = self.ask("Date (YYYY-MM-DD):")?;
            let Ok(date) = answer.parse::<Date>() else {
                writeln!(self.output, "'{answer}' is not a date like 2025-06-01")?;
                continue;
            };
            match selection.select(date) {
                Ok(()) => {
                    writeln!(self.output, "{}", LongDate(&date))?;
                    return Ok(selection);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn date_type(&mut self) -> Result<DateTypeSelection> {
        let labels: Vec<Choice> = DATE_TYPE_OPTIONS
            .iter()
            .map(|o| Choice {
                value: o.value,
                label: o.label,
            })
            .collect();
        let chosen = self.choose(&labels)?;
        let selection = DateTypeSelection::new(chosen.value);

        let Some(option) = DATE_TYPE_OPTIONS.iter().find(|o| o.value == chosen.value) else {
            return Ok(selection);
        };
        writeln!(self.output, "\n{} (press Enter to skip)", option.specifics.title)?;
        match self.choose_optional(option.specifics.options)? {
            Some(specific) => Ok(selection.with_specifics(specific.value)),
            None => Ok(selection),
        }
    }

    fn choose(&mut self, choices: &[Choice]) -> Result<Choice> {
        self.list(choices)?;
        loop {
            let answer = self.ask("Choose:")?;
            if let Some(choice) = pick(choices, &answer) {
                return Ok(choice);
            }
            writeln!(self.output, "Please choose one of the options above")?;
        }
    }

    fn choose_optional(&mut self, choices: &[Choice]) -> Result<Option<Choice>> {
        self.list(choices)?;
        loop {
            let answer = self.ask("Choose:")?;
            if answer.is_empty() {
                return Ok(None);
            }
            if let Some(choice) = pick(choices, &answer) {
                return Ok(Some(choice));
            }
            writeln!(self.output, "Please choose one of the options above")?;
        }
    }

    fn list(&mut self, choices: &[Choice]) -> Result<()> {
        for (number, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}. {}", number + 1, choice.label)?;
        }
        Ok(())
    }
}

/// Matches an answer by list number, tag or label.
fn pick(choices: &[Choice], answer: &str) -> Option<Choice> {
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| choices.get(i)).copied();
    }
    choices
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(answer) || c.label.eq_ignore_ascii_case(answer))
        .copied()
}
