//! Step-local selections and their "can advance" guards.
//!
//! Each guarded step keeps its own transient selection. The selection knows
//! whether it is complete enough to move on and which partial update it
//! contributes; [`WizardEngine`](super::WizardEngine) itself never validates.

use jiff::{civil::Date, ToSpan};

use super::WizardEngine;
use crate::{
    error::{InvitationError, Result},
    models::{catalog, RecordUpdate, WizardStep},
};

/// Decline labels shown on the acceptance step, by number of declines.
pub const DECLINE_PHRASES: &[&str] = &[
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you absolutely certain?",
    "This could be a mistake!",
    "Have a heart!",
    "Don't be so cold!",
    "Change of heart?",
    "Wouldn't you reconsider?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
];

/// A selection held by one guarded step.
pub trait StepSelection {
    /// The step this selection belongs to.
    fn step(&self) -> WizardStep;

    /// Whether the selection is complete enough to advance.
    fn can_advance(&self) -> bool;

    /// The partial record this selection contributes.
    fn update(&self) -> RecordUpdate;

    /// Checks the guard and advances `engine` with this selection.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::InvalidTransition` if the engine is on a
    /// different step, or `InvitationError::InvalidInput` if the guard is not
    /// satisfied.
    fn submit(&self, engine: &mut WizardEngine) -> Result<WizardStep> {
        if engine.current_step() != self.step() {
            return Err(InvitationError::InvalidTransition {
                action: format!("submit a {} selection", self.step()),
                step: engine.current_step().to_string(),
            });
        }
        if !self.can_advance() {
            return Err(InvitationError::invalid_input(self.step().as_str())
                .with_reason("Please make a selection before continuing"));
        }
        engine.advance(self.update())
    }
}

/// Yes/no answer on the acceptance step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptanceSelection {
    accepted: bool,
    declines: usize,
}

impl AcceptanceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Records a "no" and returns the label the decline option now shows.
    pub fn decline(&mut self) -> &'static str {
        self.declines += 1;
        self.decline_label()
    }

    /// Label for the decline option after the declines so far.
    pub fn decline_label(&self) -> &'static str {
        let last = DECLINE_PHRASES.len() - 1;
        DECLINE_PHRASES[self.declines.min(last)]
    }

    pub fn declines(&self) -> usize {
        self.declines
    }
}

impl StepSelection for AcceptanceSelection {
    fn step(&self) -> WizardStep {
        WizardStep::Acceptance
    }

    fn can_advance(&self) -> bool {
        self.accepted
    }

    fn update(&self) -> RecordUpdate {
        RecordUpdate::accepted()
    }
}

/// The range of days the date step offers: tomorrow through three months
/// from today, inclusive.
///
/// The latest day keeps today's day of the month. When the target month is
/// shorter, the surplus days spill into the following month, so November 30
/// reaches March 2 (or March 1 in a leap year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub earliest: Date,
    pub latest: Date,
}

impl DateWindow {
    pub fn starting(today: Date) -> Self {
        Self {
            earliest: today.saturating_add(1.day()),
            latest: months_later(today, 3),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.earliest <= date && date <= self.latest
    }
}

/// Moves `months` ahead, letting a day past the end of the month roll over.
fn months_later(today: Date, months: i8) -> Date {
    let first = today.first_of_month().saturating_add(months.months());
    first.saturating_add(i64::from(today.day() - 1).days())
}

/// Chosen day on the date step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelection {
    window: DateWindow,
    date: Option<Date>,
}

impl DateSelection {
    /// Starts an empty selection whose window is anchored at `today`.
    pub fn new(today: Date) -> Self {
        Self {
            window: DateWindow::starting(today),
            date: None,
        }
    }

    /// Selects `date`.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::InvalidInput` if `date` is outside the window;
    /// the previous selection is kept.
    pub fn select(&mut self, date: Date) -> Result<()> {
        if !self.window.contains(date) {
            return Err(InvitationError::invalid_input("date").with_reason(format!(
                "Pick a day between {} and {}",
                self.window.earliest, self.window.latest
            )));
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }
}

impl StepSelection for DateSelection {
    fn step(&self) -> WizardStep {
        WizardStep::DatePicker
    }

    fn can_advance(&self) -> bool {
        self.date.is_some_and(|d| self.window.contains(d))
    }

    fn update(&self) -> RecordUpdate {
        self.date.map(RecordUpdate::date).unwrap_or_default()
    }
}

/// Date type, and optionally one of its sub-options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTypeSelection {
    pub date_type: String,
    pub specifics: String,
}

impl DateTypeSelection {
    pub fn new(date_type: impl Into<String>) -> Self {
        Self {
            date_type: date_type.into(),
            specifics: String::new(),
        }
    }

    pub fn with_specifics(mut self, specifics: impl Into<String>) -> Self {
        self.specifics = specifics.into();
        self
    }
}

impl StepSelection for DateTypeSelection {
    fn step(&self) -> WizardStep {
        WizardStep::DateType
    }

    /// A sub-option, when given, must belong to the chosen date type.
    fn can_advance(&self) -> bool {
        !self.date_type.is_empty()
            && (self.specifics.is_empty()
                || catalog::is_valid_specific(&self.date_type, &self.specifics))
    }

    fn update(&self) -> RecordUpdate {
        let update = RecordUpdate::date_type(self.date_type.clone());
        if self.specifics.is_empty() {
            update
        } else {
            update.with_specifics(self.specifics.clone())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSelection {
    pub food: String,
}

impl FoodSelection {
    pub fn new(food: impl Into<String>) -> Self {
        Self { food: food.into() }
    }
}

impl StepSelection for FoodSelection {
    fn step(&self) -> WizardStep {
        WizardStep::FoodPreference
    }

    fn can_advance(&self) -> bool {
        !self.food.is_empty()
    }

    fn update(&self) -> RecordUpdate {
        RecordUpdate::food(self.food.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AfterDateSelection {
    pub activity: String,
    pub suggestions: String,
}

impl AfterDateSelection {
    pub fn new(activity: impl Into<String>, suggestions: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            suggestions: suggestions.into(),
        }
    }
}

impl StepSelection for AfterDateSelection {
    fn step(&self) -> WizardStep {
        WizardStep::AfterDate
    }

    /// Suggestions are optional; only the activity is required.
    fn can_advance(&self) -> bool {
        !self.activity.is_empty()
    }

    fn update(&self) -> RecordUpdate {
        RecordUpdate::after_date(self.activity.clone(), self.suggestions.clone())
    }
}
