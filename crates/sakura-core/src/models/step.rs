//! The fixed sequence of wizard steps.

use std::{fmt, str::FromStr};

/// One screen of the invitation wizard.
///
/// The declaration order is the order the wizard walks through; it never
/// changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Invitation,
    Acceptance,
    DatePicker,
    DateType,
    FoodPreference,
    AfterDate,
    Confirmation,
    Responses,
}

impl WizardStep {
    /// Every step, in wizard order.
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Invitation,
        WizardStep::Acceptance,
        WizardStep::DatePicker,
        WizardStep::DateType,
        WizardStep::FoodPreference,
        WizardStep::AfterDate,
        WizardStep::Confirmation,
        WizardStep::Responses,
    ];

    /// Index of the terminal step.
    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    /// Returns the step at `index`, if it is in range.
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this step in the wizard.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The step that follows this one, or `None` for the terminal step.
    pub fn next(self) -> Option<Self> {
        Self::at(self.index() + 1)
    }

    /// Returns true if this step collects a selection guarded by a
    /// "can advance" check before moving on.
    pub fn has_guard(self) -> bool {
        !matches!(
            self,
            WizardStep::Invitation | WizardStep::Confirmation | WizardStep::Responses
        )
    }

    /// Heading shown for this step.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Invitation => "Invitation",
            WizardStep::Acceptance => "Will you go on a date with me?",
            WizardStep::DatePicker => "Choose a Date",
            WizardStep::DateType => "Type of Date",
            WizardStep::FoodPreference => "Food Preference",
            WizardStep::AfterDate => "After the Date",
            WizardStep::Confirmation => "It's a Date!",
            WizardStep::Responses => "Your Responses",
        }
    }

    /// Prompt line shown under the heading.
    pub fn prompt(self) -> &'static str {
        match self {
            WizardStep::Invitation => "I have something to ask you...",
            WizardStep::Acceptance => "Yes or no?",
            WizardStep::DatePicker => "When would you be available?",
            WizardStep::DateType => "What kind of date would you prefer?",
            WizardStep::FoodPreference => "What type of food would you like?",
            WizardStep::AfterDate => "What would you like to do after?",
            WizardStep::Confirmation => "Thank you for accepting my invitation",
            WizardStep::Responses => "Save this ID to look your answers up later",
        }
    }

    /// Stable string form of this step.
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Invitation => "invitation",
            WizardStep::Acceptance => "acceptance",
            WizardStep::DatePicker => "date-picker",
            WizardStep::DateType => "date-type",
            WizardStep::FoodPreference => "food-preference",
            WizardStep::AfterDate => "after-date",
            WizardStep::Confirmation => "confirmation",
            WizardStep::Responses => "responses",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == normalized)
            .ok_or_else(|| format!("Invalid wizard step: {s}"))
    }
}
