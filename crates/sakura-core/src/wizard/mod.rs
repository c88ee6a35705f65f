//! The invitation wizard.
//!
//! A [`WizardEngine`] walks through the eight steps of
//! [`WizardStep::ALL`] in order, merging each step's partial update into one
//! [`InvitationRecord`]. The session that drives the wizard owns the engine;
//! there is no global state.
//!
//! ```text
//! Invitation → Acceptance → DatePicker → DateType → FoodPreference
//!            → AfterDate → Confirmation ──save()──▶ Responses
//! ```
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use sakura_core::{Invitations, MemoryStore, RecordUpdate, WizardEngine, WizardStep};
//!
//! let mut invitations = Invitations::new(MemoryStore::new());
//! let mut wizard = WizardEngine::new();
//!
//! wizard.advance(RecordUpdate::none()).unwrap();
//! wizard.advance(RecordUpdate::accepted()).unwrap();
//! wizard.advance(RecordUpdate::date(date(2025, 6, 1))).unwrap();
//! wizard.advance(RecordUpdate::date_type("dinner")).unwrap();
//! wizard.advance(RecordUpdate::food("italian")).unwrap();
//! wizard.advance(RecordUpdate::after_date("walk", "")).unwrap();
//!
//! let id = wizard
//!     .save(&mut invitations, &mut || "k3x9a2bq".to_string())
//!     .unwrap()
//!     .to_string();
//! assert_eq!(wizard.current_step(), WizardStep::Responses);
//! assert_eq!(invitations.find(&id).unwrap().food_preference, "italian");
//! ```

use log::debug;

use crate::{
    error::{InvitationError, Result},
    ids::IdGenerator,
    invitations::Invitations,
    models::{InvitationRecord, RecordUpdate, WizardStep},
    store::KeyValueStore,
};

pub mod selection;


pub use selection::{
    AcceptanceSelection, AfterDateSelection, DateSelection, DateTypeSelection, DateWindow,
    FoodSelection, StepSelection, DECLINE_PHRASES,
};

/// One wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardEngine {
    current: WizardStep,
    record: InvitationRecord,
    last_generated_id: String,
}

impl WizardEngine {
    /// Starts a session on the first step with a blank record.
    pub fn new() -> Self {
        Self {
            current: WizardStep::Invitation,
            record: InvitationRecord::default(),
            last_generated_id: String::new(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// Position of the current step, from 0 to [`WizardStep::LAST_INDEX`].
    pub fn current_step_index(&self) -> usize {
        self.current.index()
    }

    /// The answers collected so far.
    pub fn record(&self) -> &InvitationRecord {
        &self.record
    }

    /// ID the record was saved under; empty until [`save`](Self::save)
    /// succeeds.
    pub fn last_generated_id(&self) -> &str {
        &self.last_generated_id
    }

    /// Returns true once the record has been saved.
    pub fn is_finished(&self) -> bool {
        self.current == WizardStep::Responses
    }

    /// Merges `update` into the record and moves to the next step.
    ///
    /// The update is trusted as-is; guards belong to each step's
    /// [`StepSelection`].
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::InvalidTransition` on the Confirmation step,
    /// which only leaves through [`save`](Self::save), and on the terminal
    /// Responses step.
    pub fn advance(&mut self, update: RecordUpdate) -> Result<WizardStep> {
        let next = match self.current {
            WizardStep::Confirmation | WizardStep::Responses => None,
            step => step.next(),
        };
        let Some(next) = next else {
            return Err(InvitationError::InvalidTransition {
                action: "advance".to_string(),
                step: self.current.to_string(),
            });
        };

        self.record.merge(update);
        self.current = next;
        debug!("Wizard advanced to {next}");
        Ok(next)
    }

    /// Saves the record under a fresh ID and moves to the Responses step.
    ///
    /// On failure the wizard stays on Confirmation with its record intact,
    /// so the save can be retried.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::InvalidTransition` when not on the
    /// Confirmation step, or the store error that prevented the save.
    pub fn save<S, G>(&mut self, invitations: &mut Invitations<S>, ids: &mut G) -> Result<&str>
    where
        S: KeyValueStore,
        G: IdGenerator + ?Sized,
    {
        if self.current != WizardStep::Confirmation {
            return Err(InvitationError::InvalidTransition {
                action: "save".to_string(),
                step: self.current.to_string(),
            });
        }

        let id = ids.generate();
        invitations.insert(&id, &self.record)?;

        self.last_generated_id = id;
        self.current = WizardStep::Responses;
        Ok(&self.last_generated_id)
    }
}

impl Default for WizardEngine {
    fn default() -> Self {
        Self::new()
    }
}
