//! The accumulated answer record and partial updates to it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The full set of answers collected by one wizard session.
///
/// Field names serialize in camelCase so stored records stay readable by
/// anything that already reads the `date-invitation-<id>` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvitationRecord {
    /// Set only when the invitee explicitly accepts
    pub accepted: bool,

    /// Chosen calendar day, if any
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::codec::optional_date"
    )]
    pub date: Option<Date>,

    /// Tag from the date type catalog, empty when unset
    pub date_type: String,

    /// Sub-option tag, scoped to `date_type`
    pub date_type_specifics: String,

    pub food_preference: String,

    pub after_date_activity: String,

    /// Free text, may be empty
    pub suggestions: String,
}

impl InvitationRecord {
    /// Shallow-merges `update` into this record.
    ///
    /// Fields present in the update overwrite; absent fields are left alone.
    pub fn merge(&mut self, update: RecordUpdate) {
        let RecordUpdate {
            accepted,
            date,
            date_type,
            date_type_specifics,
            food_preference,
            after_date_activity,
            suggestions,
        } = update;

        if let Some(accepted) = accepted {
            self.accepted = accepted;
        }
        if let Some(date) = date {
            self.date = Some(date);
        }
        if let Some(date_type) = date_type {
            self.date_type = date_type;
        }
        if let Some(specifics) = date_type_specifics {
            self.date_type_specifics = specifics;
        }
        if let Some(food) = food_preference {
            self.food_preference = food;
        }
        if let Some(activity) = after_date_activity {
            self.after_date_activity = activity;
        }
        if let Some(suggestions) = suggestions {
            self.suggestions = suggestions;
        }
    }

    /// Returns true if the record is still at its initial values.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// A partial record produced by one wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub accepted: Option<bool>,
    pub date: Option<Date>,
    pub date_type: Option<String>,
    pub date_type_specifics: Option<String>,
    pub food_preference: Option<String>,
    pub after_date_activity: Option<String>,
    pub suggestions: Option<String>,
}

impl RecordUpdate {
    /// An update that changes nothing, used by steps without a selection.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn accepted() -> Self {
        Self {
            accepted: Some(true),
            ..Default::default()
        }
    }

    pub fn date(date: Date) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn date_type(date_type: impl Into<String>) -> Self {
        Self {
            date_type: Some(date_type.into()),
            ..Default::default()
        }
    }

    pub fn food(food: impl Into<String>) -> Self {
        Self {
            food_preference: Some(food.into()),
            ..Default::default()
        }
    }

    pub fn after_date(activity: impl Into<String>, suggestions: impl Into<String>) -> Self {
        Self {
            after_date_activity: Some(activity.into()),
            suggestions: Some(suggestions.into()),
            ..Default::default()
        }
    }

    /// Adds a date type sub-option to this update.
    pub fn with_specifics(mut self, specifics: impl Into<String>) -> Self {
        self.date_type_specifics = Some(specifics.into());
        self
    }

    /// Returns true if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
