//! Text renderings of a single invitation record.

use std::fmt;

use super::datetime::LongDate;
use crate::models::{
    activity_label, date_type_label, date_type_specific_label, food_label, InvitationRecord,
};

/// Date type label, followed by the sub-option label when one was chosen.
pub struct DateTypeLabel<'a>(pub &'a InvitationRecord);

impl fmt::Display for DateTypeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(f, "{}", date_type_label(&record.date_type))?;
        if !record.date_type_specifics.is_empty() {
            write!(
                f,
                " - {}",
                date_type_specific_label(&record.date_type, &record.date_type_specifics)
            )?;
        }
        Ok(())
    }
}

/// Plain-text response summary, suitable for copying or saving to a file.
///
/// ```rust
/// use jiff::civil::date;
/// use sakura_core::{display::ResponseSummary, InvitationRecord};
///
/// let record = InvitationRecord {
///     accepted: true,
///     date: Some(date(2025, 6, 1)),
///     date_type: "dinner".to_string(),
///     food_preference: "italian".to_string(),
///     after_date_activity: "walk".to_string(),
///     ..Default::default()
/// };
/// let text = ResponseSummary::new("k3x9a2bq", &record).to_string();
/// assert!(text.contains("- Date: Sunday, June 1st, 2025"));
/// ```
pub struct ResponseSummary<'a> {
    pub id: &'a str,
    pub record: &'a InvitationRecord,
}

impl<'a> ResponseSummary<'a> {
    pub fn new(id: &'a str, record: &'a InvitationRecord) -> Self {
        Self { id, record }
    }
}

impl fmt::Display for ResponseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f, "Date Invitation Response:")?;
        writeln!(f, "- Invitation ID: {}", self.id)?;
        match &record.date {
            Some(date) => writeln!(f, "- Date: {}", LongDate(date))?,
            None => writeln!(f, "- Date: Not selected")?,
        }
        writeln!(f, "- Date Type: {}", DateTypeLabel(record))?;
        writeln!(f, "- Food Preference: {}", food_label(&record.food_preference))?;
        write!(
            f,
            "- After Date Activity: {}",
            activity_label(&record.after_date_activity)
        )?;
        if !record.suggestions.is_empty() {
            write!(f, "\n- Additional Suggestions: {}", record.suggestions)?;
        }
        Ok(())
    }
}

/// Markdown card for a record, used by the confirmation and lookup screens.
pub struct RecordDetails<'a> {
    pub record: &'a InvitationRecord,
    pub id: Option<&'a str>,
}

impl<'a> RecordDetails<'a> {
    pub fn new(record: &'a InvitationRecord) -> Self {
        Self { record, id: None }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for RecordDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        match self.id {
            Some(id) => writeln!(f, "# Invitation {id}")?,
            None => writeln!(f, "# Our Date Details")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "**Accepted:** {}",
            if record.accepted { "Yes" } else { "No" }
        )?;
        match &record.date {
            Some(date) => writeln!(f, "**Date:** {}", LongDate(date))?,
            None => writeln!(f, "**Date:** Date not selected")?,
        }
        writeln!(f, "**Date Type:** {}", DateTypeLabel(record))?;
        writeln!(
            f,
            "**Food:** With {} food",
            food_label(&record.food_preference)
        )?;
        writeln!(
            f,
            "**After:** {}",
            activity_label(&record.after_date_activity)
        )?;
        if !record.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Suggestions")?;
            writeln!(f)?;
            writeln!(f, "{}", record.suggestions)?;
        }
        Ok(())
    }
}
