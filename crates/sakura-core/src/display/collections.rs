//! Collection wrapper types for saved IDs and the option catalog.

use std::fmt;

use crate::models::{Choice, AFTER_DATE_ACTIVITIES, DATE_TYPE_OPTIONS, FOOD_OPTIONS};

/// Newtype wrapper for displaying the list of saved invitation IDs.
///
/// Handles the empty list with a friendly message instead of a bare header.
///
/// ```rust
/// use sakura_core::display::SavedIds;
///
/// let ids = SavedIds(vec!["k3x9a2bq".to_string()]);
/// assert!(ids.to_string().contains("1 invitation saved on this device"));
/// assert!(SavedIds(vec![]).to_string().contains("No saved invitations found"));
/// ```
pub struct SavedIds(pub Vec<String>);

impl fmt::Display for SavedIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved invitations found");
        }

        writeln!(
            f,
            "{} invitation{} saved on this device",
            self.0.len(),
            if self.0.len() == 1 { "" } else { "s" }
        )?;
        writeln!(f)?;
        for id in &self.0 {
            writeln!(f, "- Invitation {id}")?;
        }
        Ok(())
    }
}

/// Markdown listing of every option the wizard offers.
pub struct CatalogListing;

fn write_choices(f: &mut fmt::Formatter<'_>, choices: &[Choice]) -> fmt::Result {
    for choice in choices {
        writeln!(f, "- {} `{}`", choice.label, choice.value)?;
    }
    Ok(())
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Date Types")?;
        for option in DATE_TYPE_OPTIONS {
            writeln!(f)?;
            writeln!(f, "## {} `{}`", option.label, option.value)?;
            writeln!(f)?;
            writeln!(f, "*{}*", option.specifics.title)?;
            write_choices(f, option.specifics.options)?;
        }
        writeln!(f)?;
        writeln!(f, "# Food")?;
        writeln!(f)?;
        write_choices(f, FOOD_OPTIONS)?;
        writeln!(f)?;
        writeln!(f, "# After the Date")?;
        writeln!(f)?;
        write_choices(f, AFTER_DATE_ACTIVITIES)
    }
}
