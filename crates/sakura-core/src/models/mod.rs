//! Data models for invitations.
//!
//! - [`record`]: the answer record a wizard session accumulates, and the
//!   partial updates each step contributes
//! - [`catalog`]: the read-only option tables and label lookups
//! - [`step`]: the fixed, ordered list of wizard steps
//!
//! Display implementations live in [`crate::display`].

pub mod catalog;
pub mod record;
pub mod step;


pub use catalog::{
    activity_label, date_type_label, date_type_specific_label, find_date_type, food_label,
    Choice, DateTypeOption, Specifics, AFTER_DATE_ACTIVITIES, DATE_TYPE_OPTIONS, FOOD_OPTIONS,
};
pub use record::{InvitationRecord, RecordUpdate};
pub use step::WizardStep;
