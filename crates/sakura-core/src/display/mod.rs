//! Display wrappers for records, IDs and the option catalog.
//!
//! Domain types stay free of presentation logic; these newtype wrappers
//! format them for a given context.
//!
//! - [`summary`]: plain-text response summary and markdown record card
//! - [`collections`]: saved ID list and catalog listing
//! - [`datetime`]: long and short calendar date forms
//! - [`status`]: success/failure messages
//!
//! Plain-text output ([`ResponseSummary`]) is meant for copying and export;
//! everything else is markdown for the terminal renderer.

pub mod collections;
pub mod datetime;
pub mod status;
pub mod summary;

pub use collections::{CatalogListing, SavedIds};
pub use datetime::{LongDate, ShortDate};
pub use status::OperationStatus;
pub use summary::{DateTypeLabel, RecordDetails, ResponseSummary};
