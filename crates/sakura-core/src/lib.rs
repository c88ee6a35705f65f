//! Core library for the Sakura date invitation wizard.
//!
//! This crate collects the answers of a short invitation wizard into one
//! record, saves it under a short random ID, and looks saved invitations up
//! again. Rendering the steps is left to the caller.
//!
//! # Components
//!
//! - [`store`]: the key-value interface and its SQLite and in-memory backends
//! - [`codec`]: string encoding of records and of the ID index
//! - [`ids`]: short base-36 identifiers
//! - [`wizard`]: the step sequence, step guards and the save operation
//! - [`invitations`]: saving, finding, listing and deleting invitations
//! - [`display`]: text and markdown renderings
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use sakura_core::{
//!     ids::RandomIdGenerator, AcceptanceSelection, InvitationsBuilder, RecordUpdate,
//!     StepSelection, WizardEngine,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut invitations = InvitationsBuilder::new()
//!     .with_database_path(Some("sakura.db"))
//!     .build()?;
//!
//! let mut wizard = WizardEngine::new();
//! wizard.advance(RecordUpdate::none())?;
//!
//! let mut acceptance = AcceptanceSelection::new();
//! acceptance.accept();
//! acceptance.submit(&mut wizard)?;
//!
//! wizard.advance(RecordUpdate::date(date(2025, 6, 1)))?;
//! wizard.advance(RecordUpdate::date_type("coffee").with_specifics("latte"))?;
//! wizard.advance(RecordUpdate::food("japanese"))?;
//! wizard.advance(RecordUpdate::after_date("dessert", ""))?;
//!
//! let id = wizard.save(&mut invitations, &mut RandomIdGenerator)?.to_string();
//! println!("Saved invitation {id}");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod display;
pub mod error;
pub mod ids;
pub mod invitations;
pub mod models;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use error::{InvitationError, Result};
pub use ids::{IdGenerator, RandomIdGenerator};
pub use invitations::{Invitations, InvitationsBuilder};
pub use models::{DateTypeOption, InvitationRecord, RecordUpdate, WizardStep};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use wizard::{
    AcceptanceSelection, AfterDateSelection, DateSelection, DateTypeSelection, FoodSelection,
    StepSelection, WizardEngine,
};
