//! Core types for roster.
//!
//! A roster is a 7x7 weekly shift pattern plus seven people who rotate through
//! its rows, one row per week, counted from an anchor Monday:
//! - `date_math` for week boundaries and week differences
//! - `document` for the persisted schedule document
//! - `store` for loading and saving it over a key-value storage
//! - `rotation` for who sits on which pattern row in a given week
//! - `view` for the header/legend/table projection of a week
//! - `edit` and `navigation` for the two kinds of user action
//! - `session` for wiring all of the above together

pub mod clock;
pub mod config;
pub mod date_math;
pub mod document;
pub mod edit;
pub mod error;
pub mod navigation;
pub mod rotation;
pub mod session;
pub mod store;
pub mod view;

pub use document::{ScheduleDocument, ShiftDefinition};
pub use error::{RosterError, RosterResult};
pub use session::Session;
