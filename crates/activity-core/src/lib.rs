//! Shared types for the activity statistics workspace: the record model,
//! error taxonomy, CLI settings and text formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
