//! Shared library module for the Relata app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 200;

pub mod action;
pub mod app;
pub mod locale;
pub mod state;
pub mod ui;
pub mod undo_redo_stack;
pub mod version;
pub mod view_model_builder;

pub use self::app::RelataApp;
