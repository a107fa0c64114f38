//! Core domain types for MBTI Snap.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod code;
mod ids;
mod letter;
mod profile;
mod question;
pub mod ui;

pub use code::{TypeCode, TypeCodeParseError};
pub use ids::QuestionId;
pub use letter::{Axis, Letter, LetterParseError};
pub use profile::ResultProfile;
pub use question::{OptionCountError, Question, QuestionOption, QuestionRecord};
