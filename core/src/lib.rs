//! Scoring core for MBTI Snap.
//!
//! - [`AnswerLedger`]: per-session question id → letter mapping
//! - [`ScoreTally`] / [`derive`]: pure majority-rule derivation of a [`TypeCode`]
//! - [`QuestionCatalog`] / [`ResultCatalog`]: embedded, validated content
//!
//! [`TypeCode`]: snap_types::TypeCode

mod catalog;
mod ledger;
mod scoring;

pub use catalog::{CatalogError, QuestionCatalog, ResultCatalog};
pub use ledger::{AnswerLedger, LedgerSnapshot};
pub use scoring::{ScoreTally, derive};
