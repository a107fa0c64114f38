//! Shared infrastructure utilities for MBTI Snap.
//!
//! - **`atomic_write`**: crash-safe file persistence (temp + rename), used when
//!   exporting result cards.

pub mod atomic_write;

pub use atomic_write::atomic_write;
