//! Cross-screen helpers with no rendering of their own.

pub mod format;
