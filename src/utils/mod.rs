//! Shared utilities.

pub mod share;
