//! Common types and utilities for the weld compiler.
//!
//! This crate provides foundational types used across all weld crates:
//! - String interning (`Atom`, `Interner`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};
