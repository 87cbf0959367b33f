//! mdhtml Core
//!
//! This crate provides core types, enums, and error definitions
//! for the mdhtml heading translator.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParseState`] - Snapshot of the per-character parser state
//! - [`HeadingPhase`], [`WhitespaceRun`], [`Warning`], [`Severity`] - State enums
//! - [`MdhtmlError`], [`SyntaxError`] - Error types
//! - [`Position`], [`Input`], [`Options`], [`Diagnostic`] - Shared types

pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use enums::{HeadingPhase, Severity, Warning, WhitespaceRun};
pub use error::{MdhtmlError, Result, SyntaxError, MAX_HEADING_LEVEL};
pub use state::ParseState;
pub use types::{Diagnostic, Input, Options, Position};
