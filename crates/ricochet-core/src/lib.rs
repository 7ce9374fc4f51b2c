//! Core types and definitions for the ricochet pipeline.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, static defs, impact events, commands, outcomes, and constants.
//! It has no dependency on any host engine.

pub mod commands;
pub mod components;
pub mod constants;
pub mod defs;
pub mod enums;
pub mod environment;
pub mod events;
pub mod outcome;
pub mod types;
