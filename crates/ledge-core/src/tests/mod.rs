//! Test module for ledge-core
//!
//! This module contains tests for:
//! - Window expand/collapse serialization (hover race, single-flight lock)
//! - Shelf model refresh, row validation, and stale-on-failure policy
//! - Title editor state machine and commit semantics
//! - Context menu descriptor and action dispatch
//! - Autostart re-registration guard
//! - Settings loading and defaults

mod controller_tests;
mod menu_tests;
