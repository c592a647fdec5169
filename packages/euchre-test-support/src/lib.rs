//! Shared helpers for euchre integration tests.

pub mod logging;
