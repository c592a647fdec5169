//! Engine configuration: house rules and their loading.

pub mod rules;

pub use rules::{AllPassPolicy, RulesConfig};
