//! Table configuration consumed by the rules engine.

pub mod rules;

pub use rules::RulesConfig;
