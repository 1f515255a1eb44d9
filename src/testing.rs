//! Shared contract checks for boundary engines.
pub mod engine_contract;
