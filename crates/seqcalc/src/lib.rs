//! SeqCalc-rs library: application logic for the sequence generator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
