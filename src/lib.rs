//! Proposal scoring service: a heuristic analysis engine for community
//! funding proposals behind a thin HTTP facade.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
