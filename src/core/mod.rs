//! Core module: entities, calculators, persistence and rendering

pub mod config;
pub mod dashboard;
pub mod metrics;
pub mod models;
pub mod report;
pub mod store;

/// Returns the current version of the `StudyProgress` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
