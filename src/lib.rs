//! Shared library for `StudyProgress`
//!
//! Tracks a student's progress through a degree program: earned against
//! expected credits, the credit-weighted grade average, and the days per
//! module still available to finish on time.

pub mod core;
pub mod logging;

pub use crate::core::{config, dashboard, metrics, models, report, store};
