//! Hourly-to-daily aggregation and feature derivation.
//!
//! This module normalizes observation timestamps, reduces each calendar date
//! to numeric means and categorical modes, fills gaps across the daily series,
//! and attaches lag and rolling temperature features.

pub mod aggregate;
pub mod features;
pub mod fill;
pub mod types;
pub mod utility;

pub use aggregate::aggregate_daily;
