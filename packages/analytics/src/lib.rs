#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived metrics for the admin console's unit, officer, and case views.
//!
//! Every calculator is a pure function over small numeric inputs. None of
//! them fail: zero denominators and missing inputs produce the lowest
//! bucket, `0`, or the status base value instead of an error.

pub mod aggregate;
pub mod config;
pub mod metrics;
pub mod progress;
pub mod stats;

use thiserror::Error;

/// Errors that can occur while loading analytics configuration.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The config file is not valid TOML for [`config::AnalyticsConfig`].
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but holds a value the calculators can't use.
    #[error("Invalid config: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },
}
