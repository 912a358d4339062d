#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Case-detail field resolution.
//!
//! Given a case record, works out which of its optional detail fields are
//! relevant for the case's crime category, drops the ones that are empty,
//! and formats the rest for display. Everything here is a pure function of
//! its arguments.

pub mod format;
pub mod resolver;

pub use resolver::{NO_DETAILS_MESSAGE, group_fields, resolve_case_fields, resolve_fields};
