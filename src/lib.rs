//! `macro-pulse` library crate.
//!
//! Fetches a fixed set of FRED macro series and reduces each to its latest
//! value and the change since the prior observation. Failures never escape:
//! a series that cannot be read is left out, and a pass that yields nothing
//! returns `None`.
//!
//! The binary is a thin wrapper around [`app::run`].

pub mod aggregate;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod data;
pub mod env;
pub mod error;

pub use aggregate::{fetch_indicators, fetch_indicators_with};
pub use data::{IndicatorSnapshot, SeriesSummary};
pub use env::{Environment, ProcessEnv};
