//! snooze - a typed client for the Hack-or-Snooze story-sharing API
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

#[cfg(test)]
mod fixtures;
