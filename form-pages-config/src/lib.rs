//! Configuration system for the form-pages demo.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the page tab bar. It includes:
//!
//! - Window and tab bar layout settings
//! - Tab bar colour scheme
//! - Interaction tuning (scroll step, drag threshold, menu placement margins)
//! - The seed page list shown on startup

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, PageSeed, TabBarPosition};
