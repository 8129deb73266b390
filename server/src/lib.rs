//! Launchpad Library
//!
//! Core modules for the Launchpad deploy console service.

pub mod config;
pub mod deploy;
pub mod errors;
pub mod http;
pub mod logs;
pub mod models;
pub mod poll;
pub mod server;
pub mod utils;
