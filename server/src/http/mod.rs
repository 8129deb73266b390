//! Outbound HTTP client for the remote deploy platform

pub mod client;
