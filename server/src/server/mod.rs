//! Inbound HTTP surface for the admin dashboard

pub mod handlers;
pub mod serve;
pub mod state;
