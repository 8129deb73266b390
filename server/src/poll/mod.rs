//! Client-side polling of the deployment list

pub mod controller;
pub mod feed;
