//! Deployment orchestration facade and normalization

pub mod facade;
pub mod normalize;
