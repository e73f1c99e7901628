//! API route handlers

pub mod configurations;
pub mod estimate;
pub mod health;
pub mod metrics;
