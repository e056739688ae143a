//! HTTP handlers

pub mod analyze;
pub mod health;
pub mod page;
pub mod render;
