//! HTTP route handlers

pub mod settings;
pub mod status;
