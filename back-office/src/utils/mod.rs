//! Utility module - validation, logging, and time helpers

pub mod logger;
pub mod time;
pub mod validation;
