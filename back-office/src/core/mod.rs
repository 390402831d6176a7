//! Core module - application configuration

pub mod config;

pub use config::Config;
