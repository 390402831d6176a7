//! Back-office application crate
//!
//! Staff scheduling, attendance sheets, expense logging, shift requests,
//! and daily reporting for a single restaurant. Everything persists to one
//! embedded key-value store ([`store::BackOfficeStore`]); the services are
//! the write paths the pages go through.

pub mod attendance;
pub mod core;
pub mod expenses;
pub mod reporting;
pub mod repository;
pub mod requests;
pub mod schedule;
pub mod store;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::store::BackOfficeStore;
