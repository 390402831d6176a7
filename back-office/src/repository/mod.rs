//! Repository Module
//!
//! Explicit read/write interface per entity over [`BackOfficeStore`].
//! Pages never touch the store directly; every bucket has exactly one
//! owner here.

pub mod attendance;
pub mod expense;
pub mod request;
pub mod roster;
pub mod schedule;
pub mod settings;

// Re-exports
pub use attendance::AttendanceRepository;
pub use expense::ExpenseRepository;
pub use request::RequestRepository;
pub use roster::RosterRepository;
pub use schedule::ScheduleRepository;
pub use settings::SettingsRepository;

use thiserror::Error;

use crate::store::StoreError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type RepoResult<T> = Result<T, RepoError>;
