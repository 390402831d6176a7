//! Application configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./data | Working directory holding the store and logs |
//! | LOG_LEVEL | info | tracing level filter |
//! | ENVIRONMENT | development | development \| production |

use std::path::PathBuf;

/// Back-office configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory; the store file and log files live here
    pub work_dir: String,
    /// tracing level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the embedded store file
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("back-office.redb")
    }

    /// Create the working directory if it does not exist yet
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_under_work_dir() {
        let config = Config {
            work_dir: "/tmp/back-office-test".into(),
            log_level: "info".into(),
            environment: "development".into(),
        };
        assert_eq!(
            config.store_path(),
            PathBuf::from("/tmp/back-office-test/back-office.redb")
        );
    }
}
