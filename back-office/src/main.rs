//! Dashboard binary
//!
//! Opens the store, materializes the attendance sheet for the requested
//! date, and prints the day's figures as JSON.
//!
//! ```text
//! dashboard              # today
//! dashboard 2025-06-02   # a specific date
//! ```

use anyhow::Context;
use back_office::attendance::AttendanceService;
use back_office::reporting::ReportService;
use back_office::utils::{logger, time};
use back_office::{BackOfficeStore, Config};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger_with_file(Some(&config.log_level), None);

    let date = match std::env::args().nth(1) {
        Some(arg) => time::parse_date(&arg)?,
        None => chrono::Local::now().date_naive(),
    };

    config
        .ensure_work_dir()
        .with_context(|| format!("Cannot create working directory {}", config.work_dir))?;
    let store = BackOfficeStore::open(config.store_path())
        .with_context(|| format!("Cannot open store at {}", config.store_path().display()))?;

    // derive today's sheet from the weekly schedule before reporting on it
    let filled = AttendanceService::new(store.clone()).sync_for_date(date)?;
    if filled > 0 {
        tracing::info!("Auto-filled {} attendance record(s) for {}", filled, date);
    }

    let summary = ReportService::new(store).daily_summary(date)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
