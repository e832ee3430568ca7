use tbl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(DEFAULT_LOG_LEVEL)
        .env()
        .init()?;

    return Ok(());
}
