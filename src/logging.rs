//! Logger setup for binaries. The library itself only emits through the
//! `log` facade and never installs a logger.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoggingError {
    #[error("could not create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Map a `-v` count onto a terminal level: warn, info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Terminal logging on stderr at `level`, plus full debug output to `file`
/// when given.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), LoggingError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }
}
