// Wed Feb 04 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ColoredLogger {
    level: LevelFilter,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                format!("[{}]", record.target())
            } else {
                String::new()
            };

            eprintln!("{} {} {}", self.format_level(record.level()), target.dimmed(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = Box::new(ColoredLogger::new(level));
    log::set_boxed_logger(logger).ok();
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_logger_installs() {
        // set_boxed_logger needs the log crate's std feature; this exercises
        // the whole install path and tolerates an already-installed logger.
        init_logger(true);
        init_logger(false);
        log::debug!("logger install smoke check");
        assert!(log::max_level() <= LevelFilter::Debug);
    }

    #[test]
    fn test_level_tags_are_distinct() {
        let logger = ColoredLogger::new(LevelFilter::Trace);
        let tags: Vec<String> = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ]
        .iter()
        .map(|&l| logger.format_level(l).to_string())
        .collect();

        for (i, tag) in tags.iter().enumerate() {
            for other in &tags[i + 1..] {
                assert_ne!(tag, other);
            }
        }
    }
}

