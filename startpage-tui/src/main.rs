mod app;
mod config;
mod paths;

use std::fs::{self, File};

use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::StartpageConfig;

fn main() {
    init_logging();

    let mut config = match paths::config_file() {
        Some(path) => StartpageConfig::load(&path),
        None => StartpageConfig::default(),
    };
    if config.sections.is_empty() {
        log::debug!("[main] no sections configured, using the sample page");
        config = StartpageConfig {
            sections: StartpageConfig::sample().sections,
            ..config
        };
    }

    if let Err(e) = App::new(&config).run() {
        eprintln!("Error: {}", e);
    }
}

/// File logger in the cache dir. Logging is best-effort: without a
/// cache dir or a writable file the app just runs unlogged.
fn init_logging() {
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = File::create(&path) else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Debug, LogConfig::default(), file);
}
