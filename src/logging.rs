//! Logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise log4rs from `config_file`, or log warnings to stderr when the file is missing
/// or cannot be loaded.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => {
                log::debug!("logging configured from {config_file}");
                return Ok(());
            }
            // logger is not set yet, so stderr is the only place to report this
            Err(e) => eprintln!("failed to load {config_file}: {e}, logging warnings to stderr"),
        }
    }

    log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
    log::debug!("{config_file} not used, logging to stderr");
    Ok(())
}

fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
