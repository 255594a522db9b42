use fern::{Dispatch, FormatCallback};
use log::Record;

use crate::modules::helpers::config::Config;

fn format_line(out: FormatCallback, message: &std::fmt::Arguments, record: &Record) {
    out.finish(format_args!(
        "{} [{}][{}] {}",
        chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
        record.target(),
        record.level(),
        message
    ))
}

pub fn setup_logging(config: &Config) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new().level(config.logging_level);

    let stdout_logger_config = Dispatch::new()
        .format(format_line)
        .chain(std::io::stdout());

    let file_logger_config = Dispatch::new()
        .format(format_line)
        .chain(fern::log_file(&config.log_file)?);

    base_config
        .chain(stdout_logger_config)
        .chain(file_logger_config)
        .apply()?;

    Ok(())
}
