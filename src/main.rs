use std::io;
use std::process::ExitCode;

use bitboard_header::{EmitError, HeaderEmitter, ShakmatySource};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Environment variable selecting the log level (off, error, warn, info, debug, trace).
const LOG_ENV: &str = "BITBOARD_HEADER_LOG";

fn log_level(value: Option<&str>) -> Result<LevelFilter, String> {
    match value {
        None => Ok(LevelFilter::Warn),
        Some(level) => level
            .trim()
            .parse()
            .map_err(|_| format!("{level}: invalid log level")),
    }
}

/// The single diagnostic printed on stderr when generation fails.
fn failure_message(error: &EmitError) -> String {
    format!("bitboard-header: {error}")
}

fn main() -> ExitCode {
    let level = match log_level(std::env::var(LOG_ENV).ok().as_deref()) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("bitboard-header: {LOG_ENV}={e}");
            return ExitCode::FAILURE;
        }
    };
    // stdout carries the header, so logs go to stderr
    let _ = WriteLogger::init(level, Config::default(), io::stderr());

    let emitter = HeaderEmitter::new(ShakmatySource::new());
    match emitter.write_to(&mut io::stdout().lock()) {
        Ok(()) => {
            log::info!("wrote {}", emitter.config().guard);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("header generation failed: {e:?}");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
