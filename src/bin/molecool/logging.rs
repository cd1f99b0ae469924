use flexi_logger::{Logger, LoggerHandle};

/// Starts the stderr logger. `RUST_LOG` wins over the `-v` count when set.
///
/// The returned handle must stay alive for the rest of `main`.
pub fn init(verbosity: u8) -> Option<LoggerHandle> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging is disabled: {e}");
            None
        }
    }
}
