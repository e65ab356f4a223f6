use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record, TS_DASHES_BLANK_COLONS_DOT_BLANK};

/// Start logging to stderr.
///
/// With no `-v` flags the level comes from `RUST_LOG`, falling back to `warn`. One `-v` selects
/// `info`, two or more select `debug`. Keep the returned handle alive until the program exits.
pub fn start_logger(verbosity: u8) -> anyhow::Result<LoggerHandle> {
    let custom_format_fun = |w: &mut dyn std::io::Write,
                             now: &mut DeferredNow,
                             record: &Record|
     -> Result<(), std::io::Error> {
        write!(
            w,
            "[{}] {} {}",
            now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK),
            record.level(),
            record.args()
        )
    };

    let logger = match verbosity {
        0 => Logger::try_with_env_or_str("warn")?,
        1 => Logger::try_with_str("info")?,
        _ => Logger::try_with_str("debug")?,
    };

    let handle = logger.log_to_stderr().format(custom_format_fun).start()?;
    Ok(handle)
}
