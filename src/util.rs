use flexi_logger::{FlexiLoggerError, LoggerHandle};

// RUST_LOG wins over the given spec; keep the handle alive until exit
pub fn init_log(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    flexi_logger::Logger::try_with_env_or_str(spec)?.start()
}

pub fn log_spec(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_from_verbosity() {
        assert_eq!(log_spec(0), "info");
        assert_eq!(log_spec(1), "debug");
        assert_eq!(log_spec(2), "trace");
        assert_eq!(log_spec(9), "trace");
    }
}
