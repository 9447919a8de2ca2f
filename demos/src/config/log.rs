use log::LevelFilter;

use crate::AppError;

/// Installs the global logger; `RUST_LOG` overrides the configured level.
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use log::LevelFilter;

    use crate::config::log::init;

    #[test]
    fn test_init() {
        let noop_logger = log::logger();
        let result = init(LevelFilter::Warn);
        let logger = log::logger();
        assert!(result.is_ok(), "Should install the logger once");
        assert!(
            !ptr::eq(&*noop_logger, &*logger),
            "Should initialize global logger"
        );
        assert!(
            init(LevelFilter::Warn).is_err(),
            "Should refuse a second global logger"
        );
    }
}
