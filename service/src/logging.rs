use crate::config::{Config, RustEnv};
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ColorChoice, ConfigBuilder, TerminalMode};

/// Modules to filter out from logging when not in Trace mode.
/// The HTTP server and client stacks log every connection at debug level.
const FILTERED_MODULES: &[&str] = &["tower", "hyper", "axum", "reqwest", "rustls", "mio"];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger.
    ///
    /// Dependency logs are shown only at Trace level. Production output is
    /// never colored since it ends up in a log collector, not a terminal.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let apply_filters = Self::should_filter_dependencies(config.log_level_filter);
        let log_config = Self::build_log_config(apply_filters);

        simplelog::TermLogger::init(
            config.log_level_filter,
            log_config,
            TerminalMode::Mixed,
            Self::color_choice(&config.runtime_env),
        )
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn color_choice(env: &RustEnv) -> ColorChoice {
        match env {
            RustEnv::Production => ColorChoice::Never,
            RustEnv::Development | RustEnv::Staging => ColorChoice::Auto,
        }
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_modules_contains_expected_dependencies() {
        for module in ["tower", "hyper", "axum", "reqwest", "rustls"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn test_workspace_crates_are_not_filtered() {
        for module in ["web", "domain", "meeting_ai", "meeting_auth", "service"] {
            assert!(
                !FILTERED_MODULES.contains(&module),
                "{module} logs should never be filtered"
            );
        }
    }

    #[test]
    fn test_only_trace_shows_dependency_logs() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(Logger::should_filter_dependencies(level));
        }
    }

    #[test]
    fn test_production_output_is_uncolored() {
        assert_eq!(
            Logger::color_choice(&RustEnv::Production),
            ColorChoice::Never
        );
        assert_eq!(Logger::color_choice(&RustEnv::Staging), ColorChoice::Auto);
    }

    #[test]
    fn test_build_log_config_does_not_panic() {
        let _filtered = Logger::build_log_config(true);
        let _unfiltered = Logger::build_log_config(false);
    }
}
