use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{diagnostic, output};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::feed::SourceKind;
use crate::infrastructure::config::settings::Config;

/// Validate a configuration file without touching the feed.
///
/// Returns `Ok(false)` when the file was read but is invalid; the problem
/// has already been reported.
pub fn execute_config(path: &Path) -> Result<bool> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    let config = match Config::parse_toml(&content) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(err))) => {
            let report = diagnostic::ConfigError::from_toml(&err, &content)
                .with_help("see the [feed], [filter] and [logging] sections of the example config");
            if output::is_json() {
                output::error(&report.message);
            } else {
                eprintln!("{:?}", miette::Report::new(report));
            }
            return Ok(false);
        }
        Err(err) => {
            output::error(&err.to_string());
            return Ok(false);
        }
    };

    if output::is_json() {
        output::json_record(
            "config_check",
            json!({
                "path": path.display().to_string(),
                "valid": true,
                "source": source_label(&config),
                "poll_interval_secs": config.feed.poll_interval_secs,
                "filter": config.filter,
            }),
        );
        return Ok(true);
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Source", source_label(&config));
    output::field("Poll every", format!("{}s", config.feed.poll_interval_secs));
    output::field("Timeout", format!("{}s", config.feed.request_timeout_secs));
    output::field("Filter", &config.filter);
    output::field("Log level", &config.logging.level);

    Ok(true)
}

fn source_label(config: &Config) -> String {
    match config.feed.source {
        SourceKind::Http => config.feed.endpoint.clone(),
        SourceKind::Sample => format!("sample ({}ms latency)", config.feed.sample_latency_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_file_passes() {
        let file = write_config("[feed]\nsource = \"sample\"\n");
        assert!(execute_config(file.path()).unwrap());
    }

    #[test]
    fn syntax_error_fails_without_erroring() {
        let file = write_config("[feed\nsource = \"sample\"\n");
        assert!(!execute_config(file.path()).unwrap());
    }

    #[test]
    fn invalid_value_fails() {
        let file = write_config("[feed]\nsource = \"sample\"\npoll_interval_secs = 0\n");
        assert!(!execute_config(file.path()).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = execute_config(Path::new("/no/such/butcher.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }

    #[test]
    fn sample_source_label_mentions_latency() {
        let mut config = Config::default();
        config.feed.source = SourceKind::Sample;
        config.feed.sample_latency_ms = 250;
        assert_eq!(source_label(&config), "sample (250ms latency)");
    }
}
