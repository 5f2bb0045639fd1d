//! Logging setup, configuration loading and progress output for the wickmark CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wickmark_lib::prelude::*;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the chart configuration.
///
/// Without a file, `--embedded` selects the embedded preset. With a file,
/// `--embedded` only overrides the variant it declares.
pub(crate) fn load_config(path: Option<&Path>, embedded: bool) -> Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(if embedded {
            ChartConfig::embedded()
        } else {
            ChartConfig::default()
        });
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ChartConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    Ok(if embedded {
        config.with_variant(SvgVariant::Embedded)
    } else {
        config
    })
}

/// Load a pattern catalog from `path`, or the built-in one.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CandleCatalog> {
    let Some(path) = path else {
        return Ok(CandleCatalog::global().clone());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    CandleCatalog::from_json(&text).with_context(|| format!("Invalid catalog {}", path.display()))
}

/// Create a spinner, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, false).unwrap();
        assert_eq!(config, ChartConfig::default());

        let config = load_config(None, true).unwrap();
        assert_eq!(config, ChartConfig::embedded());
    }

    #[test]
    fn test_load_config_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 240, "gap": 6}}"#).unwrap();

        let config = load_config(Some(file.path()), true).unwrap();
        assert_eq!(config.width, 240);
        assert_eq!(config.gap, 6);
        assert_eq!(config.height, 100);
        assert_eq!(config.variant, SvgVariant::Embedded);
    }

    #[test]
    fn test_load_config_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path()), false).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"doji": [[50, 50, 30, 70]]}}"#).unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["DOJI"]);
        assert_eq!(load_catalog(None).unwrap().len(), 4);
    }
}
