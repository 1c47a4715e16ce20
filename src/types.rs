//! Core types and structures for domain-sweep

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Candidates submitted per availability query
pub const BATCH_SIZE: usize = 50;

/// Checked-count delta that forces a save of pending names
pub const SAVE_THRESHOLD: u64 = 500;

/// Pause after every batch query (ms)
pub const BATCH_DELAY_MS: u64 = 2000;

/// Registrar request timeout (s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default TLD when none is given
pub const DEFAULT_TLD: &str = ".com";

/// Default registrar base URL
pub const DEFAULT_REGISTRAR_URL: &str = "https://api.godaddy.com";

/// Availability of one fully qualified candidate, as reported by the registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub domain: String,
    pub available: bool,
}

impl AvailabilityRecord {
    pub fn new(domain: impl Into<String>, available: bool) -> Self {
        Self {
            domain: domain.into(),
            available,
        }
    }
}

/// Per-TLD checker phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckPhase {
    Idle,
    Checking,
    Draining,
    Done,
}

impl std::fmt::Display for CheckPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckPhase::Idle => write!(f, "idle"),
            CheckPhase::Checking => write!(f, "checking"),
            CheckPhase::Draining => write!(f, "draining"),
            CheckPhase::Done => write!(f, "done"),
        }
    }
}

/// Progress snapshot handed to the progress callback
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub tld: String,
    pub phase: CheckPhase,
    /// Combinations included in completed batches so far
    pub checked: u64,
    /// Combinations this TLD will check in total
    pub total: u64,
    /// Available names found so far for this TLD
    pub found: usize,
    pub failed_batches: u64,
}

impl BatchProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.checked as f64 / self.total as f64) * 100.0
        }
    }
}

/// Run parameters for one sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Letters per combination
    pub length: usize,
    /// TLD suffixes, each starting with '.', in processing order
    pub tlds: Vec<String>,
    pub pattern: crate::sweep::PatternSpec,
    pub batch_size: usize,
    pub save_threshold: u64,
    pub batch_delay: Duration,
    /// Directory for per-TLD text files and the aggregate JSON
    pub output_dir: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            length: 3,
            tlds: vec![DEFAULT_TLD.to_string()],
            pattern: crate::sweep::PatternSpec::Auto,
            batch_size: BATCH_SIZE,
            save_threshold: SAVE_THRESHOLD,
            batch_delay: Duration::from_millis(BATCH_DELAY_MS),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Registrar credentials and endpoint
#[derive(Clone)]
pub struct RegistrarConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub timeout: Duration,
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for RegistrarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrarConfig")
            .field("api_key", &format!("<{} chars>", self.api_key.len()))
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_config() {
        let config = SweepConfig::default();
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.save_threshold, 500);
        assert_eq!(config.batch_delay, Duration::from_millis(2000));
        assert_eq!(config.tlds, vec![".com".to_string()]);
    }

    #[test]
    fn test_progress_percent() {
        let progress = BatchProgress {
            tld: ".com".to_string(),
            phase: CheckPhase::Checking,
            checked: 250,
            total: 1000,
            found: 3,
            failed_batches: 0,
        };
        assert_eq!(progress.percent(), 25.0);
    }

    #[test]
    fn test_registrar_debug_redacts_secret() {
        let config = RegistrarConfig {
            api_key: "key123".to_string(),
            api_secret: "s3cr3t".to_string(),
            base_url: DEFAULT_REGISTRAR_URL.to_string(),
            timeout: Duration::from_secs(30),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cr3t"));
        assert!(!rendered.contains("key123"));
    }
}
