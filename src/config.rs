//! Run configuration from command line arguments and environment

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use regex::Regex;

use crate::error::{DomainSweepError, Result};
use crate::sweep::PatternSpec;
use crate::types::{
    RegistrarConfig, SweepConfig, DEFAULT_REGISTRAR_URL, DEFAULT_TLD, REQUEST_TIMEOUT_SECS,
};

pub const API_KEY_VAR: &str = "GODADDY_API_KEY";
pub const API_SECRET_VAR: &str = "GODADDY_API_SECRET";
pub const API_URL_VAR: &str = "GODADDY_API_URL";
pub const OUTPUT_DIR_VAR: &str = "DOMAIN_SWEEP_OUTPUT_DIR";

/// Letter counts at or above this make 26^n impractical to sweep
pub const LARGE_LENGTH_WARNING: usize = 6;

impl RegistrarConfig {
    /// Load credentials from the environment.
    ///
    /// Both key and secret are required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`RegistrarConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    DomainSweepError::config(format!("{} environment variable is not set", name))
                })
        };

        let api_key = required(API_KEY_VAR)?;
        let api_secret = required(API_SECRET_VAR)?;
        let base_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRAR_URL.to_string());

        Ok(Self {
            api_key,
            api_secret,
            base_url,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}

impl SweepConfig {
    /// Build from positional arguments `<letters> [tlds] [pattern]`
    /// (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let letters = args.first().ok_or_else(|| {
            DomainSweepError::config("Number of letters is required, e.g. `domain-sweep 3`")
        })?;
        let length = parse_length(letters)?;

        let tlds = match args.get(1) {
            Some(raw) => parse_tlds(raw)?,
            None => vec![DEFAULT_TLD.to_string()],
        };

        let pattern = match args.get(2) {
            Some(raw) => raw.parse::<PatternSpec>()?,
            None => PatternSpec::Auto,
        };

        if length >= LARGE_LENGTH_WARNING {
            tracing::warn!(
                length,
                "Sweeping {} letters enumerates 26^{} combinations; this may take very long",
                length,
                length
            );
        }

        let output_dir = env::var(OUTPUT_DIR_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output"));

        Ok(Self {
            length,
            tlds,
            pattern,
            output_dir,
            ..Default::default()
        })
    }
}

fn parse_length(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(crate::config_error!(
            "Number of letters must be a positive integer, got '{}'",
            raw
        )),
    }
}

/// Split a comma-separated TLD list, normalising each entry to `.tld`.
pub fn parse_tlds(raw: &str) -> Result<Vec<String>> {
    let tld_format = Regex::new(r"^\.[a-z0-9-]+(\.[a-z0-9-]+)*$")
        .map_err(|e| DomainSweepError::internal(format!("Invalid TLD regex: {}", e)))?;

    let mut tlds = Vec::new();
    for token in raw.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        let tld = if token.starts_with('.') {
            token
        } else {
            format!(".{}", token)
        };
        if !tld_format.is_match(&tld) {
            return Err(crate::validation_error!("Invalid TLD '{}'", tld));
        }
        tlds.push(tld);
    }

    if tlds.is_empty() {
        return Err(crate::config_error!("TLD list '{}' is empty", raw));
    }
    Ok(tlds)
}
