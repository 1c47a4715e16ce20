//! Sweep pipeline: generate -> filter -> check per TLD -> persist

use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;

use super::checker::{BatchChecker, Sleeper};
use super::filter::filter;
use super::generator::generate;
use super::progress::TldProgress;
use crate::error::Result;
use crate::output::ResultSink;
use crate::registrar::AvailabilityApi;
use crate::types::{BatchProgress, SweepConfig};

/// Summary of a completed sweep
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Combinations that survived the filter (per TLD)
    pub candidates: usize,
    /// Available names per TLD, in TLD order
    pub available: IndexMap<String, Vec<String>>,
    pub stats: IndexMap<String, TldProgress>,
    pub elapsed: Duration,
}

impl SweepReport {
    pub fn total_available(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    pub fn total_failed_batches(&self) -> u64 {
        self.stats.values().map(|s| s.failed_batches).sum()
    }
}

/// Drives a full sweep over every configured TLD
pub struct Sweeper {
    config: SweepConfig,
    checker: BatchChecker,
}

impl Sweeper {
    pub fn new(
        config: SweepConfig,
        api: Arc<dyn AvailabilityApi>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        let checker = BatchChecker::new(api, sleeper, &config);
        Self { config, checker }
    }

    /// Run parameters this sweeper was built with
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Generated combinations that pass the configured pattern filter.
    pub fn candidates(&self) -> Vec<String> {
        filter(generate(self.config.length), &self.config.pattern, self.config.length)
    }

    /// Run the sweep over `candidates`, one TLD after another.
    ///
    /// The aggregate is flushed to `sink` once all TLDs are done.
    pub async fn run_with<K, F>(
        &self,
        candidates: &[String],
        sink: &mut K,
        on_progress: F,
    ) -> Result<SweepReport>
    where
        K: ResultSink + ?Sized,
        F: Fn(&BatchProgress),
    {
        let start_time = Instant::now();
        let mut available = IndexMap::new();
        let mut stats = IndexMap::new();

        for tld in &self.config.tlds {
            let outcome = self
                .checker
                .check_tld(tld, candidates, &mut *sink, &on_progress)
                .await?;
            available.insert(tld.clone(), outcome.available);
            stats.insert(tld.clone(), outcome.progress);
        }

        sink.flush(&available)?;

        Ok(SweepReport {
            candidates: candidates.len(),
            available,
            stats,
            elapsed: start_time.elapsed(),
        })
    }

    /// Generate, filter and check in one go.
    pub async fn run<K, F>(&self, sink: &mut K, on_progress: F) -> Result<SweepReport>
    where
        K: ResultSink + ?Sized,
        F: Fn(&BatchProgress),
    {
        let candidates = self.candidates();
        tracing::info!(
            length = self.config.length,
            pattern = %self.config.pattern,
            candidates = candidates.len(),
            tlds = self.config.tlds.len(),
            "Candidates prepared"
        );
        self.run_with(&candidates, sink, on_progress).await
    }
}
