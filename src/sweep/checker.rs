//! Batch availability checker
//!
//! Per TLD: `Idle -> Checking (per batch) -> Draining -> Done`. Batches run
//! strictly one after another with a fixed pause after each, and a failed
//! query only costs that batch its results.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::progress::TldProgress;
use crate::error::Result;
use crate::output::ResultSink;
use crate::registrar::AvailabilityApi;
use crate::types::{BatchProgress, CheckPhase, SweepConfig};

/// Source of the inter-batch pause
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock pause
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Outcome of one TLD's check
#[derive(Debug, Clone)]
pub struct TldOutcome {
    /// Available names in discovery order
    pub available: Vec<String>,
    pub progress: TldProgress,
}

/// Sequential batch checker
pub struct BatchChecker {
    api: Arc<dyn AvailabilityApi>,
    sleeper: Arc<dyn Sleeper>,
    batch_size: usize,
    save_threshold: u64,
    batch_delay: Duration,
}

impl BatchChecker {
    pub fn new(
        api: Arc<dyn AvailabilityApi>,
        sleeper: Arc<dyn Sleeper>,
        config: &SweepConfig,
    ) -> Self {
        Self {
            api,
            sleeper,
            batch_size: config.batch_size.max(1),
            save_threshold: config.save_threshold,
            batch_delay: config.batch_delay,
        }
    }

    /// Check every combination under `tld`, saving through `sink` as the
    /// save cadence demands.
    ///
    /// Query failures are logged and counted, never returned. Only sink
    /// errors abort the TLD.
    pub async fn check_tld<K, F>(
        &self,
        tld: &str,
        combinations: &[String],
        sink: &mut K,
        on_progress: &F,
    ) -> Result<TldOutcome>
    where
        K: ResultSink + ?Sized,
        F: Fn(&BatchProgress),
    {
        let candidates: Vec<String> = combinations
            .iter()
            .map(|combination| format!("{}{}", combination, tld))
            .collect();

        let mut progress = TldProgress::new(candidates.len() as u64);
        let mut available: Vec<String> = Vec::new();
        let mut pending: Vec<String> = Vec::new();

        let snapshot = |phase: CheckPhase, progress: &TldProgress, found: usize| BatchProgress {
            tld: tld.to_string(),
            phase,
            checked: progress.checked,
            total: progress.total,
            found,
            failed_batches: progress.failed_batches,
        };

        on_progress(&snapshot(CheckPhase::Idle, &progress, 0));
        tracing::info!(
            tld = %tld,
            candidates = candidates.len(),
            provider = self.api.name(),
            "Starting TLD"
        );

        for (index, batch) in candidates.chunks(self.batch_size).enumerate() {
            let (records, failed) = match self.api.check_availability(batch).await {
                Ok(records) => (records, false),
                Err(e) => {
                    tracing::warn!(
                        tld = %tld,
                        batch = index + 1,
                        size = batch.len(),
                        error = %e,
                        "Batch query failed, treating as no availability"
                    );
                    (Vec::new(), true)
                }
            };

            let before = available.len();
            for record in records.into_iter().filter(|r| r.available) {
                available.push(record.domain.clone());
                pending.push(record.domain);
            }

            progress.record_batch(batch.len(), failed);
            tracing::debug!(
                tld = %tld,
                batch = index + 1,
                found = available.len() - before,
                checked = progress.checked,
                total = progress.total,
                percent = progress.progress_percent(),
                "Batch completed"
            );

            if progress.save_due(self.save_threshold) {
                self.save(tld, &mut *sink, &mut pending, &mut progress)?;
            }

            on_progress(&snapshot(CheckPhase::Checking, &progress, available.len()));

            self.sleeper.sleep(self.batch_delay).await;
        }

        // The final batch always reaches `checked == total`, so nothing is pending here
        on_progress(&snapshot(CheckPhase::Draining, &progress, available.len()));

        on_progress(&snapshot(CheckPhase::Done, &progress, available.len()));
        tracing::info!(
            tld = %tld,
            checked = progress.checked,
            available = available.len(),
            failed_batches = progress.failed_batches,
            "Finished TLD"
        );

        Ok(TldOutcome { available, progress })
    }

    fn save<K>(
        &self,
        tld: &str,
        sink: &mut K,
        pending: &mut Vec<String>,
        progress: &mut TldProgress,
    ) -> Result<()>
    where
        K: ResultSink + ?Sized,
    {
        sink.append_available(tld, pending)?;
        tracing::info!(
            tld = %tld,
            saved = pending.len(),
            checked = progress.checked,
            "Saved progress"
        );
        pending.clear();
        progress.mark_saved();
        Ok(())
    }
}
