//! Short domain sweeping
//!
//! Enumerates every fixed-length letter combination, keeps the phonetically
//! plausible ones and checks them against the registrar in paced batches.

mod checker;
mod classifier;
mod filter;
mod generator;
mod progress;
mod sweeper;

pub use checker::{BatchChecker, Sleeper, TldOutcome, TokioSleeper};
pub use classifier::{classify, is_plausible, matches};
pub use filter::{effective_signatures, filter, resolve_patterns, PatternSpec};
pub use generator::{generate, total_combinations, CombinationGenerator};
pub use progress::TldProgress;
pub use sweeper::{SweepReport, Sweeper};

/// Lowercase letters, in enumeration order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
