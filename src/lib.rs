//! Domain Sweep - exhaustive short domain availability sweeps
//!
//! Enumerates fixed-length letter combinations, keeps the pronounceable ones
//! and checks them against a registrar's bulk availability endpoint in paced
//! batches, saving what it finds as it goes.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registrar;
pub mod sweep;
pub mod types;

// Re-export commonly used types
pub use error::{DomainSweepError, Result};
pub use types::{AvailabilityRecord, BatchProgress, CheckPhase, RegistrarConfig, SweepConfig};

// Re-export main functionality
pub use output::{FileResultWriter, ResultSink};
pub use registrar::{AvailabilityApi, GoDaddyClient};
pub use sweep::{PatternSpec, SweepReport, Sweeper, TokioSleeper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
