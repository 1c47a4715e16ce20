//! Registrar integration - bulk availability queries

pub mod godaddy;

pub use godaddy::GoDaddyClient;

use crate::error::Result;
use crate::types::AvailabilityRecord;
use async_trait::async_trait;

/// A service that answers "which of these names can be registered?"
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    /// Query availability for one batch of fully qualified names.
    ///
    /// Records come back in the order the registrar lists them.
    async fn check_availability(&self, batch: &[String]) -> Result<Vec<AvailabilityRecord>>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
