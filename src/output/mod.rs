//! Result persistence

pub mod writer;

pub use writer::FileResultWriter;

use crate::error::Result;
use indexmap::IndexMap;

/// Destination for discovered available names
pub trait ResultSink {
    /// Append names found since the last save, in discovery order.
    ///
    /// Must append, never overwrite; an empty slice is a no-op.
    fn append_available(&mut self, tld: &str, names: &[String]) -> Result<()>;

    /// Write the aggregate TLD -> names record at the end of a run.
    fn flush(&mut self, all_available: &IndexMap<String, Vec<String>>) -> Result<()>;
}
