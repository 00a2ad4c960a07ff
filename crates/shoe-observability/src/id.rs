//! Render run identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Unique identifier for one render run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl RenderId {
    /// Generate a new render ID from the clock, the process and a sequence number.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}-{:x}", nanos, std::process::id(), seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
