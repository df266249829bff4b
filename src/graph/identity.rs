//! Identity tokens for graph instances.
//!
//! Handles compare graph *identity*, never graph contents. Each graph draws a
//! fresh token on construction, on `clone()` and on `clear()`, so a handle can
//! only ever be a member of the storage generation that issued it.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one graph instance (one storage generation).
///
/// Ordering is arbitrary but total and stable for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphId(u64);

impl GraphId {
    /// The identity carried by default-constructed handles. Never issued to a graph.
    pub const INVALID: GraphId = GraphId(0);

    /// Issues a new, process-unique identity.
    pub(crate) fn fresh() -> Self {
        // Relaxed is enough: only uniqueness matters, not ordering with other memory.
        let raw = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);
        debug_assert_ne!(raw, 0, "graph id counter wrapped");
        GraphId(raw)
    }

    /// Returns `false` for [`GraphId::INVALID`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Raw token value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for GraphId {
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "graph#{}", self.0)
        } else {
            f.write_str("graph#invalid")
        }
    }
}
