// Opaque combo handles

use std::fmt;

/// Identifies a registered combo, used only to deregister it
///
/// Handles are issued in increasing order by each `ComboManager`, so sorting
/// handles sorts combos by registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComboHandle(pub(crate) u64);

impl ComboHandle {
    /// Create a handle from a raw u64
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComboHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "combo-{}", self.0)
    }
}

/// Issues fresh handles for one manager
#[derive(Debug, Default)]
pub(crate) struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub(crate) fn allocate(&mut self) -> ComboHandle {
        let handle = ComboHandle(self.next);
        self.next += 1;
        handle
    }
}
