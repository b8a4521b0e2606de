//! Scoped ownership of the global pointer/key listener set.
//!
//! While a gesture is in flight the owning column must receive move, release
//! and key events even when the pointer leaves it. The listener set is shared
//! by every column on screen, so exactly one column may own it at a time.
//!
//! Ownership is a [`ListenerGuard`]: acquiring it attaches the set, dropping
//! it detaches the set. Every terminal path of a session drops the guard, so
//! there is a single release routine instead of one per exit branch.
//! Hosts query [`ListenerRegistry::owner`] to route global events.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one day column instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(u64);

static NEXT_COLUMN_ID: AtomicU64 = AtomicU64::new(1);

impl ColumnId {
    pub fn next() -> Self {
        Self(NEXT_COLUMN_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Global events delivered while the set is attached.
pub const GLOBAL_LISTENER_KINDS: [ListenerKind; 5] = [
    ListenerKind::PointerMove,
    ListenerKind::PointerUp,
    ListenerKind::TouchMove,
    ListenerKind::TouchEnd,
    ListenerKind::KeyDown,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    TouchMove,
    TouchEnd,
    KeyDown,
}

#[derive(Debug, Default)]
struct RegistryInner {
    owner: Option<ColumnId>,
    /// Total acquisitions, for diagnostics
    acquisitions: u64,
}

/// Shared handle to the global listener set.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the global listeners for `column`.
    ///
    /// Returns `None` if another column already owns them. A column that
    /// already owns the set must drop its guard before acquiring again.
    pub fn acquire(&self, column: ColumnId) -> Option<ListenerGuard> {
        let mut inner = self.inner.lock();
        if inner.owner.is_some() {
            tracing::debug!(column = column.raw(), "Global listeners already owned");
            return None;
        }
        inner.owner = Some(column);
        inner.acquisitions += 1;
        tracing::trace!(column = column.raw(), "Attached global listeners");
        Some(ListenerGuard {
            registry: self.clone(),
            column,
        })
    }

    /// Column currently receiving global events.
    pub fn owner(&self) -> Option<ColumnId> {
        self.inner.lock().owner
    }

    /// Number of global listeners currently attached.
    pub fn active_count(&self) -> usize {
        if self.inner.lock().owner.is_some() {
            GLOBAL_LISTENER_KINDS.len()
        } else {
            0
        }
    }

    pub fn acquisitions(&self) -> u64 {
        self.inner.lock().acquisitions
    }

    fn release(&self, column: ColumnId) {
        let mut inner = self.inner.lock();
        if inner.owner == Some(column) {
            inner.owner = None;
            tracing::trace!(column = column.raw(), "Detached global listeners");
        }
    }
}

/// Attached global listeners; detached on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    column: ColumnId,
}

impl ListenerGuard {
    pub fn column(&self) -> ColumnId {
        self.column
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.release(self.column);
    }
}
