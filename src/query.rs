//! Query Invalidation
//!
//! One `ResourceKey` per cached resource family, generalizing the single
//! reload-trigger pattern. Reads track the key's version signal and snapshot
//! its write fence; a mutation bumps the fence first (in-flight reads drop
//! their result when they land) and bumps the version once it settles,
//! success or failure, so every interested view refetches. No stronger
//! read-after-write guarantee than that full refetch.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiResult;

/// Monotonic counter separating reads-in-flight from a later write.
#[derive(Clone, Default)]
pub struct WriteFence(Arc<AtomicU32>);

impl WriteFence {
    pub fn snapshot(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn is_current(&self, snapshot: u32) -> bool {
        self.0.load(Ordering::Relaxed) == snapshot
    }
}

/// Invalidation handle for one resource family.
#[derive(Clone)]
pub struct ResourceKey {
    version: RwSignal<u32>,
    fence: WriteFence,
}

impl ResourceKey {
    fn new() -> Self {
        ResourceKey {
            version: RwSignal::new(0),
            fence: WriteFence::default(),
        }
    }

    /// Call inside a fetch effect: subscribes the effect to invalidations
    /// and returns a guard for dropping stale responses.
    pub fn track(&self) -> FetchGuard {
        self.version.get();
        FetchGuard {
            fence: self.fence.clone(),
            snapshot: self.fence.snapshot(),
        }
    }

    /// Tell in-flight reads to stand down before a conflicting write starts.
    pub fn begin_write(&self) {
        self.fence.bump();
    }

    /// The write landed (or failed): drop anything still in flight and
    /// refetch unconditionally.
    pub fn settle(&self) {
        self.fence.bump();
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Plain refetch without a preceding write (e.g. auth state changed).
    pub fn invalidate(&self) {
        self.settle();
    }
}

/// Snapshot of a key's fence, taken when a fetch started.
pub struct FetchGuard {
    fence: WriteFence,
    snapshot: u32,
}

impl FetchGuard {
    /// False once a write started against the same key after this fetch.
    pub fn still_valid(&self) -> bool {
        self.fence.is_current(self.snapshot)
    }
}

/// Invalidation keys for every resource family the UI caches.
#[derive(Clone)]
pub struct Queries {
    pub auth: ResourceKey,
    pub settings: ResourceKey,
    pub item_types: ResourceKey,
    pub items: ResourceKey,
    pub activities: ResourceKey,
    pub autocomplete: ResourceKey,
}

impl Queries {
    pub fn new() -> Self {
        Queries {
            auth: ResourceKey::new(),
            settings: ResourceKey::new(),
            item_types: ResourceKey::new(),
            items: ResourceKey::new(),
            activities: ResourceKey::new(),
            autocomplete: ResourceKey::new(),
        }
    }

    /// Schema edits ripple: forms, suggestion lists and both record lists
    /// all render from the schema.
    pub fn item_type_family(&self) -> [&ResourceKey; 4] {
        [
            &self.item_types,
            &self.autocomplete,
            &self.items,
            &self.activities,
        ]
    }
}

/// Run a mutation with settle-then-invalidate over the given keys.
pub async fn write_through<T>(
    keys: &[&ResourceKey],
    fut: impl Future<Output = ApiResult<T>>,
) -> ApiResult<T> {
    for key in keys {
        key.begin_write();
    }
    let result = fut.await;
    for key in keys {
        key.settle();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::WriteFence;

    #[test]
    fn test_fence_invalidates_earlier_snapshots() {
        let fence = WriteFence::default();
        let before = fence.snapshot();
        assert!(fence.is_current(before));

        fence.bump();
        assert!(!fence.is_current(before));
        assert!(fence.is_current(fence.snapshot()));
    }

    #[test]
    fn test_fence_snapshots_are_independent() {
        let fence = WriteFence::default();
        let a = fence.snapshot();
        fence.bump();
        let b = fence.snapshot();
        fence.bump();
        assert!(!fence.is_current(a));
        assert!(!fence.is_current(b));
    }
}
