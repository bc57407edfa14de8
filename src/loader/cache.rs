// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Idempotent, refreshable bundle cache.
//!
//! Each key has a slot holding the current bundle (if any) and the in-flight
//! load (if any). In-flight loads are `Shared` futures, so every caller asking
//! for a key while it loads awaits the same load and gets the same `Arc`.
//!
//! A completed load only settles into its slot if it is still the slot's
//! newest load. A slow load that a refresh superseded, or whose key was
//! evicted, finishes for its own awaiters and is otherwise forgotten.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::{BundleKey, BundleLoader};
use crate::error::LoadError;
use crate::index::IndexBundle;

type LoadResult = Result<Arc<IndexBundle>, LoadError>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

struct Pending {
    generation: u64,
    load: SharedLoad,
}

#[derive(Default)]
struct Slot {
    current: Option<Arc<IndexBundle>>,
    pending: Option<Pending>,
}

/// Caller-owned cache of bundles keyed by `(version, context)`.
pub struct BundleCache<L> {
    loader: L,
    slots: Mutex<HashMap<BundleKey, Slot>>,
    generation: AtomicU64,
}

impl<L: BundleLoader> BundleCache<L> {
    pub fn new(loader: L) -> Self {
        BundleCache {
            loader,
            slots: Mutex::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// The cached bundle for `key`, loading it if needed.
    ///
    /// Concurrent calls for a key that is not cached trigger one load.
    pub async fn get(&self, key: &BundleKey) -> LoadResult {
        let (generation, load) = {
            let mut slots = self.slots.lock();
            let slot = slots.entry(key.clone()).or_default();
            if let Some(bundle) = &slot.current {
                return Ok(Arc::clone(bundle));
            }
            match &slot.pending {
                Some(pending) => {
                    debug!(version = %key.version, context = ?key.context, "joining in-flight load");
                    (pending.generation, pending.load.clone())
                }
                None => self.start(key, slot),
            }
        };
        let result = load.await;
        self.settle(key, generation, &result);
        result
    }

    /// Load a fresh copy of `key`, keeping the current one until it succeeds.
    ///
    /// On failure the previous bundle stays in place and the error is
    /// returned.
    pub async fn refresh(&self, key: &BundleKey) -> LoadResult {
        let (generation, load) = {
            let mut slots = self.slots.lock();
            let slot = slots.entry(key.clone()).or_default();
            self.start(key, slot)
        };
        let result = load.await;
        self.settle(key, generation, &result);
        result
    }

    /// The current bundle for `key`, without loading.
    pub fn peek(&self, key: &BundleKey) -> Option<Arc<IndexBundle>> {
        self.slots
            .lock()
            .get(key)
            .and_then(|slot| slot.current.clone())
    }

    /// Drop `key`. Returns whether a bundle was cached.
    pub fn evict(&self, key: &BundleKey) -> bool {
        let removed = self.slots.lock().remove(key);
        debug!(version = %key.version, context = ?key.context, "evicted bundle");
        removed.is_some_and(|slot| slot.current.is_some())
    }

    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    /// Number of keys with a cached bundle.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.current.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn start(&self, key: &BundleKey, slot: &mut Slot) -> (u64, SharedLoad) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let load = self
            .loader
            .load(key)
            .map(|result| result.map(Arc::new))
            .boxed()
            .shared();
        debug!(version = %key.version, context = ?key.context, generation, "starting bundle load");
        slot.pending = Some(Pending {
            generation,
            load: load.clone(),
        });
        (generation, load)
    }

    fn settle(&self, key: &BundleKey, generation: u64, result: &LoadResult) {
        let mut slots = self.slots.lock();
        let Some(slot) = slots.get_mut(key) else {
            return;
        };
        if slot.pending.as_ref().map(|p| p.generation) != Some(generation) {
            return;
        }
        slot.pending = None;
        match result {
            Ok(bundle) => slot.current = Some(Arc::clone(bundle)),
            Err(err) => {
                let kept_previous = slot.current.is_some();
                warn!(
                    version = %key.version,
                    context = ?key.context,
                    kept_previous,
                    error = %err,
                    "bundle load failed"
                );
                if !kept_previous {
                    slots.remove(key);
                }
            }
        }
    }
}

impl<L> std::fmt::Debug for BundleCache<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.lock();
        f.debug_struct("BundleCache")
            .field("keys", &slots.len())
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}
