use std::sync::{Arc, Mutex, MutexGuard};

use crate::foundation::core::PhysicalSize;

/// Pixels published into a surface's backing store by the content-loading
/// machinery. Premultiplied RGBA8, tightly packed, row-major.
#[derive(Clone, Debug)]
pub struct SurfaceTexture {
    /// Pixel dimensions of `data`.
    pub size: PhysicalSize,
    /// RGBA8 bytes, `size.byte_len()` long.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

#[derive(Debug)]
struct StoreInner {
    target: PhysicalSize,
    generation: u64,
    destroyed: bool,
    pixels: Option<Arc<SurfaceTexture>>,
}

/// Generation-tagged pixel store shared between the render thread and the
/// content-loading threads.
///
/// The loading machinery is the only writer of pixels; the render thread only
/// snapshots. Every publication carries the generation the loader observed
/// when it started rendering: a mismatch at publish time means the surface was
/// retargeted or destroyed in the meantime and the result is discarded, so a
/// resize or teardown never has to wait for an in-flight load.
#[derive(Debug)]
pub struct BackingStore {
    inner: Mutex<StoreInner>,
}

impl BackingStore {
    pub(crate) fn new(target: PhysicalSize) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                target,
                generation: 0,
                destroyed: false,
                pixels: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Physical size the content should currently render at.
    pub fn target_size(&self) -> PhysicalSize {
        self.lock().target
    }

    /// Generation the next publication must carry.
    ///
    /// Loaders read this before rendering; retargets and invalidation bump it.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Retarget to a new physical size, invalidating earlier generations.
    ///
    /// Previously published pixels are kept until the loader re-renders; a
    /// best-effort overlay prefers one frame of stale-size content over a
    /// blank flash.
    pub(crate) fn retarget(&self, size: PhysicalSize) {
        let mut inner = self.lock();
        inner.target = size;
        inner.generation += 1;
    }

    /// Drop pixels and permanently reject all further publications.
    ///
    /// Called on surface destruction. Loads that started before, or race
    /// with, the teardown publish into a dead store and are discarded.
    pub(crate) fn invalidate(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.destroyed = true;
        inner.pixels = None;
    }

    /// Publish pixels rendered for `generation`.
    ///
    /// Returns `false` without storing when the generation is stale or the
    /// buffer length does not match the texture's declared size.
    pub fn publish(&self, generation: u64, texture: SurfaceTexture) -> bool {
        if texture.data.len() != texture.size.byte_len() {
            tracing::debug!(
                declared = texture.size.byte_len(),
                actual = texture.data.len(),
                "rejecting publication with malformed pixel buffer"
            );
            return false;
        }

        let mut inner = self.lock();
        if inner.destroyed || generation != inner.generation {
            tracing::debug!(
                published = generation,
                current = inner.generation,
                destroyed = inner.destroyed,
                "discarding stale content publication"
            );
            return false;
        }
        inner.pixels = Some(Arc::new(texture));
        true
    }

    /// Latest published texture, if any.
    ///
    /// Safe to call from the render thread concurrently with a load in
    /// progress; `None` until the first publication lands.
    pub fn snapshot(&self) -> Option<Arc<SurfaceTexture>> {
        self.lock().pixels.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/store.rs"]
mod tests;
