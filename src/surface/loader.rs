use std::sync::{Arc, Mutex};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::mul_div255_u8;
use crate::surface::store::{BackingStore, SurfaceTexture};

/// Seam to the external content-loading subsystem.
///
/// Implementations asynchronously produce pixels into a surface's
/// [`BackingStore`]. The surface manager invokes both hooks on detached
/// background threads, so implementations may block internally. No completion
/// signal exists: the only observable effect of a load is an eventual
/// publication, and the render path is correct whether that has happened,
/// is pending, or silently failed.
pub trait ContentLoader: Send + Sync + 'static {
    /// Begin producing pixels for `source` into `store`.
    ///
    /// Called once per surface creation. Publications must carry the
    /// generation read from the store before rendering; stale results are
    /// discarded at publish time.
    fn load(&self, source: &str, store: Arc<BackingStore>);

    /// Re-render the already-loaded content at the store's current target
    /// size.
    ///
    /// Called after a pure resolution change. Must not reload `source`:
    /// in-page navigation and scroll state survive a resize.
    fn rerender(&self, store: Arc<BackingStore>);
}

/// Loader that never publishes pixels.
///
/// Stands in for an unresolvable content source: the surface stays blank and
/// no error is raised anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlankContent;

impl ContentLoader for BlankContent {
    fn load(&self, source: &str, _store: Arc<BackingStore>) {
        tracing::debug!(source, "content source ignored; surface stays blank");
    }

    fn rerender(&self, _store: Arc<BackingStore>) {}
}

/// Publishes a solid fill at the current target size.
///
/// Stand-in content for tests and demos; re-renders on resize like real
/// content machinery would.
#[derive(Clone, Copy, Debug)]
pub struct SolidContent {
    color: Rgba8Premul,
}

impl SolidContent {
    /// Loader filling the surface with `color`.
    pub fn new(color: Rgba8Premul) -> Self {
        Self { color }
    }

    fn fill(&self, store: &BackingStore) {
        let generation = store.generation();
        let size = store.target_size();
        let mut data = Vec::with_capacity(size.byte_len());
        for _ in 0..(size.width as usize) * (size.height as usize) {
            data.extend_from_slice(&self.color.to_bytes());
        }
        store.publish(
            generation,
            SurfaceTexture {
                size,
                data,
                premultiplied: true,
            },
        );
    }
}

impl ContentLoader for SolidContent {
    fn load(&self, _source: &str, store: Arc<BackingStore>) {
        self.fill(&store);
    }

    fn rerender(&self, store: Arc<BackingStore>) {
        self.fill(&store);
    }
}

/// Decodes an image file named by the content source as stand-in content.
///
/// The decoded image is retained so a resize re-renders from memory without
/// touching the source again, mirroring how real content machinery preserves
/// page state across pure resolution changes. Unreadable sources are silently
/// ignored and the surface stays blank.
#[derive(Debug, Default)]
pub struct ImageContent {
    decoded: Mutex<Option<image::RgbaImage>>,
}

impl ImageContent {
    /// Loader with no content decoded yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn render(&self, store: &BackingStore) {
        let decoded = self
            .decoded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        let Some(img) = decoded else {
            return;
        };

        let generation = store.generation();
        let size = store.target_size();
        if size.width == 0 || size.height == 0 {
            return;
        }

        let resized = image::imageops::resize(
            &img,
            size.width,
            size.height,
            image::imageops::FilterType::Triangle,
        );
        let mut data = resized.into_raw();
        premultiply_in_place(&mut data);
        store.publish(
            generation,
            SurfaceTexture {
                size,
                data,
                premultiplied: true,
            },
        );
    }
}

impl ContentLoader for ImageContent {
    fn load(&self, source: &str, store: Arc<BackingStore>) {
        let img = match image::open(source) {
            Ok(img) => img.to_rgba8(),
            Err(err) => {
                tracing::debug!(source, %err, "unresolvable content source; surface stays blank");
                return;
            }
        };
        *self.decoded.lock().unwrap_or_else(|e| e.into_inner()) = Some(img);
        self.render(&store);
    }

    fn rerender(&self, store: Arc<BackingStore>) {
        self.render(&store);
    }
}

fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/loader.rs"]
mod tests;
