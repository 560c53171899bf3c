use std::sync::Arc;

use crate::foundation::core::{EffectiveScale, LogicalSize, PhysicalSize};
use crate::foundation::error::{WeblayerError, WeblayerResult};
use crate::surface::config::SurfaceConfig;
use crate::surface::loader::ContentLoader;
use crate::surface::store::BackingStore;

/// Largest physical surface dimension the manager will provision.
///
/// Sizes past this are treated the way a platform refusing an in-place resize
/// is: the operation fails, the caller skips that frame's output, and the
/// pipeline keeps running.
pub const MAX_SURFACE_DIM: u32 = 16_384;

/// Offscreen rendering target for live web content.
///
/// Owned exclusively by its [`SurfaceManager`]; never shared across effect
/// nodes. The backing store is the only state visible to loader threads.
#[derive(Debug)]
pub struct ContentSurface {
    logical: LogicalSize,
    physical: PhysicalSize,
    scale: EffectiveScale,
    source: String,
    config: SurfaceConfig,
    store: Arc<BackingStore>,
}

impl ContentSurface {
    /// Logical size in content units.
    pub fn logical_size(&self) -> LogicalSize {
        self.logical
    }

    /// Physical size of the backing store target, `logical × scale`.
    pub fn physical_size(&self) -> PhysicalSize {
        self.physical
    }

    /// Device scale factor the surface is provisioned at.
    pub fn scale(&self) -> EffectiveScale {
        self.scale
    }

    /// Content source assigned at creation.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Quality settings applied at creation.
    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Shared backing store handle.
    pub fn store(&self) -> &Arc<BackingStore> {
        &self.store
    }
}

/// Lifecycle state of the managed surface.
///
/// `Uninitialized → Created → Destroyed`, with re-provisioning as a self-loop
/// on `Created`. No transition is legal after `Destroyed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    /// No surface has been created yet.
    Uninitialized,
    /// The surface exists and may be re-provisioned or destroyed.
    Created,
    /// The surface was torn down; the manager is inert.
    Destroyed,
}

/// Owns the offscreen surface lifecycle: creation at a given scale,
/// content-source assignment, in-place re-provisioning on scale changes, and
/// teardown.
///
/// Content loading is fire-and-forget: both [`ContentLoader`] hooks run on
/// detached threads and nothing in this type ever waits for them.
pub struct SurfaceManager {
    loader: Arc<dyn ContentLoader>,
    state: SurfaceState,
    surface: Option<ContentSurface>,
}

impl std::fmt::Debug for SurfaceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceManager")
            .field("loader", &"<dyn ContentLoader>")
            .field("state", &self.state)
            .field("surface", &self.surface)
            .finish()
    }
}

impl SurfaceManager {
    /// Manager that will load content through `loader`.
    pub fn new(loader: Arc<dyn ContentLoader>) -> Self {
        Self {
            loader,
            state: SurfaceState::Uninitialized,
            surface: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// The managed surface, while one exists.
    pub fn surface(&self) -> Option<&ContentSurface> {
        self.surface.as_ref()
    }

    /// Allocate the surface at `logical × scale` physical pixels and begin
    /// loading `source` in the background.
    ///
    /// Load failures are not reported; they leave the surface blank.
    pub fn create(
        &mut self,
        logical: LogicalSize,
        scale: EffectiveScale,
        source: &str,
        config: SurfaceConfig,
    ) -> WeblayerResult<()> {
        match self.state {
            SurfaceState::Uninitialized => {}
            SurfaceState::Created => {
                return Err(WeblayerError::surface("surface already created"));
            }
            SurfaceState::Destroyed => {
                return Err(WeblayerError::surface(
                    "no transition is legal after destroy",
                ));
            }
        }

        let physical = scale.apply(logical);
        check_dims(physical)?;

        let store = Arc::new(BackingStore::new(physical));
        self.surface = Some(ContentSurface {
            logical,
            physical,
            scale,
            source: source.to_owned(),
            config,
            store: Arc::clone(&store),
        });
        self.state = SurfaceState::Created;

        let loader = Arc::clone(&self.loader);
        let source = source.to_owned();
        spawn_content_task(move || loader.load(&source, store));
        tracing::debug!(?physical, scale = scale.0, "content surface created");
        Ok(())
    }

    /// Resize the backing store target and scale metadata in place.
    ///
    /// Content is not reloaded: navigation and scroll state survive a pure
    /// resolution change. The loader is asked to re-render at the new size in
    /// the background; until that publication lands, the previous pixels keep
    /// compositing.
    pub fn reprovision(&mut self, new_scale: EffectiveScale) -> WeblayerResult<()> {
        if self.state != SurfaceState::Created {
            return Err(WeblayerError::surface(
                "reprovision requires a created surface",
            ));
        }
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| WeblayerError::surface("reprovision requires a created surface"))?;

        let physical = new_scale.apply(surface.logical);
        check_dims(physical)?;

        surface.store.retarget(physical);
        surface.physical = physical;
        surface.scale = new_scale;

        let loader = Arc::clone(&self.loader);
        let store = Arc::clone(&surface.store);
        spawn_content_task(move || loader.rerender(store));
        tracing::debug!(?physical, scale = new_scale.0, "content surface re-provisioned");
        Ok(())
    }

    /// Release the surface.
    ///
    /// Idempotent and safe on a never-created manager. Never blocks: in-flight
    /// loads are invalidated through the store generation and their results
    /// discarded when they eventually publish.
    pub fn destroy(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.store.invalidate();
        }
        if self.state == SurfaceState::Created {
            self.state = SurfaceState::Destroyed;
            tracing::debug!("content surface destroyed");
        }
    }
}

fn check_dims(size: PhysicalSize) -> WeblayerResult<()> {
    if size.width == 0
        || size.height == 0
        || size.width > MAX_SURFACE_DIM
        || size.height > MAX_SURFACE_DIM
    {
        return Err(WeblayerError::surface(format!(
            "surface physical size {}x{} outside supported range",
            size.width, size.height
        )));
    }
    Ok(())
}

fn spawn_content_task(f: impl FnOnce() + Send + 'static) {
    if let Err(err) = std::thread::Builder::new()
        .name("weblayer-content".into())
        .spawn(f)
    {
        tracing::warn!(%err, "failed to spawn content task; surface stays blank");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/manager.rs"]
mod tests;
