use std::sync::Arc;

use crate::compose::bridge;
use crate::compose::frame::FrameHandle;
use crate::compose::layer::{LayerConfig, LayerState};
use crate::foundation::core::{EffectiveScale, LogicalSize, Placement};
use crate::foundation::error::WeblayerResult;
use crate::scale::resolver::{ScaleDecision, ScaleResolver};
use crate::surface::config::SurfaceConfig;
use crate::surface::loader::ContentLoader;
use crate::surface::manager::{ContentSurface, SurfaceManager, SurfaceState};

/// Display scale assumed when the pipeline does not know its display.
pub const DEFAULT_DISPLAY_SCALE: f64 = 2.0;

/// Capability set shared by all effects in the pipeline.
///
/// The surrounding pipeline invokes the three phases in order: `setup` once,
/// `render` once per output frame while the effect is active, `cleanup` once.
/// A single render thread drives `render` sequentially in strict frame order.
pub trait VideoEffect {
    /// Provision resources before the first frame.
    fn setup(&mut self) -> WeblayerResult<()>;

    /// Contribute to one output frame.
    fn render(&mut self, frame: &mut FrameHandle<'_>) -> WeblayerResult<()>;

    /// Release resources. Idempotent, and never blocks on in-flight work.
    fn cleanup(&mut self);
}

/// Options for constructing a [`WebOverlayEffect`].
#[derive(Clone, Copy, Debug)]
pub struct OverlayOpts {
    /// Backing scale factor of the display the pipeline presents on. Acts
    /// only as the quality floor before the first frame is observed.
    pub display_scale: f64,
    /// Offscreen surface quality settings.
    pub surface: SurfaceConfig,
    /// GPU-facing layer configuration.
    pub layer: LayerConfig,
}

impl Default for OverlayOpts {
    fn default() -> Self {
        Self {
            display_scale: DEFAULT_DISPLAY_SCALE,
            surface: SurfaceConfig::default(),
            layer: LayerConfig::default(),
        }
    }
}

/// Effect node that renders live web content offscreen and composites it into
/// each output frame at a fixed placement.
///
/// The node is a best-effort visual overlay: every failure inside the render
/// path drops at most that frame's contribution. Dropping one frame's content
/// is preferable to stalling or crashing the shared pipeline, so nothing is
/// propagated to the caller beyond the missing output.
#[derive(Debug)]
pub struct WebOverlayEffect {
    source: String,
    placement: Placement,
    opts: OverlayOpts,
    resolver: ScaleResolver,
    manager: SurfaceManager,
    layer: LayerState,
}

impl WebOverlayEffect {
    /// Node with default options. Geometry is fixed for the node's lifetime;
    /// there is no runtime resize or reposition API.
    pub fn new(
        source: impl Into<String>,
        logical_width: f64,
        logical_height: f64,
        x: f64,
        y: f64,
        loader: Arc<dyn ContentLoader>,
    ) -> WeblayerResult<Self> {
        Self::with_opts(
            source,
            logical_width,
            logical_height,
            x,
            y,
            loader,
            OverlayOpts::default(),
        )
    }

    /// Node with explicit options.
    pub fn with_opts(
        source: impl Into<String>,
        logical_width: f64,
        logical_height: f64,
        x: f64,
        y: f64,
        loader: Arc<dyn ContentLoader>,
        opts: OverlayOpts,
    ) -> WeblayerResult<Self> {
        let size = LogicalSize::new(logical_width, logical_height)?;
        let placement = Placement::new(x, y, size)?;
        Ok(Self {
            source: source.into(),
            placement,
            resolver: ScaleResolver::new(opts.display_scale),
            manager: SurfaceManager::new(loader),
            layer: LayerState::new(),
            opts,
        })
    }

    /// Fixed placement of the surface within the output frame.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Effective scale currently recorded by the resolver.
    pub fn current_scale(&self) -> EffectiveScale {
        self.resolver.current()
    }

    /// The managed surface, while one exists.
    pub fn surface(&self) -> Option<&ContentSurface> {
        self.manager.surface()
    }

    /// Presentation layer state last committed by the compositor bridge.
    pub fn layer(&self) -> &LayerState {
        &self.layer
    }
}

impl VideoEffect for WebOverlayEffect {
    fn setup(&mut self) -> WeblayerResult<()> {
        self.manager.create(
            self.placement.size,
            self.resolver.current(),
            &self.source,
            self.opts.surface,
        )
    }

    #[tracing::instrument(skip(self, frame), fields(source = %self.source))]
    fn render(&mut self, frame: &mut FrameHandle<'_>) -> WeblayerResult<()> {
        if self.manager.state() != SurfaceState::Created {
            // Setup not run, or already destroyed. The frame proceeds without
            // this node's contribution.
            return Ok(());
        }
        if frame.pixel_width() == 0 {
            tracing::debug!("degenerate frame width; dropping this frame's contribution");
            return Ok(());
        }

        let decision = self
            .resolver
            .resolve(self.placement.size.width, frame.pixel_width());
        if let ScaleDecision::Changed(scale) = decision {
            match self.manager.reprovision(scale) {
                Ok(()) => self.resolver.record(scale),
                Err(err) => {
                    tracing::warn!(%err, "re-provision failed; dropping this frame's contribution");
                    return Ok(());
                }
            }
        }

        let Some(surface) = self.manager.surface() else {
            return Ok(());
        };
        if let Err(err) = bridge::composite(
            surface,
            &self.placement,
            &mut self.layer,
            &self.opts.layer,
            frame,
        ) {
            tracing::warn!(%err, "composite failed; dropping this frame's contribution");
        }
        Ok(())
    }

    fn cleanup(&mut self) {
        self.manager.destroy();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/node.rs"]
mod tests;
