//! Weblayer bridges a live, externally-rendered web content surface into a
//! real-time video compositing pipeline.
//!
//! The crate implements exactly one pipeline node: an effect that owns an
//! offscreen content surface and composites that surface into each output
//! frame at a fixed placement. The core problem it solves is resolution
//! synchronization: the output frame's pixel width can change at runtime
//! (scene resizes, output-resolution switches), and the surface must follow
//! without upscaling blur, wasted oversampling, or render-thread stalls.
//!
//! # Pipeline overview
//!
//! 1. **Setup**: [`WebOverlayEffect::setup`] creates the [`ContentSurface`]
//!    at the display-derived initial scale and starts the asynchronous
//!    content load through the [`ContentLoader`] seam.
//! 2. **Render** (once per output frame): the [`ScaleResolver`] re-derives
//!    the effective scale from the frame's pixel width; on drift the
//!    [`SurfaceManager`] re-provisions the surface in place; the compositor
//!    bridge then hands the surface's backing store to the frame as a
//!    positioned, color-managed layer.
//! 3. **Cleanup**: [`WebOverlayEffect::cleanup`] tears the surface down
//!    without waiting for in-flight loads.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Best-effort overlay**: every failure inside the render path drops at
//!   most that frame's contribution; the shared pipeline never sees an error.
//! - **No IO on the render thread**: content loading and re-rendering run on
//!   detached background threads and publish through a generation-tagged
//!   [`BackingStore`].
//! - **Premultiplied RGBA8** end-to-end for the CPU-visible pixel path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod effect;
mod foundation;
mod scale;
mod surface;

pub use crate::compose::bridge::composite;
pub use crate::compose::frame::{CommandStream, FrameHandle, FrameTarget, LayerCommand};
pub use crate::compose::layer::{
    Anchor, BlendMode, ColorSpace, LayerConfig, LayerProps, LayerState, PixelLayout,
};
pub use crate::effect::node::{DEFAULT_DISPLAY_SCALE, OverlayOpts, VideoEffect, WebOverlayEffect};
pub use crate::foundation::core::{
    EffectiveScale, LogicalSize, PhysicalSize, Placement, Point, Rgba8Premul,
};
pub use crate::foundation::error::{WeblayerError, WeblayerResult};
pub use crate::scale::resolver::{MIN_CONTENT_SCALE, ScaleDecision, ScaleResolver};
pub use crate::surface::config::{FilterMode, SurfaceConfig};
pub use crate::surface::loader::{BlankContent, ContentLoader, ImageContent, SolidContent};
pub use crate::surface::manager::{
    ContentSurface, MAX_SURFACE_DIM, SurfaceManager, SurfaceState,
};
pub use crate::surface::store::{BackingStore, SurfaceTexture};
