use crate::foundation::core::Point;

/// Color space the layer's pixels are interpreted in when composited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorSpace {
    /// Standard sRGB.
    Srgb,
    /// Wide-gamut Display P3.
    DisplayP3,
}

/// GPU-facing pixel layout of the layer contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelLayout {
    /// 8-bit RGBA, linear encoding.
    Rgba8Unorm,
    /// 8-bit BGRA with sRGB transfer encoding.
    Bgra8UnormSrgb,
}

/// Blend mode used when the layer is composited into the frame target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Standard "source over destination" (premultiplied alpha).
    Normal,
}

/// Anchor the position coordinates are relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    /// Position names the surface's top-left corner.
    TopLeft,
    /// Position names the surface's center.
    Center,
}

/// GPU-facing layer configuration for HDR-capable, wide-gamut compositing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Color space of the layer contents.
    pub color_space: ColorSpace,
    /// Pixel layout of the layer contents.
    pub pixel_layout: PixelLayout,
    /// Blend mode into the frame target.
    pub blend: BlendMode,
    /// When `true` the layer may only be presented, never read back or
    /// blended. Kept `false` so the pipeline can composite the contents.
    pub framebuffer_only: bool,
    /// Commit layer contents inside the visual transaction instead of
    /// asynchronously, keeping frame ordering deterministic.
    pub presents_with_transaction: bool,
    /// Request extended-dynamic-range output where the display supports it.
    pub wants_extended_dynamic_range: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            color_space: ColorSpace::DisplayP3,
            pixel_layout: PixelLayout::Bgra8UnormSrgb,
            blend: BlendMode::Normal,
            framebuffer_only: false,
            presents_with_transaction: true,
            wants_extended_dynamic_range: true,
        }
    }
}

/// Presentation properties of a surface's compositing layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerProps {
    /// Anchor for `position`.
    pub anchor: Anchor,
    /// Layer origin in frame-target coordinates.
    pub position: Point,
    /// Scale mapping the layer's logical units to its physical pixels.
    pub contents_scale: f64,
    /// GPU-facing configuration.
    pub config: LayerConfig,
}

impl Default for LayerProps {
    fn default() -> Self {
        Self {
            anchor: Anchor::TopLeft,
            position: Point::ORIGIN,
            contents_scale: 1.0,
            config: LayerConfig::default(),
        }
    }
}

/// Mutable presentation state of a compositing layer, updated transactionally.
///
/// All writes go through [`LayerState::atomic_update`]: they are staged on a
/// scratch copy and committed as one unit when the scope returns, so no
/// intermediate combination of properties is ever observable and nothing can
/// animate independently between two writes of the same batch. A panic inside
/// the scope leaves the previously committed state in place.
#[derive(Clone, Debug, Default)]
pub struct LayerState {
    props: LayerProps,
    commits: u64,
}

impl LayerState {
    /// Layer with default presentation properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed presentation properties.
    pub fn props(&self) -> &LayerProps {
        &self.props
    }

    /// Number of committed atomic updates.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Stage a batch of presentation writes and commit them as one unit.
    pub fn atomic_update<R>(&mut self, f: impl FnOnce(&mut LayerProps) -> R) -> R {
        let mut staged = self.props.clone();
        let out = f(&mut staged);
        self.props = staged;
        self.commits += 1;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layer.rs"]
mod tests;
