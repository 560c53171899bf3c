/// Texture filter applied when the surface's layer is scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterMode {
    /// Nearest-neighbor sampling.
    Nearest,
    /// Bilinear sampling.
    Linear,
    /// Trilinear (mipmapped) sampling.
    Trilinear,
}

/// Quality and background settings applied to the content surface at creation.
///
/// This enumerates exactly the recognized options instead of routing them
/// through string-keyed property dispatch. The defaults are the fixed set the
/// node applies to every surface: linear magnification, trilinear
/// minification, edge antialiasing, group opacity, and rasterization off so
/// vector and text content stays crisp at any scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceConfig {
    /// Composite with a transparent (non-opaque) background.
    pub transparent: bool,
    /// Let the content draw its own background fill.
    pub draws_background: bool,
    /// Filter used when the layer is scaled up.
    pub mag_filter: FilterMode,
    /// Filter used when the layer is scaled down.
    pub min_filter: FilterMode,
    /// Smooth layer edges composited off pixel boundaries.
    pub edge_antialiasing: bool,
    /// Apply opacity to the layer subtree as a single group.
    pub group_opacity: bool,
    /// Rasterize the layer at a fixed scale. Kept off: rasterized content
    /// blurs when the effective scale changes.
    pub rasterize: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            transparent: true,
            draws_background: false,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Trilinear,
            edge_antialiasing: true,
            group_opacity: true,
            rasterize: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/config.rs"]
mod tests;
