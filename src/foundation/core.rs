use crate::foundation::error::{WeblayerError, WeblayerResult};

pub use kurbo::Point;

/// Size in logical content units (CSS pixels for web content).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogicalSize {
    /// Width in content units.
    pub width: f64,
    /// Height in content units.
    pub height: f64,
}

impl LogicalSize {
    /// Create a validated logical size with finite, strictly positive dimensions.
    pub fn new(width: f64, height: f64) -> WeblayerResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(WeblayerError::validation(
                "LogicalSize dimensions must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhysicalSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PhysicalSize {
    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Ratio between a surface's physical pixel resolution and its logical size.
///
/// Derived from the display scale floor at surface creation, and from the
/// actual output frame width once frames have been observed. See
/// [`crate::ScaleResolver`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct EffectiveScale(
    /// Raw scale factor.
    pub f64,
);

impl EffectiveScale {
    /// Physical size of a surface backing `logical` content at this scale.
    pub fn apply(self, logical: LogicalSize) -> PhysicalSize {
        PhysicalSize {
            width: (logical.width * self.0).round() as u32,
            height: (logical.height * self.0).round() as u32,
        }
    }
}

/// Fixed position and logical size at which a surface is composited into the
/// output frame.
///
/// The position is expressed in frame-target pixel coordinates and anchored at
/// the surface's top-left corner, never its center. Immutable after
/// construction; there is no runtime reposition API.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Top-left corner in frame-target coordinates.
    pub position: Point,
    /// Logical size of the composited surface.
    pub size: LogicalSize,
}

impl Placement {
    /// Create a validated placement with finite coordinates.
    pub fn new(x: f64, y: f64, size: LogicalSize) -> WeblayerResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(WeblayerError::validation(
                "Placement coordinates must be finite",
            ));
        }
        Ok(Self {
            position: Point::new(x, y),
            size,
        })
    }
}

/// Premultiplied RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied by alpha.
    pub r: u8,
    /// Green, premultiplied by alpha.
    pub g: u8,
    /// Blue, premultiplied by alpha.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Bytes in memory order.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
