use crate::foundation::core::EffectiveScale;

/// Quality floor for the content scale factor.
///
/// Prevents under-sampled, blurry content when the pipeline runs on a low-DPI
/// display. Applies only before the first frame has been observed.
pub const MIN_CONTENT_SCALE: f64 = 2.0;

/// Outcome of one per-frame scale resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleDecision {
    /// Scale matches the recorded value; the surface stays as provisioned.
    Unchanged(EffectiveScale),
    /// Scale drifted from the recorded value; the surface must be
    /// re-provisioned at the carried scale.
    Changed(EffectiveScale),
}

impl ScaleDecision {
    /// Effective scale carried by this decision.
    pub fn scale(self) -> EffectiveScale {
        match self {
            ScaleDecision::Unchanged(s) | ScaleDecision::Changed(s) => s,
        }
    }

    /// `true` when the surface must be re-provisioned.
    pub fn changed(self) -> bool {
        matches!(self, ScaleDecision::Changed(_))
    }
}

/// Reconciles the content surface scale against the actual output frame.
///
/// The display scale acts only as a floor at surface-creation time. Once a
/// frame has been observed, its pixel width is the sole authority for whether
/// the content is still at the right resolution: the resolver re-derives the
/// scale as `frame_pixel_width / logical_width` on every call and reports a
/// change only when it drifts from the previously recorded value, so a stable
/// frame size never churns the surface.
#[derive(Clone, Copy, Debug)]
pub struct ScaleResolver {
    current: f64,
}

impl ScaleResolver {
    /// Create a resolver floored at [`MIN_CONTENT_SCALE`].
    ///
    /// Non-finite `display_scale` values fall back to the floor.
    pub fn new(display_scale: f64) -> Self {
        let baseline = if display_scale.is_finite() {
            display_scale.max(MIN_CONTENT_SCALE)
        } else {
            MIN_CONTENT_SCALE
        };
        Self { current: baseline }
    }

    /// Scale currently recorded.
    ///
    /// Before any frame has been observed this is the display-derived floor;
    /// afterwards it tracks the last recorded frame-derived value.
    pub fn current(&self) -> EffectiveScale {
        EffectiveScale(self.current)
    }

    /// Compare the frame-derived scale against the recorded value.
    ///
    /// Callers must reject degenerate widths (zero, non-finite) before
    /// invoking; the resolver has no error path of its own.
    pub fn resolve(&self, logical_width: f64, frame_pixel_width: u32) -> ScaleDecision {
        let frame_derived = f64::from(frame_pixel_width) / logical_width;
        if frame_derived == self.current {
            ScaleDecision::Unchanged(EffectiveScale(self.current))
        } else {
            ScaleDecision::Changed(EffectiveScale(frame_derived))
        }
    }

    /// Record `scale` as the value in use.
    ///
    /// Called after the surface was successfully re-provisioned; a failed
    /// re-provision leaves the recorded value untouched so the next frame
    /// retries.
    pub fn record(&mut self, scale: EffectiveScale) {
        self.current = scale.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/resolver.rs"]
mod tests;
