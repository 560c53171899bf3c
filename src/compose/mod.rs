//! Per-frame GPU handoff: layer state, frame handle, compositor bridge.

pub(crate) mod blend;
pub(crate) mod bridge;
pub(crate) mod frame;
pub(crate) mod layer;
