use crate::compose::blend::blit_over;
use crate::compose::frame::{FrameHandle, LayerCommand};
use crate::compose::layer::{Anchor, LayerConfig, LayerState};
use crate::foundation::core::Placement;
use crate::foundation::error::WeblayerResult;
use crate::surface::manager::ContentSurface;

/// Hand the surface's current backing store to the output frame as a
/// positioned, color-managed layer.
///
/// All presentation writes (top-left anchoring, position, contents scale,
/// layer configuration) happen inside one [`LayerState::atomic_update`]
/// scope, so the frame sees them as a single unit with no independently-timed
/// animation. The call then records one [`LayerCommand`] in the frame's
/// command stream and blends the backing pixels into the shared target in
/// place; no texture copy is returned.
///
/// When the surface has not published a backing store yet (content still
/// loading, or the source was unresolvable), the call is a no-op: the frame
/// target is left bit-for-bit unchanged and no command is recorded.
pub fn composite(
    surface: &ContentSurface,
    placement: &Placement,
    layer: &mut LayerState,
    config: &LayerConfig,
    frame: &mut FrameHandle<'_>,
) -> WeblayerResult<()> {
    let Some(texture) = surface.store().snapshot() else {
        return Ok(());
    };

    let scale = surface.scale();
    layer.atomic_update(|props| {
        props.anchor = Anchor::TopLeft;
        props.position = placement.position;
        props.contents_scale = scale.0;
        props.config = *config;
    });

    let (target, commands) = frame.parts();
    blit_over(target, &texture, placement.position)?;
    commands.push(LayerCommand {
        texture: texture.size,
        position: placement.position,
        contents_scale: scale.0,
        config: *config,
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/bridge.rs"]
mod tests;
