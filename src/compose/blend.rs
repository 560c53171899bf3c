use crate::compose::frame::FrameTarget;
use crate::foundation::core::Point;
use crate::foundation::error::{WeblayerError, WeblayerResult};
use crate::foundation::math::mul_div255_u8;
use crate::surface::store::SurfaceTexture;

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Blend `texture` into `target` at `position` with source-over, clipped to
/// the target bounds. Fully off-target placements are a no-op.
pub(crate) fn blit_over(
    target: &mut FrameTarget,
    texture: &SurfaceTexture,
    position: Point,
) -> WeblayerResult<()> {
    let expected = (target.width as usize)
        .saturating_mul(target.height as usize)
        .saturating_mul(4);
    if target.data.len() != expected {
        return Err(WeblayerError::composite(
            "frame target buffer does not match its declared size",
        ));
    }
    if texture.data.len() != texture.size.byte_len() {
        return Err(WeblayerError::composite(
            "surface texture buffer does not match its declared size",
        ));
    }

    let tw = i64::from(target.width);
    let th = i64::from(target.height);
    let sw = i64::from(texture.size.width);
    let sh = i64::from(texture.size.height);

    let x0 = position.x.round() as i64;
    let y0 = position.y.round() as i64;

    let dst_x0 = x0.max(0);
    let dst_y0 = y0.max(0);
    let dst_x1 = (x0 + sw).min(tw);
    let dst_y1 = (y0 + sh).min(th);
    if dst_x0 >= dst_x1 || dst_y0 >= dst_y1 {
        return Ok(());
    }

    for dy in dst_y0..dst_y1 {
        let sy = dy - y0;
        let src_row = ((sy * sw) * 4) as usize;
        let dst_row = ((dy * tw) * 4) as usize;
        for dx in dst_x0..dst_x1 {
            let sx = dx - x0;
            let si = src_row + (sx * 4) as usize;
            let di = dst_row + (dx * 4) as usize;
            let s = [
                texture.data[si],
                texture.data[si + 1],
                texture.data[si + 2],
                texture.data[si + 3],
            ];
            let d = [
                target.data[di],
                target.data[di + 1],
                target.data[di + 2],
                target.data[di + 3],
            ];
            target.data[di..di + 4].copy_from_slice(&over(d, s));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
