use super::*;
use crate::foundation::core::PhysicalSize;

fn texture(w: u32, h: u32, px: [u8; 4]) -> SurfaceTexture {
    let size = PhysicalSize {
        width: w,
        height: h,
    };
    let mut data = Vec::with_capacity(size.byte_len());
    for _ in 0..(w * h) {
        data.extend_from_slice(&px);
    }
    SurfaceTexture {
        size,
        data,
        premultiplied: true,
    }
}

#[test]
fn over_transparent_source_keeps_destination() {
    assert_eq!(over([9, 9, 9, 200], [0, 0, 0, 0]), [9, 9, 9, 200]);
}

#[test]
fn over_opaque_source_replaces_destination() {
    assert_eq!(over([9, 9, 9, 200], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_half_alpha_blends() {
    // src a=128 over opaque dst: out = src + dst * (127/255)
    let out = over([100, 100, 100, 255], [64, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 64 + 50);
}

#[test]
fn blit_writes_at_position() {
    let mut target = FrameTarget::new(8, 8);
    blit_over(&mut target, &texture(2, 2, [0, 128, 0, 255]), Point::new(3.0, 4.0)).unwrap();

    assert_eq!(target.pixel(3, 4).unwrap().g, 128);
    assert_eq!(target.pixel(4, 5).unwrap().g, 128);
    assert_eq!(target.pixel(2, 4).unwrap().a, 0);
    assert_eq!(target.pixel(5, 4).unwrap().a, 0);
    assert_eq!(target.pixel(3, 3).unwrap().a, 0);
}

#[test]
fn blit_clips_to_target_bounds() {
    let mut target = FrameTarget::new(4, 4);
    // Straddles the bottom-right corner.
    blit_over(&mut target, &texture(4, 4, [10, 0, 0, 255]), Point::new(2.0, 2.0)).unwrap();
    assert_eq!(target.pixel(3, 3).unwrap().r, 10);
    assert_eq!(target.pixel(1, 1).unwrap().a, 0);

    // Negative origin clips the top-left instead of wrapping.
    let mut target = FrameTarget::new(4, 4);
    blit_over(&mut target, &texture(4, 4, [10, 0, 0, 255]), Point::new(-2.0, -2.0)).unwrap();
    assert_eq!(target.pixel(0, 0).unwrap().r, 10);
    assert_eq!(target.pixel(1, 1).unwrap().r, 10);
    assert_eq!(target.pixel(2, 2).unwrap().a, 0);
}

#[test]
fn fully_off_target_blit_is_a_no_op() {
    let mut target = FrameTarget::new(4, 4);
    let before = target.clone();
    blit_over(&mut target, &texture(2, 2, [1, 1, 1, 255]), Point::new(100.0, 0.0)).unwrap();
    blit_over(&mut target, &texture(2, 2, [1, 1, 1, 255]), Point::new(0.0, -50.0)).unwrap();
    assert_eq!(target, before);
}

#[test]
fn mismatched_buffers_are_composite_errors() {
    let mut target = FrameTarget::new(4, 4);
    let mut bad = texture(2, 2, [0, 0, 0, 255]);
    bad.data.truncate(3);
    let err = blit_over(&mut target, &bad, Point::new(0.0, 0.0)).unwrap_err();
    assert!(matches!(err, crate::WeblayerError::Composite(_)));
}
