use super::*;

fn texture(w: u32, h: u32, byte: u8) -> SurfaceTexture {
    let size = PhysicalSize {
        width: w,
        height: h,
    };
    SurfaceTexture {
        size,
        data: vec![byte; size.byte_len()],
        premultiplied: true,
    }
}

#[test]
fn publish_then_snapshot() {
    let store = BackingStore::new(PhysicalSize {
        width: 4,
        height: 2,
    });
    assert!(store.snapshot().is_none());

    assert!(store.publish(store.generation(), texture(4, 2, 7)));
    let snap = store.snapshot().unwrap();
    assert_eq!(
        snap.size,
        PhysicalSize {
            width: 4,
            height: 2
        }
    );
    assert_eq!(snap.data[0], 7);
}

#[test]
fn retarget_invalidates_in_flight_generations() {
    let store = BackingStore::new(PhysicalSize {
        width: 4,
        height: 2,
    });
    let stale = store.generation();

    store.retarget(PhysicalSize {
        width: 8,
        height: 4,
    });
    assert_eq!(
        store.target_size(),
        PhysicalSize {
            width: 8,
            height: 4
        }
    );

    assert!(!store.publish(stale, texture(4, 2, 1)));
    assert!(store.snapshot().is_none());

    assert!(store.publish(store.generation(), texture(8, 4, 2)));
    assert!(store.snapshot().is_some());
}

#[test]
fn retarget_keeps_previous_pixels_until_rerender() {
    let store = BackingStore::new(PhysicalSize {
        width: 4,
        height: 2,
    });
    assert!(store.publish(store.generation(), texture(4, 2, 9)));

    store.retarget(PhysicalSize {
        width: 8,
        height: 4,
    });
    // Stale-size pixels keep compositing until the re-render lands.
    let snap = store.snapshot().unwrap();
    assert_eq!(snap.size.width, 4);
}

#[test]
fn invalidate_drops_pixels_and_blocks_late_publications() {
    let store = BackingStore::new(PhysicalSize {
        width: 4,
        height: 2,
    });
    let in_flight = store.generation();
    assert!(store.publish(in_flight, texture(4, 2, 1)));

    store.invalidate();
    assert!(store.snapshot().is_none());
    assert!(!store.publish(in_flight, texture(4, 2, 2)));
    // Even a load that starts after teardown and reads the fresh generation
    // publishes into a dead store.
    assert!(!store.publish(store.generation(), texture(4, 2, 3)));
    assert!(store.snapshot().is_none());
}

#[test]
fn malformed_buffers_are_rejected() {
    let store = BackingStore::new(PhysicalSize {
        width: 4,
        height: 2,
    });
    let bad = SurfaceTexture {
        size: PhysicalSize {
            width: 4,
            height: 2,
        },
        data: vec![0; 3],
        premultiplied: true,
    };
    assert!(!store.publish(store.generation(), bad));
}
