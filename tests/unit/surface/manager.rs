use super::*;
use crate::surface::loader::BlankContent;

fn manager() -> SurfaceManager {
    SurfaceManager::new(Arc::new(BlankContent))
}

fn logical(w: f64, h: f64) -> LogicalSize {
    LogicalSize::new(w, h).unwrap()
}

#[test]
fn create_provisions_logical_times_scale() {
    let mut m = manager();
    m.create(
        logical(200.0, 100.0),
        EffectiveScale(2.0),
        "about:blank",
        SurfaceConfig::default(),
    )
    .unwrap();

    assert_eq!(m.state(), SurfaceState::Created);
    let s = m.surface().unwrap();
    assert_eq!(
        s.physical_size(),
        PhysicalSize {
            width: 400,
            height: 200
        }
    );
    assert_eq!(s.scale(), EffectiveScale(2.0));
    assert_eq!(s.source(), "about:blank");
    assert_eq!(s.store().target_size(), s.physical_size());
}

#[test]
fn create_twice_is_a_surface_error() {
    let mut m = manager();
    m.create(
        logical(10.0, 10.0),
        EffectiveScale(2.0),
        "a",
        SurfaceConfig::default(),
    )
    .unwrap();
    let err = m
        .create(
            logical(10.0, 10.0),
            EffectiveScale(2.0),
            "b",
            SurfaceConfig::default(),
        )
        .unwrap_err();
    assert!(matches!(err, WeblayerError::Surface(_)));
}

#[test]
fn no_transition_is_legal_after_destroy() {
    let mut m = manager();
    m.create(
        logical(10.0, 10.0),
        EffectiveScale(2.0),
        "a",
        SurfaceConfig::default(),
    )
    .unwrap();
    m.destroy();

    assert_eq!(m.state(), SurfaceState::Destroyed);
    assert!(
        m.create(
            logical(10.0, 10.0),
            EffectiveScale(2.0),
            "a",
            SurfaceConfig::default()
        )
        .is_err()
    );
    assert!(m.reprovision(EffectiveScale(3.0)).is_err());
}

#[test]
fn reprovision_requires_a_created_surface() {
    let mut m = manager();
    assert!(m.reprovision(EffectiveScale(2.0)).is_err());
}

#[test]
fn reprovision_updates_size_scale_and_generation_in_place() {
    let mut m = manager();
    m.create(
        logical(200.0, 100.0),
        EffectiveScale(2.0),
        "a",
        SurfaceConfig::default(),
    )
    .unwrap();
    let store = Arc::clone(m.surface().unwrap().store());
    let gen_before = store.generation();

    m.reprovision(EffectiveScale(4.0)).unwrap();

    let s = m.surface().unwrap();
    assert_eq!(m.state(), SurfaceState::Created);
    assert_eq!(
        s.physical_size(),
        PhysicalSize {
            width: 800,
            height: 400
        }
    );
    assert_eq!(s.scale(), EffectiveScale(4.0));
    // Same store, retargeted: content is not reloaded on a resolution change.
    assert!(Arc::ptr_eq(&store, s.store()));
    assert!(store.generation() > gen_before);
}

#[test]
fn oversized_surfaces_are_refused() {
    let mut m = manager();
    let err = m
        .create(
            logical(20_000.0, 10.0),
            EffectiveScale(2.0),
            "a",
            SurfaceConfig::default(),
        )
        .unwrap_err();
    assert!(matches!(err, WeblayerError::Surface(_)));

    let mut m = manager();
    m.create(
        logical(10_000.0, 10.0),
        EffectiveScale(1.0),
        "a",
        SurfaceConfig::default(),
    )
    .unwrap();
    assert!(m.reprovision(EffectiveScale(2.0)).is_err());
    // The failed resize leaves the surface as provisioned.
    assert_eq!(m.surface().unwrap().scale(), EffectiveScale(1.0));
}

#[test]
fn destroy_is_idempotent_and_safe_when_never_created() {
    let mut m = manager();
    m.destroy();
    assert_eq!(m.state(), SurfaceState::Uninitialized);

    m.create(
        logical(10.0, 10.0),
        EffectiveScale(2.0),
        "a",
        SurfaceConfig::default(),
    )
    .unwrap();
    m.destroy();
    m.destroy();
    assert_eq!(m.state(), SurfaceState::Destroyed);
    assert!(m.surface().is_none());
}
