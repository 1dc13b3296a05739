use super::*;

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let a = AnimationTarget::scaled(2.0).at(0.0, 100.0).with_opacity(0.0);
    let b = AnimationTarget::scaled(1.0);

    assert_eq!(AnimationTarget::lerp(&a, &b, 0.0), a);
    assert_eq!(AnimationTarget::lerp(&a, &b, 1.0), b);

    let mid = AnimationTarget::lerp(&a, &b, 0.5);
    assert_eq!(mid.scale, 1.5);
    assert_eq!(mid.translate, Vec2::new(0.0, 50.0));
    assert_eq!(mid.opacity, 0.5);
}

#[test]
fn missing_fields_take_identity_defaults() {
    let t: AnimationTarget = serde_json::from_str(r#"{ "scale": 1.3 }"#).unwrap();
    assert_eq!(t.scale, 1.3);
    assert_eq!(t.translate, Vec2::ZERO);
    assert_eq!(t.opacity, 1.0);
}

#[test]
fn clamped_limits_opacity_only() {
    let t = AnimationTarget::scaled(3.0).with_opacity(1.4).clamped();
    assert_eq!(t.opacity, 1.0);
    assert_eq!(t.scale, 3.0);
}

#[test]
fn affine_is_identity_for_default_pose() {
    assert_eq!(AnimationTarget::default().to_affine(), Affine::IDENTITY);
}
