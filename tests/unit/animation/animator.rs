use super::*;

fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

fn table() -> TransitionTable {
    TransitionTable::new(vec![
        ElementSpec::new(
            "cover.frame",
            0,
            AnimationTarget::scaled(2.0),
            AnimationTarget::scaled(1.5),
            TimingConfig::spring(60.0, 60.0),
        ),
        ElementSpec::new(
            "invite.bottom",
            1,
            AnimationTarget::scaled(2.0).at(0.0, -100.0),
            AnimationTarget::scaled(1.2),
            TimingConfig::spring(60.0, 60.0).delayed(100),
        ),
        ElementSpec::new(
            "invite.top",
            1,
            AnimationTarget::scaled(2.0).at(0.0, 100.0),
            AnimationTarget::scaled(1.3),
            TimingConfig::spring(60.0, 60.0).delayed(700),
        ),
        ElementSpec::new(
            "invite.sticky",
            1,
            AnimationTarget::scaled(1.5).with_opacity(0.0),
            AnimationTarget::scaled(1.0),
            TimingConfig::spring(80.0, 60.0).with_reset(false),
        ),
    ])
}

#[test]
fn elements_rest_in_inactive_pose_before_first_commit() {
    let animator = Animator::new(table());
    assert_eq!(animator.current(), None);
    assert_eq!(
        animator.sample(&id("invite.top"), Millis(5_000)).unwrap(),
        AnimationTarget::scaled(2.0).at(0.0, 100.0)
    );
    assert!(animator.all_at_rest(Millis::ZERO));
}

#[test]
fn first_commit_counts_as_entry() {
    let mut animator = Animator::new(table());
    let change = animator.on_panel_change(PanelIndex(0), Millis::ZERO);
    assert!(change.entered(PanelIndex(0)));

    let m = animator.motion(&id("cover.frame")).unwrap();
    assert_eq!(m.from, AnimationTarget::scaled(2.0));
    assert_eq!(m.to, AnimationTarget::scaled(1.5));
    assert!(!animator.all_at_rest(Millis(100)));
}

#[test]
fn stagger_delays_are_relative_to_the_entry_edge() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(0), Millis::ZERO);
    animator.on_panel_change(PanelIndex(1), Millis(1_000));

    let now = Millis(1_400);
    let bottom = animator.sample(&id("invite.bottom"), now).unwrap();
    let top = animator.sample(&id("invite.top"), now).unwrap();

    assert_ne!(bottom, AnimationTarget::scaled(2.0).at(0.0, -100.0));
    assert_eq!(top, AnimationTarget::scaled(2.0).at(0.0, 100.0));

    assert_eq!(
        animator.motion(&id("invite.bottom")).unwrap().start,
        Millis(1_100)
    );
    assert_eq!(
        animator.motion(&id("invite.top")).unwrap().start,
        Millis(1_700)
    );
}

#[test]
fn reentry_restarts_from_inactive_pose() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(1), Millis::ZERO);
    animator.on_panel_change(PanelIndex(2), Millis(20_000));
    // Only part of the way back toward the inactive pose.
    animator.on_panel_change(PanelIndex(1), Millis(20_200));

    let m = animator.motion(&id("invite.bottom")).unwrap();
    assert_eq!(m.from, AnimationTarget::scaled(2.0).at(0.0, -100.0));
    assert_eq!(m.start, Millis(20_300));
}

#[test]
fn leaving_continues_from_the_current_pose() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(1), Millis::ZERO);

    let now = Millis(600);
    let mid = animator.sample(&id("invite.bottom"), now).unwrap();
    animator.on_panel_change(PanelIndex(2), now);

    let m = animator.motion(&id("invite.bottom")).unwrap();
    assert_eq!(m.from, mid);
    assert_eq!(m.to, AnimationTarget::scaled(2.0).at(0.0, -100.0));
}

#[test]
fn reset_disabled_element_continues_on_reentry() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(1), Millis::ZERO);
    animator.on_panel_change(PanelIndex(2), Millis(10_000));

    let now = Millis(10_300);
    let pose = animator.sample(&id("invite.sticky"), now).unwrap();
    animator.on_panel_change(PanelIndex(1), now);

    assert_eq!(animator.motion(&id("invite.sticky")).unwrap().from, pose);
}

#[test]
fn repeated_commit_of_same_panel_holds_motions() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(1), Millis::ZERO);
    let before = *animator.motion(&id("invite.top")).unwrap();

    let change = animator.on_panel_change(PanelIndex(1), Millis(900));
    assert!(change.is_noop());
    assert!(!change.entered(PanelIndex(1)));
    assert_eq!(*animator.motion(&id("invite.top")).unwrap(), before);
}

#[test]
fn motions_settle_on_their_targets() {
    let mut animator = Animator::new(table());
    animator.on_panel_change(PanelIndex(1), Millis::ZERO);

    let late = Millis(60_000);
    assert!(animator.all_at_rest(late));
    let top = animator.sample(&id("invite.top"), late).unwrap();
    assert!(top.distance(&AnimationTarget::scaled(1.3)) < 1e-3);
    assert_eq!(animator.targets()[&id("invite.top")], AnimationTarget::scaled(1.3));
}

#[test]
fn panel_change_edges() {
    let change = PanelChange {
        previous: Some(PanelIndex(2)),
        current: PanelIndex(3),
    };
    assert!(change.entered(PanelIndex(3)));
    assert!(change.left(PanelIndex(2)));
    assert!(!change.entered(PanelIndex(2)));
    assert!(!change.is_noop());
}
