use super::*;

fn spec() -> AutoAdvanceSpec {
    AutoAdvanceSpec {
        from: PanelIndex(0),
        to: PanelIndex(1),
        delay_ms: 1_500,
    }
}

fn change(previous: Option<usize>, current: usize) -> PanelChange {
    PanelChange {
        previous: previous.map(PanelIndex),
        current: PanelIndex(current),
    }
}

#[test]
fn arms_on_entry_and_fires_once() {
    let mut auto = AutoAdvance::new(spec());
    let mut timers = Timers::new();

    auto.on_panel_change(change(None, 0), Millis::ZERO, &mut timers);
    assert!(auto.is_latched());
    assert_eq!(timers.len(), 1);

    assert!(timers.pop_due(Millis(1_499)).is_none());
    let fired = timers.pop_due(Millis(1_500)).unwrap();
    assert_eq!(auto.take_fired(fired.id), Some(PanelIndex(1)));
    assert_eq!(auto.take_fired(fired.id), None);
}

#[test]
fn reentry_does_not_rearm_without_explicit_rearm() {
    let mut auto = AutoAdvance::new(spec());
    let mut timers = Timers::new();

    auto.on_panel_change(change(None, 0), Millis::ZERO, &mut timers);
    let fired = timers.pop_due(Millis(1_500)).unwrap();
    auto.take_fired(fired.id);
    auto.on_panel_change(change(Some(0), 1), Millis(1_500), &mut timers);

    auto.on_panel_change(change(Some(1), 0), Millis(5_000), &mut timers);
    assert!(timers.is_empty());

    auto.on_panel_change(change(Some(0), 1), Millis(6_000), &mut timers);
    auto.rearm();
    auto.on_panel_change(change(Some(1), 0), Millis(7_000), &mut timers);
    assert_eq!(timers.next_due(), Some(Millis(8_500)));
}

#[test]
fn leaving_early_cancels_the_pending_jump() {
    let mut auto = AutoAdvance::new(spec());
    let mut timers = Timers::new();

    auto.on_panel_change(change(None, 0), Millis::ZERO, &mut timers);
    auto.on_panel_change(change(Some(0), 3), Millis(400), &mut timers);

    assert_eq!(auto.pending(), None);
    assert!(timers.is_empty());
    assert!(auto.is_latched());
}

#[test]
fn staying_on_the_source_panel_does_not_rearm() {
    let mut auto = AutoAdvance::new(spec());
    let mut timers = Timers::new();

    auto.on_panel_change(change(None, 0), Millis::ZERO, &mut timers);
    auto.on_panel_change(change(Some(0), 0), Millis(100), &mut timers);
    assert_eq!(timers.len(), 1);
}
