use super::*;
use time::{Duration, macros::datetime};

#[test]
fn one_of_each_unit() {
    let target = datetime!(2024-12-15 00:00:00 +07:00);
    let now = target - Duration::milliseconds(90_061_000);
    assert_eq!(
        compute_remaining(target, now),
        Remaining {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        }
    );
}

#[test]
fn partial_seconds_are_floored() {
    let target = datetime!(2024-12-15 00:00:00 +07:00);
    let now = target - Duration::milliseconds(59_999);
    assert_eq!(
        compute_remaining(target, now),
        Remaining {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 59,
        }
    );
}

#[test]
fn zero_at_and_after_target() {
    let target = datetime!(2024-12-15 00:00:00 +07:00);
    assert!(compute_remaining(target, target).is_zero());
    assert!(compute_remaining(target, target + Duration::days(3)).is_zero());
}

#[test]
fn offsets_are_respected() {
    let target = datetime!(2024-12-15 00:00:00 +07:00);
    let now = datetime!(2024-12-14 16:00:00 UTC);
    assert_eq!(compute_remaining(target, now).hours, 1);
}

#[test]
fn ticks_only_while_mounted() {
    let target = datetime!(2024-12-15 00:00:00 +07:00);
    let start = target - Duration::seconds(10);
    let mut countdown = Countdown::new(target);
    let mut timers = Timers::new();

    countdown.mount(start, Millis::ZERO, &mut timers);
    countdown.mount(start, Millis::ZERO, &mut timers);
    assert_eq!(timers.len(), 1);
    assert_eq!(countdown.remaining().seconds, 10);

    let fired = timers.pop_due(Millis(1_000)).unwrap();
    assert!(countdown.on_tick(fired.id, start + Duration::seconds(1)));
    assert_eq!(countdown.remaining().seconds, 9);

    countdown.unmount(&mut timers);
    assert!(!countdown.is_mounted());
    assert!(timers.pop_due(Millis(60_000)).is_none());
    assert!(!countdown.on_tick(fired.id, start + Duration::seconds(5)));
    assert_eq!(countdown.ticks(), 1);
}
