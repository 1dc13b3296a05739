//! Controller for an animated, panel-by-panel wedding invitation page.
//!
//! The page is a vertical stack of full-viewport panels. Exactly one panel is active at a time,
//! and every animated element derives its pose from the active index alone. This crate owns the
//! state machine behind such a page; drawing is delegated to a [`ContentSurface`].
//!
//! # Control flow
//!
//! 1. **Preload**: the [`AssetGate`] waits for every declared image; one failure fails the load.
//! 2. **Navigate**: a tap, a named link, or the one-shot [`AutoAdvance`] timer calls
//!    [`Page::advance_to`], which clamps and commits the new index and scrolls the surface.
//! 3. **Animate**: the [`Animator`] retargets every element from the committed index, restarting
//!    elements whose owning panel was just entered and staggering them by their delays.
//! 4. **Render**: [`Page::frame`] samples every spring at the current virtual time.
//!
//! Time is a virtual millisecond clock advanced by the host with [`Page::advance_by`], so the
//! countdown tick and the auto-advance timer are deterministic.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod countdown;
mod eval;
mod foundation;
mod navigation;
mod page;
mod rsvp;
mod schedule;

pub use animation::animator::{Animator, Motion, PanelChange};
pub use animation::spring::{REST_EPSILON, TimingConfig};
pub use animation::table::{ElementSpec, TransitionTable};
pub use animation::target::{AnimationTarget, Lerp};
pub use assets::gate::{
    AssetGate, AssetLoadFailure, AssetLoader, FsImageLoader, GateState, LoadedImage,
    normalize_asset_path,
};
pub use config::defaults;
pub use config::model::{CountdownConfig, InvitationConfig};
pub use countdown::remaining::{Countdown, Remaining, TICK_MS, compute_remaining};
pub use eval::frame::{EvaluatedElement, PageFrame, evaluate_elements};
pub use foundation::core::{Affine, ElementId, Millis, PanelIndex, Vec2};
pub use foundation::error::{InvitationError, InvitationResult};
pub use navigation::auto_advance::{AutoAdvance, AutoAdvanceSpec};
pub use navigation::navigator::{Navigator, PanelSpec};
pub use page::controller::{Page, PagePhase};
pub use page::guest::GuestName;
pub use page::surface::{ContentSurface, RecordingSurface};
pub use rsvp::form::{Attendance, GuestSubmission, RsvpError, RsvpForm};
pub use rsvp::guestbook::Guestbook;
pub use schedule::timers::{Fired, TimerEvent, TimerId, Timers};
