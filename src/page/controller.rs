use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::{
    animation::animator::{Animator, PanelChange},
    assets::gate::{AssetGate, AssetLoadFailure, AssetLoader, GateState},
    config::model::InvitationConfig,
    countdown::remaining::Countdown,
    eval::frame::{PageFrame, evaluate_elements},
    foundation::{
        core::{Millis, PanelIndex},
        error::{InvitationError, InvitationResult},
    },
    navigation::{auto_advance::AutoAdvance, navigator::Navigator},
    page::{guest::GuestName, surface::ContentSurface},
    rsvp::{
        form::{GuestSubmission, RsvpForm},
        guestbook::Guestbook,
    },
    schedule::timers::{Fired, TimerEvent, Timers},
};

/// Lifecycle of one page load.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PagePhase {
    /// Waiting on the asset gate.
    Loading,
    Interactive,
    /// An image failed to load; the page never becomes interactive.
    Failed(AssetLoadFailure),
    TornDown,
}

impl PagePhase {
    fn name(&self) -> &'static str {
        match self {
            PagePhase::Loading => "loading",
            PagePhase::Interactive => "interactive",
            PagePhase::Failed(_) => "failed",
            PagePhase::TornDown => "torn down",
        }
    }
}

/// Single owner of every piece of page state, driven by host events and a virtual clock.
pub struct Page<S: ContentSurface> {
    surface: S,
    phase: PagePhase,
    now: Millis,
    load_instant: OffsetDateTime,
    guest: GuestName,
    guest_placeholder: String,
    gate: AssetGate,
    navigator: Navigator,
    animator: Animator,
    timers: Timers,
    auto_advance: Option<AutoAdvance>,
    countdown: Option<(PanelIndex, Countdown)>,
    form: RsvpForm,
    guestbook: Guestbook,
}

impl<S: ContentSurface> Page<S> {
    /// Build a page in the `Loading` phase. `load_instant` anchors the wall clock at elapsed 0.
    pub fn new(
        config: InvitationConfig,
        guest: GuestName,
        load_instant: OffsetDateTime,
        surface: S,
    ) -> InvitationResult<Self> {
        config.validate()?;
        let InvitationConfig {
            panels,
            auto_advance,
            countdown,
            assets,
            guest_placeholder,
            guestbook_seed,
            elements,
        } = config;

        let mut form = RsvpForm::default();
        form.reset();

        Ok(Self {
            surface,
            phase: PagePhase::Loading,
            now: Millis::ZERO,
            load_instant,
            guest,
            guest_placeholder,
            gate: AssetGate::new(&assets)?,
            navigator: Navigator::new(panels),
            animator: Animator::new(elements),
            timers: Timers::new(),
            auto_advance: auto_advance.map(AutoAdvance::new),
            countdown: countdown.map(|c| (c.panel, Countdown::new(c.target))),
            form,
            guestbook: Guestbook::with_seed(guestbook_seed),
        })
    }

    pub fn phase(&self) -> &PagePhase {
        &self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == PagePhase::Interactive
    }

    /// Elapsed virtual time since load.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// `load_instant + now`, saturating at the latest representable instant.
    pub fn wall_clock(&self) -> OffsetDateTime {
        let elapsed = Duration::milliseconds(i64::try_from(self.now.0).unwrap_or(i64::MAX));
        self.load_instant
            .checked_add(elapsed)
            .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc())
    }

    pub fn active(&self) -> PanelIndex {
        self.navigator.active()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn gate(&self) -> &AssetGate {
        &self.gate
    }

    pub fn guest(&self) -> &GuestName {
        &self.guest
    }

    /// Guest name as rendered, falling back to the configured placeholder.
    pub fn guest_display(&self) -> &str {
        self.guest.display(&self.guest_placeholder)
    }

    pub fn guestbook(&self) -> &Guestbook {
        &self.guestbook
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RsvpForm {
        &mut self.form
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref().map(|(_, c)| c)
    }

    pub fn auto_advance(&self) -> Option<&AutoAdvance> {
        self.auto_advance.as_ref()
    }

    /// Release the auto-advance latch so the next entry to its source panel arms it again.
    pub fn rearm_auto_advance(&mut self) {
        if let Some(auto) = &mut self.auto_advance {
            auto.rearm();
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Paths the host must fetch. An empty list makes the page interactive immediately.
    pub fn begin_preload(&mut self) -> Vec<String> {
        if self.phase != PagePhase::Loading {
            return Vec::new();
        }
        tracing::info!(assets = self.gate.declared().len(), "preload started");
        self.settle_gate();
        if self.phase == PagePhase::Loading {
            self.gate.declared().to_vec()
        } else {
            Vec::new()
        }
    }

    /// Report a fetched image. Ignored once the page left `Loading`.
    pub fn asset_loaded(&mut self, path: &str) -> InvitationResult<&PagePhase> {
        if self.phase == PagePhase::Loading {
            self.gate.on_loaded(path)?;
            self.settle_gate();
        }
        Ok(&self.phase)
    }

    /// Report a failed image. The first failure is terminal for this load.
    pub fn asset_failed(
        &mut self,
        path: &str,
        reason: impl Into<String>,
    ) -> InvitationResult<&PagePhase> {
        if self.phase == PagePhase::Loading {
            self.gate.on_failed(path, reason)?;
            self.settle_gate();
        }
        Ok(&self.phase)
    }

    /// Load every outstanding asset through `loader`.
    pub fn preload_with(&mut self, loader: &dyn AssetLoader) -> &PagePhase {
        if self.phase == PagePhase::Loading {
            self.gate.preload_with(loader);
            self.settle_gate();
        }
        &self.phase
    }

    fn settle_gate(&mut self) {
        match self.gate.state().clone() {
            GateState::Ready => self.enter_interactive(),
            GateState::Failed(failure) => {
                tracing::warn!(path = %failure.path, reason = %failure.reason, "page load failed");
                self.phase = PagePhase::Failed(failure);
                self.render();
            }
            GateState::Loading { .. } | GateState::Abandoned => {}
        }
    }

    fn enter_interactive(&mut self) {
        self.phase = PagePhase::Interactive;
        tracing::info!(at = %self.now, "page interactive");
        self.commit(0);
    }

    /// Move the virtual clock forward by `ms`, delivering every timer that comes due on the way.
    ///
    /// Returns the number of timers delivered.
    pub fn advance_by(&mut self, ms: u64) -> usize {
        let until = self.now.after(ms);
        let mut delivered = 0;
        while let Some(fired) = self.timers.pop_due(until) {
            self.now = fired.due;
            self.dispatch(fired);
            delivered += 1;
        }
        self.now = until;
        delivered
    }

    fn dispatch(&mut self, fired: Fired) {
        if self.phase != PagePhase::Interactive {
            return;
        }
        match fired.event {
            TimerEvent::AutoAdvance { .. } => {
                let target = self
                    .auto_advance
                    .as_mut()
                    .and_then(|auto| auto.take_fired(fired.id));
                if let Some(to) = target {
                    tracing::debug!(to = %to, at = %self.now, "auto-advance fired");
                    self.commit(to.0 as i64);
                }
            }
            TimerEvent::CountdownTick => {
                let wall_now = self.wall_clock();
                if let Some((_, countdown)) = &mut self.countdown
                    && countdown.on_tick(fired.id, wall_now)
                {
                    self.render();
                }
            }
        }
    }

    /// Jump to `target`, clamped into range.
    pub fn advance_to(&mut self, target: i64) -> InvitationResult<PanelIndex> {
        self.require_interactive("advance")?;
        Ok(self.commit(target))
    }

    /// Follow the active panel's tap action. Panels without one ignore the tap.
    pub fn tap(&mut self) -> InvitationResult<Option<PanelIndex>> {
        self.require_interactive("tap")?;
        Ok(self
            .navigator
            .tap_target()
            .map(|to| self.commit(to.0 as i64)))
    }

    /// Follow a named link on the active panel.
    pub fn follow(&mut self, link: &str) -> InvitationResult<PanelIndex> {
        self.require_interactive("follow a link")?;
        let to = self.navigator.link_target(link)?;
        Ok(self.commit(to.0 as i64))
    }

    /// Submit the form. Accepted entries go to the top of the guestbook.
    pub fn submit_rsvp(&mut self) -> InvitationResult<GuestSubmission> {
        self.require_interactive("submit the RSVP form")?;
        let accepted = self.form.submit()?;
        tracing::info!(name = %accepted.display_name, "rsvp accepted");
        self.guestbook.prepend(accepted.clone());
        self.render();
        Ok(accepted)
    }

    /// Snapshot the page at the current virtual time.
    pub fn frame(&self) -> PageFrame {
        PageFrame {
            elapsed: self.now,
            phase: self.phase.clone(),
            active: self.navigator.active(),
            guest_name: self.guest_display().to_string(),
            countdown: self
                .countdown()
                .filter(|c| c.is_mounted())
                .map(Countdown::remaining),
            guestbook_entries: self.guestbook.len(),
            elements: evaluate_elements(&self.animator, self.now),
        }
    }

    /// Hand the current frame to the surface.
    pub fn render(&mut self) -> PageFrame {
        let frame = self.frame();
        self.surface.render(&frame);
        frame
    }

    /// Cancel every timer and stop listening for results. Later events are ignored.
    pub fn teardown(&mut self) {
        if self.phase == PagePhase::TornDown {
            return;
        }
        let cancelled = self.timers.cancel_all();
        if let Some((_, countdown)) = &mut self.countdown {
            countdown.detach();
        }
        if let Some(auto) = &mut self.auto_advance {
            auto.clear();
        }
        self.gate.abandon();
        self.phase = PagePhase::TornDown;
        tracing::info!(cancelled, "page torn down");
    }

    fn require_interactive(&self, action: &str) -> InvitationResult<()> {
        if self.is_interactive() {
            Ok(())
        } else {
            Err(InvitationError::phase(format!(
                "cannot {action} while the page is {}",
                self.phase.name()
            )))
        }
    }

    /// Commit the index, retarget the animations, scroll, then react to the edge.
    fn commit(&mut self, target: i64) -> PanelIndex {
        let (previous, next) = self.navigator.commit(target);
        let change = self.animator.on_panel_change(next, self.now);
        self.surface.scroll_to(next);
        if let Some(auto) = &mut self.auto_advance {
            auto.on_panel_change(change, self.now, &mut self.timers);
        }
        self.update_countdown(change);
        tracing::debug!(from = %previous, to = %next, at = %self.now, "panel committed");
        self.render();
        next
    }

    fn update_countdown(&mut self, change: PanelChange) {
        let wall_now = self.wall_clock();
        if let Some((panel, countdown)) = &mut self.countdown {
            if change.entered(*panel) {
                countdown.mount(wall_now, self.now, &mut self.timers);
            } else if change.left(*panel) {
                countdown.unmount(&mut self.timers);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
