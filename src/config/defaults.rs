//! The Nabila & Alvin wedding page, as authored.

use time::macros::datetime;

use crate::{
    animation::{
        spring::TimingConfig,
        table::{ElementSpec, TransitionTable},
        target::AnimationTarget as T,
    },
    config::model::{CountdownConfig, InvitationConfig},
    foundation::core::PanelIndex,
    navigation::{auto_advance::AutoAdvanceSpec, navigator::PanelSpec},
    rsvp::form::{Attendance, GuestSubmission},
};

pub const COVER: usize = 0;
pub const INVITATION: usize = 1;
pub const COUNTDOWN: usize = 2;
pub const COUPLE: usize = 3;
pub const VENUE: usize = 4;
pub const CEREMONY: usize = 5;
pub const GALLERY: usize = 6;
pub const RSVP: usize = 7;
pub const CLOSING: usize = 8;

/// Link on the invitation panel's "Buka Undangan" button.
pub const LINK_OPEN_INVITATION: &str = "open_invitation";
/// Link on the RSVP panel's guestbook area.
pub const LINK_GUESTBOOK: &str = "guestbook";

const PLACEHOLDER_GUEST: &str = "Tamu Undangan";
const PLACEHOLDER_WISH: &str = "We have reserved seat under your name. Due to limited space, we are unable to accommodate plus ones";

pub fn wedding() -> InvitationConfig {
    InvitationConfig {
        panels: panels(),
        auto_advance: Some(AutoAdvanceSpec {
            from: PanelIndex(COVER),
            to: PanelIndex(INVITATION),
            delay_ms: 1_500,
        }),
        countdown: Some(CountdownConfig {
            panel: PanelIndex(COUNTDOWN),
            target: datetime!(2024-12-15 00:00:00 +07:00),
        }),
        assets: [
            "/assets/frame/frame-37.png",
            "/assets/frame/galery-01.jpg",
            "/assets/frame/galery-02.jpg",
            "/assets/frame/galery-03.jpg",
            "/assets/frame/background/cover-7.png",
            "/assets/frame/background/cover-8.png",
            "/assets/frame/background/cover-9.png",
            "/assets/frame/background/cover-2.png",
            "/assets/frame/background/cover-1.png",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        guest_placeholder: PLACEHOLDER_GUEST.to_string(),
        guestbook_seed: (0..5)
            .map(|_| GuestSubmission {
                display_name: PLACEHOLDER_GUEST.to_string(),
                message: PLACEHOLDER_WISH.to_string(),
                attendance: Attendance::Attending,
            })
            .collect(),
        elements: table(),
    }
}

fn panels() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new("cover").tap_to(INVITATION),
        PanelSpec::new("invitation").link(LINK_OPEN_INVITATION, COUNTDOWN),
        PanelSpec::new("countdown").tap_to(COUPLE),
        PanelSpec::new("couple").tap_to(VENUE),
        PanelSpec::new("venue").tap_to(CEREMONY),
        PanelSpec::new("ceremony").tap_to(GALLERY),
        PanelSpec::new("gallery").tap_to(RSVP),
        PanelSpec::new("rsvp").link(LINK_GUESTBOOK, CLOSING),
        PanelSpec::new("closing").tap_to(INVITATION),
    ]
}

/// Every animated element, grouped by the panel it is drawn on.
pub fn table() -> TransitionTable {
    let soft = TimingConfig::spring(60.0, 60.0);
    let brisk = TimingConfig::spring(80.0, 60.0);
    let hidden = |scale: f64| T::scaled(scale).with_opacity(0.0);

    let mut rows = vec![
        // Cover: plays once on entry, then the auto-advance takes over.
        ElementSpec::new(
            "cover.backdrop",
            COVER,
            T::default(),
            T::scaled(1.7).at(0.0, -20.0),
            TimingConfig::spring(40.0, 60.0),
        ),
        ElementSpec::new("cover.frame", COVER, T::scaled(2.0), T::scaled(1.5), soft),
        // Invitation
        ElementSpec::new(
            "invite.top_ornament",
            INVITATION,
            T::scaled(2.0).at(0.0, 100.0),
            T::scaled(1.3),
            soft.delayed(700),
        ),
        ElementSpec::new(
            "invite.bottom_ornament",
            INVITATION,
            T::scaled(2.0).at(0.0, -100.0),
            T::scaled(1.2),
            soft.delayed(100),
        ),
        ElementSpec::new(
            "invite.title",
            INVITATION,
            hidden(1.5),
            T::scaled(1.0),
            brisk.delayed(2_000),
        ),
        ElementSpec::new(
            "invite.greeting",
            INVITATION,
            hidden(1.5),
            T::scaled(1.0),
            brisk.delayed(3_000),
        ),
        ElementSpec::new(
            "invite.notice",
            INVITATION,
            hidden(1.5),
            T::scaled(1.0),
            brisk.delayed(3_500),
        ),
    ];

    // Countdown: three frame layers share one motion.
    for layer in ["top", "bottom", "frame"] {
        rows.push(ElementSpec::new(
            format!("countdown.ornament_{layer}"),
            COUNTDOWN,
            T::scaled(1.5),
            T::scaled(1.3),
            brisk.delayed(700),
        ));
    }
    rows.push(ElementSpec::new(
        "countdown.couple",
        COUNTDOWN,
        T::scaled(2.0),
        T::scaled(0.75).at(0.0, 80.0),
        brisk.delayed(300),
    ));
    rows.push(ElementSpec::new(
        "countdown.timer",
        COUNTDOWN,
        T::scaled(1.5).at(0.0, 500.0),
        T::scaled(1.0),
        brisk.delayed(1_400),
    ));

    // Couple
    for layer in ["top", "bottom", "frame"] {
        rows.push(ElementSpec::new(
            format!("couple.ornament_{layer}"),
            COUPLE,
            hidden(1.5),
            T::scaled(1.0),
            brisk.delayed(300),
        ));
    }
    rows.push(ElementSpec::new(
        "couple.profiles",
        COUPLE,
        hidden(1.5).at(0.0, 500.0),
        T::scaled(1.0),
        brisk.delayed(1_400),
    ));

    rows.extend([
        // Venue
        ElementSpec::new(
            "venue.sky",
            VENUE,
            T::scaled(2.0),
            T::scaled(1.3),
            soft.delayed(300),
        ),
        ElementSpec::new(
            "venue.hills",
            VENUE,
            T::scaled(2.0),
            T::scaled(1.3),
            soft.delayed(300),
        ),
        ElementSpec::new(
            "venue.foreground",
            VENUE,
            T::scaled(2.0),
            T::scaled(1.0),
            soft.delayed(300),
        ),
        // Ceremony
        ElementSpec::new(
            "ceremony.sky",
            CEREMONY,
            T::scaled(2.0).at(-100.0, 0.0),
            T::scaled(1.4),
            soft.delayed(300),
        ),
        ElementSpec::new(
            "ceremony.foreground",
            CEREMONY,
            T::scaled(2.0),
            T::scaled(1.0),
            soft.delayed(300),
        ),
        ElementSpec::new(
            "ceremony.hills",
            CEREMONY,
            T::scaled(2.0).at(-100.0, 0.0),
            T::scaled(1.3),
            soft.delayed(300),
        ),
        ElementSpec::new(
            "ceremony.details",
            CEREMONY,
            hidden(2.0).at(300.0, 0.0),
            T::scaled(1.0),
            soft.delayed(2_000),
        ),
        // Gallery and closing backdrops follow the ceremony hills: they sit zoomed out and
        // shifted while their own panel is showing.
        ElementSpec::new(
            "gallery.backdrop",
            GALLERY,
            T::scaled(2.0).at(-100.0, 0.0),
            T::scaled(1.3),
            soft.delayed(300),
        )
        .owned_by(CEREMONY),
        ElementSpec::new(
            "closing.frame",
            CLOSING,
            T::scaled(2.0).at(-100.0, 0.0),
            T::scaled(1.3),
            soft.delayed(300),
        )
        .owned_by(CEREMONY),
    ]);

    TransitionTable::new(rows)
}

#[cfg(test)]
#[path = "../../tests/unit/config/defaults.rs"]
mod tests;
