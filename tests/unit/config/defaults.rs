use super::*;
use crate::foundation::core::ElementId;

#[test]
fn wedding_config_is_valid() {
    let config = wedding();
    config.validate().unwrap();
    assert_eq!(config.panel_count(), 9);
    assert_eq!(config.assets.len(), 9);
    assert_eq!(config.guestbook_seed.len(), 5);
}

#[test]
fn every_panel_has_a_way_forward() {
    let config = wedding();
    for (i, panel) in config.panels.iter().enumerate() {
        assert!(
            panel.on_tap.is_some() || !panel.links.is_empty(),
            "panel {i} ({}) is a dead end",
            panel.name
        );
    }
    assert_eq!(config.panels[CLOSING].on_tap, Some(PanelIndex(INVITATION)));
}

#[test]
fn invitation_texts_are_staggered() {
    let table = table();
    let delay = |id: &str| table.get(&ElementId::from(id)).unwrap().timing.delay_ms;
    assert!(delay("invite.bottom_ornament") < delay("invite.top_ornament"));
    assert!(delay("invite.top_ornament") < delay("invite.title"));
    assert!(delay("invite.title") < delay("invite.greeting"));
    assert!(delay("invite.greeting") < delay("invite.notice"));
}

#[test]
fn borrowed_backdrops_follow_the_ceremony_panel() {
    let table = table();
    let owners: Vec<_> = table
        .owned_by(PanelIndex(CEREMONY))
        .filter(|e| e.panel != e.owner)
        .map(|e| e.id.as_str().to_string())
        .collect();
    assert_eq!(owners, vec!["gallery.backdrop", "closing.frame"]);
}

#[test]
fn hidden_texts_fade_in_on_their_panel() {
    let targets = table().compute_targets(PanelIndex(INVITATION));
    assert_eq!(targets[&ElementId::from("invite.title")].opacity, 1.0);

    let targets = table().compute_targets(PanelIndex(COVER));
    assert_eq!(targets[&ElementId::from("invite.title")].opacity, 0.0);
}
