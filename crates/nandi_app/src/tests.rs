//! Page-level scenarios driven through the public event and clock API

use crate::prelude::*;
use nandi_core::TimerId;

fn mounted_page() -> (TimerScheduler, Page) {
    let scheduler = TimerScheduler::new();
    let mut page = Page::new(&SiteConfig::default()).expect("default config is valid");
    page.mount(&scheduler.handle());
    (scheduler, page)
}

fn field(page: &Page, name: &str) -> String {
    page.contact()
        .form()
        .field(name)
        .unwrap_or_default()
        .to_string()
}

fn fill_form(page: &mut Page) {
    for (field, value) in [
        ("name", "A"),
        ("phone", "9876543210"),
        ("route", "balasore-sambalpur"),
        ("message", "Window seat please"),
    ] {
        page.dispatch(PageEvent::FieldChange {
            field: field.into(),
            value: value.into(),
        })
        .unwrap();
    }
}

#[test]
fn test_hero_numbers_exact_at_three_seconds() {
    let (scheduler, mut page) = mounted_page();

    page.advance(&scheduler, 1990);
    let stats = page.snapshot().hero.stats;
    // halfway through 60 steps
    assert_eq!(stats[0].value, 25);
    assert_eq!(stats[1].value, 5000);
    assert_eq!(stats[2].value, 49);

    page.advance(&scheduler, 1010);
    let snapshot = page.snapshot();
    assert_eq!(snapshot.now_ms, 3000);
    let values: Vec<i64> = snapshot.hero.stats.iter().map(|s| s.value).collect();
    assert_eq!(values, [50, 10_000, 99]);
    assert!(!snapshot.hero.counting);
}

#[test]
fn test_feature_rotation_wraps_on_fourth_tick() {
    let (scheduler, mut page) = mounted_page();

    page.advance(&scheduler, 12_000);
    assert_eq!(page.snapshot().features.active, 3);

    page.advance(&scheduler, 4000);
    assert_eq!(page.snapshot().features.active, 0);
}

#[test]
fn test_contact_form_cycle() {
    let (scheduler, mut page) = mounted_page();
    fill_form(&mut page);

    page.dispatch(PageEvent::Submit).unwrap();
    let contact = page.snapshot().contact;
    assert_eq!(contact.form.phase, FormPhase::Submitting);
    assert!(!contact.submit_enabled);

    page.advance(&scheduler, 2000);
    let contact = page.snapshot().contact;
    assert_eq!(contact.form.phase, FormPhase::Success);
    assert_eq!(contact.submit_label, "Message Sent!");
    assert!(contact.form.fields.values().all(String::is_empty));

    page.advance(&scheduler, 3000);
    assert_eq!(page.snapshot().contact.form.phase, FormPhase::Idle);
}

#[test]
fn test_submit_with_blank_field_is_rejected() {
    let (scheduler, mut page) = mounted_page();
    page.dispatch(PageEvent::FieldChange {
        field: "name".into(),
        value: "A".into(),
    })
    .unwrap();

    let err = page.dispatch(PageEvent::Submit).unwrap_err();
    assert!(matches!(err, SiteError::MissingField(ref name) if name == "phone"));
    assert_eq!(page.contact().form().phase(), FormPhase::Idle);
    assert_eq!(field(&page, "name"), "A");

    page.advance(&scheduler, 10_000);
    assert_eq!(page.contact().form().phase(), FormPhase::Idle);
}

#[test]
fn test_unmount_stops_all_writes() {
    let (scheduler, mut page) = mounted_page();
    page.advance(&scheduler, 5000);

    page.unmount();
    assert_eq!(scheduler.pending_count(), 0);
    let before = page.snapshot();
    let rotation_writes = page.features().rotation().writes();
    let highlight_writes = page.hero().highlight().writes();

    page.advance(&scheduler, 60_000);
    assert_eq!(page.features().rotation().writes(), rotation_writes);
    assert_eq!(page.hero().highlight().writes(), highlight_writes);
    assert!(page.snapshot().same_content(&before));
}

#[test]
fn test_unmount_during_submission() {
    let (scheduler, mut page) = mounted_page();
    fill_form(&mut page);
    page.dispatch(PageEvent::Submit).unwrap();

    page.unmount();
    page.advance(&scheduler, 10_000);
    assert_eq!(page.contact().form().phase(), FormPhase::Submitting);
    assert_eq!(field(&page, "name"), "A");
}

#[test]
fn test_remount_resumes_count_up() {
    let (scheduler, mut page) = mounted_page();
    page.advance(&scheduler, 1500);
    page.unmount();
    let paused = page.snapshot().hero.stats[0].value;
    assert!(paused > 0 && paused < 50);

    page.mount(&scheduler.handle());
    page.advance(&scheduler, 3000);
    assert_eq!(page.snapshot().hero.stats[0].value, 50);
}

#[test]
fn test_scroll_turns_header_solid_and_reveals_highlights() {
    let (_scheduler, mut page) = mounted_page();

    page.dispatch(PageEvent::Scroll {
        offset: 40.0,
        viewport_height: None,
    })
    .unwrap();
    assert!(!page.snapshot().header.solid);

    page.dispatch(PageEvent::Scroll {
        offset: 2100.0,
        viewport_height: Some(900.0),
    })
    .unwrap();
    let snapshot = page.snapshot();
    assert!(snapshot.header.solid);
    assert!(snapshot.features.highlights_revealed);

    page.dispatch(PageEvent::Scroll {
        offset: 0.0,
        viewport_height: None,
    })
    .unwrap();
    let snapshot = page.snapshot();
    assert!(!snapshot.header.solid);
    assert!(snapshot.features.highlights_revealed);
}

#[test]
fn test_follow_link_closes_menu() {
    let (_scheduler, mut page) = mounted_page();
    page.dispatch(PageEvent::ToggleMenu).unwrap();
    assert!(page.snapshot().header.menu_open);

    let request = page
        .dispatch(PageEvent::FollowLink {
            label: "Contact".into(),
        })
        .unwrap();
    assert_eq!(
        request,
        Some(HostRequest::ScrollTo {
            anchor: "#contact".into()
        })
    );
    assert!(!page.snapshot().header.menu_open);
}

#[test]
fn test_scroll_to_top_request() {
    let (_scheduler, mut page) = mounted_page();
    let request = page.dispatch(PageEvent::ScrollToTop).unwrap();
    assert_eq!(request, Some(HostRequest::ScrollToTop));
}

#[test]
fn test_route_card_selection_toggles() {
    let (_scheduler, mut page) = mounted_page();
    let activate = PageEvent::Activate {
        group: CardGroup::Routes,
        index: 1,
    };

    page.dispatch(activate.clone()).unwrap();
    assert!(page.snapshot().routes.cards[1].selected);
    page.dispatch(activate).unwrap();
    assert!(!page.snapshot().routes.cards[1].selected);
}

#[test]
fn test_feature_card_activation_is_ignored() {
    let (_scheduler, mut page) = mounted_page();
    let writes = page.features().cards().writes();

    let request = page
        .dispatch(PageEvent::Activate {
            group: CardGroup::Features,
            index: 2,
        })
        .unwrap();
    assert_eq!(request, None);
    assert_eq!(page.features().cards().writes(), writes);
    assert_eq!(page.features().cards().selected(), None);
}

#[test]
fn test_stale_firing_is_ignored() {
    let scheduler = TimerScheduler::new();
    let mut page = Page::new(&SiteConfig::default()).unwrap();
    let foreign: TimerId = scheduler.schedule_once(10);

    assert!(!page.fire(foreign));
    page.mount(&scheduler.handle());
    assert_eq!(page.advance(&scheduler, 10), 1);
}

#[test]
fn test_snapshot_json_shape() {
    let (_scheduler, page) = mounted_page();
    let json: serde_json::Value =
        serde_json::from_str(&page.snapshot().to_json().unwrap()).unwrap();

    assert_eq!(json["header"]["brand"], "Nandighosh Bus");
    assert_eq!(json["routes"]["cards"][0]["features"][0]["icon"], "zap");
    assert_eq!(json["contact"]["form"]["phase"], "idle");
    assert_eq!(json["hero"]["stats"][2]["display"], "0%");
}

#[test]
fn test_invalid_config_is_reported() {
    let config = SiteConfig::from_toml("[features]\nrotation_period_ms = 0").unwrap();
    let err = Page::new(&config).unwrap_err();
    assert!(matches!(err, SiteError::Animation(_)));
}
