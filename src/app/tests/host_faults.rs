use std::time::{Duration, Instant};

use crate::input::Intent;

use super::{RecordingHost, app_with_deck};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn refused_fullscreen_leaves_state_unchanged() {
    let t0 = Instant::now();
    let host = RecordingHost {
        refuse_fullscreen: true,
        ..RecordingHost::default()
    };
    let (mut app, log) = app_with_deck(3, host, t0);

    app.handle_intent(Intent::ToggleFullscreen, t0);
    assert!(!app.is_fullscreen());
    assert_eq!(log.borrow().fullscreen_requests, 0);
    assert_eq!(app.navigation().current_index, 0);

    app.handle_intent(Intent::Next, t0);
    app.advance(t0 + ms(600));
    assert_eq!(app.navigation().current_index, 1);
}

#[test]
fn fullscreen_toggles_and_escape_exits() {
    let t0 = Instant::now();
    let (mut app, log) = app_with_deck(3, RecordingHost::default(), t0);

    app.handle_intent(Intent::ExitFullscreen, t0);
    assert_eq!(log.borrow().fullscreen_exits, 0);

    app.handle_intent(Intent::ToggleFullscreen, t0);
    assert!(app.is_fullscreen());
    assert_eq!(log.borrow().fullscreen_requests, 1);

    app.handle_intent(Intent::ExitFullscreen, t0);
    assert!(!app.is_fullscreen());
    assert_eq!(log.borrow().fullscreen_exits, 1);

    app.handle_intent(Intent::ToggleFullscreen, t0);
    app.handle_intent(Intent::ToggleFullscreen, t0);
    assert!(!app.is_fullscreen());
    assert_eq!(log.borrow().fullscreen_requests, 2);
    assert_eq!(log.borrow().fullscreen_exits, 2);
}

#[test]
fn print_hands_layout_to_host() {
    let t0 = Instant::now();
    let (mut app, log) = app_with_deck(2, RecordingHost::default(), t0);

    app.handle_intent(Intent::Print, t0);
    let log = log.borrow();
    assert_eq!(log.printed.len(), 1);
    let document = &log.printed[0];
    assert!(document.starts_with("Topic 1\n"));
    assert!(document.contains("Slide 1 / 2: Topic 1"));
    assert!(document.contains("Slide 2 / 2: Topic 2"));
    assert!(document.contains("body 2"));
}

#[test]
fn refused_print_is_not_fatal() {
    let t0 = Instant::now();
    let host = RecordingHost {
        refuse_print: true,
        ..RecordingHost::default()
    };
    let (mut app, log) = app_with_deck(2, host, t0);

    app.handle_intent(Intent::Print, t0);
    assert!(log.borrow().printed.is_empty());
    assert_eq!(app.view().notice(), None);

    app.handle_intent(Intent::Next, t0);
    app.advance(t0 + ms(600));
    assert_eq!(app.navigation().current_index, 1);
}

#[test]
fn refused_title_updates_keep_the_view_in_sync() {
    let t0 = Instant::now();
    let host = RecordingHost {
        refuse_title: true,
        ..RecordingHost::default()
    };
    let (mut app, log) = app_with_deck(2, host, t0);

    app.handle_intent(Intent::Next, t0);
    app.advance(t0 + ms(600));
    assert!(log.borrow().titles.is_empty());
    assert_eq!(app.view().page_title(), "Topic 2 - Topic 1");
    assert_eq!(app.view().counter(), "2 / 2");
}

#[test]
fn reported_fault_shows_notice_then_clears() {
    let t0 = Instant::now();
    let (mut app, _) = app_with_deck(2, RecordingHost::default(), t0);

    app.report_fault("input error: stream closed", t0);
    assert_eq!(app.view().notice(), Some("input error: stream closed"));
    assert_eq!(app.navigation().current_index, 0);

    app.advance(t0 + ms(4999));
    assert_eq!(app.view().notice(), Some("input error: stream closed"));
    app.advance(t0 + ms(5000));
    assert_eq!(app.view().notice(), None);
}
