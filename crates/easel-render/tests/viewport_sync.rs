//! Integration tests: initialization and viewport-driven sizing.
//!
//! Uses `HeadlessHost` to play the role of the window, firing resize
//! notifications on demand.

use easel_core::model::Size;
use easel_core::surface::Surface;
use easel_core::{Easel, EaselConfig, PathOptions};
use easel_render::{HeadlessHost, RecordingSurface};
use pretty_assertions::assert_eq;

// ─── Fixed size ─────────────────────────────────────────────────────────

#[test]
fn fixed_surface_reports_its_own_size() {
    let host = HeadlessHost::new(Size::new(1280, 720));
    let mut easel = Easel::new(RecordingSurface::new(Size::new(100, 50)), EaselConfig::fixed());

    let sub = easel.initialize(&host).unwrap();
    assert!(sub.is_none());
    assert_eq!(easel.width(), 100);
    assert_eq!(easel.height(), 50);
}

#[test]
fn fixed_surface_ignores_viewport_changes() {
    let host = HeadlessHost::new(Size::new(1280, 720));
    let mut easel = Easel::new(RecordingSurface::new(Size::new(100, 50)), EaselConfig::fixed());
    let _ = easel.initialize(&host).unwrap();

    host.set_viewport(Size::new(640, 480));
    assert_eq!(host.listener_count(), 0);
    assert_eq!(easel.size(), Size::new(100, 50));
}

// ─── Full window ────────────────────────────────────────────────────────

#[test]
fn full_window_follows_viewport() {
    let host = HeadlessHost::new(Size::new(1280, 720));
    let mut easel = Easel::create(&host, EaselConfig::default()).unwrap();
    assert_eq!(easel.surface().pixel_size(), Size::new(300, 150));

    let sub = easel.initialize(&host).unwrap().expect("full-window subscription");
    assert_eq!(easel.size(), Size::new(1280, 720));
    assert_eq!(easel.surface().pixel_size(), Size::new(1280, 720));

    host.set_viewport(Size::new(640, 480));
    assert_eq!(easel.size(), Size::new(640, 480));
    assert_eq!(easel.surface().pixel_size(), Size::new(640, 480));

    sub.dispose();
    host.set_viewport(Size::new(320, 240));
    assert_eq!(easel.size(), Size::new(640, 480));
}

#[test]
fn resize_wipes_recorded_content() {
    let host = HeadlessHost::new(Size::new(400, 300));
    let mut easel = Easel::create(&host, EaselConfig::default()).unwrap();
    let _sub = easel.initialize(&host).unwrap();

    easel.add_point(1.0, 1.0);
    easel.add_point(2.0, 2.0);
    easel.stroke(PathOptions::OPEN);
    assert_eq!(easel.surface().ops().len(), 1);

    host.set_viewport(Size::new(500, 300));
    assert!(easel.surface().ops().is_empty());
}

#[test]
fn dropping_the_facade_leaves_listener_inert() {
    let host = HeadlessHost::default();
    let mut easel = Easel::create(&host, EaselConfig::default()).unwrap();
    let sub = easel.initialize(&host).unwrap();
    drop(easel);

    host.set_viewport(Size::new(10, 10));
    drop(sub);
    assert_eq!(host.listener_count(), 0);
}

// ─── set_size ───────────────────────────────────────────────────────────

#[test]
fn set_size_twice_equals_once() {
    let host = HeadlessHost::default();
    let mut once = Easel::create(&host, EaselConfig::fixed()).unwrap();
    let mut twice = Easel::create(&host, EaselConfig::fixed()).unwrap();

    once.set_size(333, 222);
    twice.set_size(333, 222);
    twice.set_size(333, 222);

    assert_eq!(once.size(), twice.size());
    assert_eq!(once.surface().pixel_size(), twice.surface().pixel_size());
}

#[test]
fn zero_size_passes_through() {
    let host = HeadlessHost::default();
    let mut easel = Easel::create(&host, EaselConfig::fixed()).unwrap();
    easel.set_size(0, 0);
    assert_eq!(easel.size(), Size::new(0, 0));
    assert_eq!(easel.surface().pixel_size(), Size::new(0, 0));
}
