// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::persisted_state::PersistedState;
use iced_gallery::config::{self, Config, GalleryConfig, GeneralConfig, SortOrder};
use iced_gallery::gallery::scanner::scan_directory;
use iced_gallery::gallery::thumbnail::load_thumbnail;
use iced_gallery::gallery::view_mode::VIEW_MODE_KEY;
use iced_gallery::gallery::visitors::register_visit;
use iced_gallery::gallery::{
    FrameOutcome, GalleryItem, GalleryLayout, ItemSpec, LayoutHost, Outcome, PreferenceStore,
    ViewMode, ViewTransition,
};
use iced_gallery::i18n::fluent::I18n;
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([40, 80, 120, 255]))
        .save(dir.join(name))
        .expect("write png");
}

#[test]
fn scanned_directory_animates_and_persists_across_launches() {
    let photos = tempdir().expect("photos dir");
    write_png(photos.path(), "a.png", 32, 16);
    write_png(photos.path(), "b.png", 16, 32);
    write_png(photos.path(), "c.png", 8, 8);
    std::fs::write(photos.path().join("notes.txt"), "not an image").expect("write txt");

    let data = tempdir().expect("data dir");
    let base = Some(data.path().to_path_buf());
    let config = Config::default();

    // First launch: grid by default.
    let (mut state, warning) = PersistedState::load_from(base.clone());
    assert!(warning.is_none());

    let entries = scan_directory(photos.path(), SortOrder::Alphabetical).expect("scan");
    let items: Vec<GalleryItem> = entries.into_iter().map(GalleryItem::new).collect();
    assert_eq!(items.len(), 3);

    let mut layout = GalleryLayout::new(config.gallery.layout_metrics(), ViewMode::Grid);
    layout.set_viewport(1024.0, 700.0);
    layout.set_items(items.iter().map(GalleryItem::spec).collect());
    let grid_boxes = layout.measure();

    let mut transition = ViewTransition::new(config.animation.timing());
    assert_eq!(transition.restore(&state, &mut layout), ViewMode::Grid);

    let outcome = transition.request(ViewMode::List, &mut layout, &mut state);
    assert!(matches!(outcome, Outcome::Started { .. }));
    assert_eq!(layout.mode(), ViewMode::List);

    let start = Instant::now();
    assert_eq!(transition.on_frame(start), FrameOutcome::Playing);
    // 500 ms duration + 2 x 30 ms stagger + 100 ms settle buffer.
    assert_eq!(
        transition.completion_deadline(),
        Some(start + Duration::from_millis(660))
    );
    assert_eq!(
        transition.on_frame(start + Duration::from_millis(659)),
        FrameOutcome::Playing
    );
    assert_eq!(
        transition.on_frame(start + Duration::from_millis(660)),
        FrameOutcome::Completed
    );
    assert!((0..3).all(|i| transition.inline_style(i).is_none()));

    // Second launch: list restored without animation.
    let (state, _) = PersistedState::load_from(base);
    assert_eq!(state.get(VIEW_MODE_KEY).as_deref(), Some("list"));

    let mut relaunched = GalleryLayout::new(config.gallery.layout_metrics(), ViewMode::Grid);
    relaunched.set_viewport(1024.0, 700.0);
    relaunched.set_items(items.iter().map(GalleryItem::spec).collect());
    let mut transition = ViewTransition::new(config.animation.timing());
    assert_eq!(transition.restore(&state, &mut relaunched), ViewMode::List);
    assert!(!transition.is_animating());
    assert_eq!(relaunched.measure(), layout.measure());

    // Back to grid restores the original boxes.
    let mut state = state;
    transition.request(ViewMode::Grid, &mut relaunched, &mut state);
    transition.finish();
    assert_eq!(relaunched.measure(), grid_boxes);
    assert_eq!(state.get(VIEW_MODE_KEY).as_deref(), Some("grid"));
}

#[test]
fn stored_mode_follows_the_last_accepted_toggle() {
    let data = tempdir().expect("data dir");
    let base = Some(data.path().to_path_buf());
    let (mut state, _) = PersistedState::load_from(base.clone());
    let config = Config::default();

    let mut layout = GalleryLayout::new(config.gallery.layout_metrics(), ViewMode::Grid);
    layout.set_viewport(800.0, 600.0);
    layout.set_items(vec![ItemSpec::PHOTO; 5]);
    let mut transition = ViewTransition::new(config.animation.timing());
    transition.restore(&state, &mut layout);

    let mut now = Instant::now();
    let mut toggle = |target: ViewMode, state: &mut PersistedState, now: &mut Instant| {
        let outcome = transition.request(target, &mut layout, state);
        while transition.is_animating() {
            transition.on_frame(*now);
            *now += Duration::from_millis(16);
        }
        outcome
    };

    for target in [ViewMode::List, ViewMode::Grid, ViewMode::List] {
        let outcome = toggle(target, &mut state, &mut now);
        assert!(matches!(outcome, Outcome::Started { .. }));
        assert_eq!(state.get(VIEW_MODE_KEY).as_deref(), Some(target.as_str()));
    }

    let outcome = toggle(ViewMode::List, &mut state, &mut now);
    assert!(matches!(outcome, Outcome::Applied { .. }));
    assert_eq!(state.get(VIEW_MODE_KEY).as_deref(), Some("list"));

    // A request made while the switch to grid is still playing is dropped.
    transition.request(ViewMode::Grid, &mut layout, &mut state);
    transition.on_frame(now);
    assert_eq!(
        transition.request(ViewMode::List, &mut layout, &mut state),
        Outcome::Ignored
    );
    assert_eq!(state.get(VIEW_MODE_KEY).as_deref(), Some("grid"));
    transition.finish();

    let (reloaded, _) = PersistedState::load_from(base);
    assert_eq!(reloaded.get(VIEW_MODE_KEY).as_deref(), Some("grid"));
}

#[test]
fn visitor_count_increments_per_launch() {
    let data = tempdir().expect("data dir");
    let base = Some(data.path().to_path_buf());

    for expected in 1..=3 {
        let (mut state, _) = PersistedState::load_from(base.clone());
        assert_eq!(register_visit(&mut state), expected);
    }
}

#[test]
fn configured_language_selects_bundle() {
    let dir = tempdir().expect("config dir");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);

    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr(ViewMode::Grid.label_key()), "Grille");
}

#[test]
fn thumbnails_respect_configured_edge() {
    let photos = tempdir().expect("photos dir");
    write_png(photos.path(), "wide.png", 400, 100);

    let gallery = GalleryConfig {
        thumbnail_max_edge: Some(128),
        ..GalleryConfig::default()
    };
    let thumbnail = load_thumbnail(&photos.path().join("wide.png"), gallery.thumbnail_max_edge())
        .expect("decode thumbnail");

    assert_eq!(thumbnail.width, 128);
    assert_eq!(thumbnail.height, 32);
}

#[test]
fn undecodable_file_is_scanned_but_fails_to_decode() {
    let photos = tempdir().expect("photos dir");
    std::fs::write(photos.path().join("broken.jpg"), b"not really a jpeg").expect("write");

    let entries = scan_directory(photos.path(), SortOrder::Alphabetical).expect("scan");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].caption, "broken");

    let mut item = GalleryItem::new(entries[0].clone());
    assert!(load_thumbnail(&item.entry.path, 64).is_err());
    item.failed = true;

    let mut layout = GalleryLayout::new(Config::default().gallery.layout_metrics(), ViewMode::List);
    layout.set_viewport(800.0, 600.0);
    layout.set_items(vec![item.spec()]);
    assert!(layout.item(0).is_some_and(|boxes| boxes.image.is_none()));
}
