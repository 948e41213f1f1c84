// SPDX-License-Identifier: MPL-2.0
//! Animated switch between the grid and list layouts.
//!
//! A switch runs in four phases:
//!
//! 1. **First**: record every item's on-screen box in the current layout.
//! 2. **Last**: apply the new mode on the host, which relayouts synchronously,
//!    restore the scroll offset, and record the new on-screen boxes.
//! 3. **Invert**: give each item the transform that maps its new box back
//!    onto its old one, with no transition, so nothing appears to move.
//! 4. **Play**: on the next animation frame, transition every transform back
//!    to identity, staggered by item index. Each caption fades out as its
//!    item starts moving, then fades back in after the caption offset.
//!
//! Boxes are compared on screen rather than in content coordinates: the
//! restored scroll offset may be clamped by the shorter new layout, and the
//! inverted transform has to absorb that shift too.
//!
//! The selector controls stay disabled from the request until the last
//! staggered transition has finished plus a settle buffer; requests made in
//! that window are dropped. Once the animation completes, every item returns
//! to a clean style state.

use super::easing::CubicBezier;
use super::geometry::{Bounds, Transform};
use super::preferences::PreferenceStore;
use super::view_mode::{ViewMode, VIEW_MODE_KEY};
use std::time::{Duration, Instant};

/// The gallery container as seen by the transition.
pub trait LayoutHost {
    /// Number of items in the collection.
    fn item_count(&self) -> usize;

    /// Current box of every item, in collection order: the box of the item's
    /// image when it has one, otherwise the item's own box.
    fn measure(&self) -> Vec<Bounds>;

    /// Switches to `mode` and recomputes the layout before returning.
    fn apply_mode(&mut self, mode: ViewMode);

    fn scroll_offset(&self) -> f32;

    /// Sets the scroll offset; hosts clamp it to their scrollable range.
    fn set_scroll_offset(&mut self, offset: f32);
}

/// Timing of a view transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// Transform transition length of each item.
    pub duration: Duration,
    /// Start offset added per item index.
    pub stagger: Duration,
    /// Wait after the last item settles before completing.
    pub settle_buffer: Duration,
    /// Caption fade delay relative to its item.
    pub caption_offset: Duration,
    pub caption_fade: Duration,
    pub easing: CubicBezier,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        crate::config::AnimationConfig::default().timing()
    }
}

impl TransitionTiming {
    /// Time from the first frame until the animation of `item_count` items completes.
    #[must_use]
    pub fn total(&self, item_count: usize) -> Duration {
        let last_index = u32::try_from(item_count.saturating_sub(1)).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(last_index) + self.duration + self.settle_buffer
    }
}

/// A timed change of one style property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl TransitionSpec {
    /// Eased progress `elapsed` after the transition was set.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = active.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.ease(linear.min(1.0))
    }
}

/// Inline style the transition attaches to an item while it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Transform set in the invert phase.
    pub transform: Transform,
    /// Transition of the transform toward identity, set in the play phase.
    pub transition: Option<TransitionSpec>,
    /// Transition of the caption opacity from 1 to 0, set in the play phase.
    pub caption_fade_out: Option<TransitionSpec>,
    /// Transition of the caption opacity from 0 to 1, set in the play phase.
    pub caption_transition: Option<TransitionSpec>,
}

/// What an item looks like at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub transform: Transform,
    pub caption_opacity: f32,
}

impl ItemVisual {
    pub const SETTLED: ItemVisual = ItemVisual {
        transform: Transform::IDENTITY,
        caption_opacity: 1.0,
    };
}

/// Result of a mode request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Controls are disabled; the request was dropped.
    Ignored,
    /// The mode was applied without animation.
    Applied { scroll_offset: f32 },
    /// The mode was applied and an animation is waiting for its first frame.
    Started { scroll_offset: f32 },
}

/// Result of an animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Idle,
    Playing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Inverted transforms are set, waiting for the first frame.
    Inverted,
    Playing { started: Instant, deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct ViewTransition {
    mode: ViewMode,
    timing: TransitionTiming,
    phase: Phase,
    controls_enabled: bool,
    styles: Vec<Option<ItemStyle>>,
    last_frame: Option<Instant>,
}

impl ViewTransition {
    #[must_use]
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            mode: ViewMode::default(),
            timing,
            phase: Phase::Idle,
            controls_enabled: true,
            styles: Vec::new(),
            last_frame: None,
        }
    }

    /// Initial load: reads the persisted mode and applies it instantly.
    ///
    /// Absent or unrecognized values fall back to [`ViewMode::Grid`].
    pub fn restore<S, H>(&mut self, store: &S, host: &mut H) -> ViewMode
    where
        S: PreferenceStore + ?Sized,
        H: LayoutHost + ?Sized,
    {
        let mode = store
            .get(VIEW_MODE_KEY)
            .and_then(|raw| match raw.parse::<ViewMode>() {
                Ok(mode) => Some(mode),
                Err(error) => {
                    tracing::warn!(%error, "ignoring persisted view mode");
                    None
                }
            })
            .unwrap_or_default();
        self.apply_instant(mode, host);
        mode
    }

    /// Applies `mode` with no recording, transforms, stagger or disabling.
    pub fn apply_instant<H: LayoutHost + ?Sized>(&mut self, mode: ViewMode, host: &mut H) {
        self.reset();
        self.mode = mode;
        host.apply_mode(mode);
    }

    /// Switches to `target`, persisting it immediately, and prepares the
    /// animation when there is anything to animate.
    pub fn request<S, H>(&mut self, target: ViewMode, host: &mut H, store: &mut S) -> Outcome
    where
        S: PreferenceStore + ?Sized,
        H: LayoutHost + ?Sized,
    {
        if !self.controls_enabled {
            tracing::debug!(%target, "view mode request dropped during transition");
            return Outcome::Ignored;
        }

        if let Err(error) = store.set(VIEW_MODE_KEY, target.as_str()) {
            tracing::warn!(%error, "failed to persist view mode");
        }

        if target == self.mode || host.item_count() == 0 {
            self.mode = target;
            host.apply_mode(target);
            return Outcome::Applied {
                scroll_offset: host.scroll_offset(),
            };
        }

        // First
        let first = on_screen(host);

        // Last
        let scroll = host.scroll_offset();
        self.mode = target;
        host.apply_mode(target);
        host.set_scroll_offset(scroll);
        let last = on_screen(host);

        // Invert
        self.styles = first
            .iter()
            .zip(&last)
            .map(|(old, new)| {
                Some(ItemStyle {
                    transform: Transform::invert(*old, *new),
                    transition: None,
                    caption_fade_out: None,
                    caption_transition: None,
                })
            })
            .collect();
        self.controls_enabled = false;
        self.phase = Phase::Inverted;
        self.last_frame = None;

        tracing::debug!(%target, items = self.styles.len(), "view transition inverted");
        Outcome::Started {
            scroll_offset: host.scroll_offset(),
        }
    }

    /// Advances the animation to `now`.
    ///
    /// The first frame after [`request`](Self::request) starts the play
    /// phase; the first frame at or past the deadline completes it.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        match self.phase {
            Phase::Idle => FrameOutcome::Idle,
            Phase::Inverted => {
                self.play(now);
                FrameOutcome::Playing
            }
            Phase::Playing { deadline, .. } => {
                self.last_frame = Some(now);
                if now >= deadline {
                    self.complete();
                    FrameOutcome::Completed
                } else {
                    FrameOutcome::Playing
                }
            }
        }
    }

    fn play(&mut self, now: Instant) {
        let timing = self.timing;
        for (index, style) in self.styles.iter_mut().enumerate() {
            let Some(style) = style else { continue };
            let delay = timing
                .stagger
                .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            style.transition = Some(TransitionSpec {
                delay,
                duration: timing.duration,
                easing: timing.easing,
            });
            style.caption_fade_out = Some(TransitionSpec {
                delay,
                duration: timing.caption_offset,
                easing: CubicBezier::EASE,
            });
            style.caption_transition = Some(TransitionSpec {
                delay: delay + timing.caption_offset,
                duration: timing.caption_fade,
                easing: CubicBezier::EASE,
            });
        }

        let deadline = now + timing.total(self.styles.len());
        self.phase = Phase::Playing {
            started: now,
            deadline,
        };
        self.last_frame = Some(now);
        tracing::debug!(?deadline, "view transition playing");
    }

    fn complete(&mut self) {
        self.reset();
        tracing::debug!(mode = %self.mode, "view transition completed");
    }

    fn reset(&mut self) {
        self.styles.clear();
        self.phase = Phase::Idle;
        self.controls_enabled = true;
        self.last_frame = None;
    }

    /// Completes any running animation immediately.
    pub fn finish(&mut self) {
        if self.is_animating() {
            self.complete();
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Instant at which the running animation completes, once playing.
    #[must_use]
    pub fn completion_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Playing { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// The inline style currently attached to item `index`.
    #[must_use]
    pub fn inline_style(&self, index: usize) -> Option<&ItemStyle> {
        self.styles.get(index).and_then(Option::as_ref)
    }

    /// Appearance of item `index` at the latest frame.
    #[must_use]
    pub fn visual(&self, index: usize) -> ItemVisual {
        let Some(style) = self.inline_style(index) else {
            return ItemVisual::SETTLED;
        };

        let elapsed = match (self.phase, self.last_frame) {
            (Phase::Playing { started, .. }, Some(frame)) => frame.saturating_duration_since(started),
            _ => Duration::ZERO,
        };
        let transform_progress = style.transition.map_or(0.0, |t| t.progress(elapsed));
        let caption_opacity = match (style.caption_fade_out, style.caption_transition) {
            (Some(fade_out), Some(fade_in)) if elapsed < fade_in.delay => {
                1.0 - fade_out.progress(elapsed)
            }
            (_, Some(fade_in)) => fade_in.progress(elapsed),
            _ => 1.0,
        };

        ItemVisual {
            transform: style.transform.toward_identity(transform_progress),
            caption_opacity,
        }
    }
}

/// Item boxes relative to the visible top of the host.
fn on_screen<H: LayoutHost + ?Sized>(host: &H) -> Vec<Bounds> {
    let scroll = host.scroll_offset();
    host.measure()
        .into_iter()
        .map(|bounds| bounds.translated(0.0, -scroll))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::preferences::MemoryStore;

    /// Host with hand-placed boxes per mode.
    struct FixedHost {
        mode: ViewMode,
        grid: Vec<Bounds>,
        list: Vec<Bounds>,
        scroll: f32,
        max_scroll: f32,
        applied: Vec<ViewMode>,
    }

    impl FixedHost {
        fn new(count: usize) -> Self {
            Self {
                mode: ViewMode::Grid,
                grid: (0..count)
                    .map(|i| Bounds::new(i as f32 * 110.0, 0.0, 100.0, 100.0))
                    .collect(),
                list: (0..count)
                    .map(|i| Bounds::new(0.0, i as f32 * 60.0, 50.0, 50.0))
                    .collect(),
                scroll: 0.0,
                max_scroll: 1000.0,
                applied: Vec::new(),
            }
        }
    }

    impl LayoutHost for FixedHost {
        fn item_count(&self) -> usize {
            self.grid.len()
        }

        fn measure(&self) -> Vec<Bounds> {
            match self.mode {
                ViewMode::Grid => self.grid.clone(),
                ViewMode::List => self.list.clone(),
            }
        }

        fn apply_mode(&mut self, mode: ViewMode) {
            self.mode = mode;
            self.applied.push(mode);
            // Switching layouts resets the scroll position, as a real relayout may.
            self.scroll = 0.0;
        }

        fn scroll_offset(&self) -> f32 {
            self.scroll
        }

        fn set_scroll_offset(&mut self, offset: f32) {
            self.scroll = offset.clamp(0.0, self.max_scroll);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn request_persists_and_inverts_each_item() {
        let mut host = FixedHost::new(3);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        let outcome = transition.request(ViewMode::List, &mut host, &mut store);

        assert!(matches!(outcome, Outcome::Started { .. }));
        assert_eq!(host.mode, ViewMode::List);
        assert_eq!(store.get(VIEW_MODE_KEY).as_deref(), Some("list"));
        assert!(!transition.controls_enabled());

        for index in 0..3 {
            let style = transition.inline_style(index).expect("style set");
            assert_eq!(
                style.transform,
                Transform::invert(host.grid[index], host.list[index])
            );
            assert!(style.transition.is_none());
            assert_eq!(transition.visual(index).caption_opacity, 1.0);
        }
    }

    #[test]
    fn inverted_items_appear_unmoved() {
        let mut host = FixedHost::new(2);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        transition.request(ViewMode::List, &mut host, &mut store);
        let start = Instant::now();
        transition.on_frame(start);

        for index in 0..2 {
            let visual = transition.visual(index);
            assert_eq!(visual.transform.apply(host.list[index]), host.grid[index]);
        }
    }

    #[test]
    fn clamped_scroll_keeps_items_in_place_on_screen() {
        let mut host = FixedHost::new(3);
        host.scroll = 400.0;
        host.max_scroll = 100.0;
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        let outcome = transition.request(ViewMode::List, &mut host, &mut store);
        assert_eq!(outcome, Outcome::Started { scroll_offset: 100.0 });
        transition.on_frame(Instant::now());

        for index in 0..3 {
            let drawn = transition.visual(index).transform.apply(host.list[index]);
            assert_eq!(drawn.top - 100.0, host.grid[index].top - 400.0);
            assert_eq!(drawn.left, host.grid[index].left);
        }
    }

    #[test]
    fn scroll_offset_is_restored_after_relayout() {
        let mut host = FixedHost::new(3);
        host.scroll = 240.0;
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        let outcome = transition.request(ViewMode::List, &mut host, &mut store);

        assert_eq!(host.scroll, 240.0);
        assert_eq!(outcome, Outcome::Started { scroll_offset: 240.0 });
    }

    #[test]
    fn staggered_play_then_completion() {
        let mut host = FixedHost::new(3);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());
        transition.request(ViewMode::List, &mut host, &mut store);

        let start = Instant::now();
        assert_eq!(transition.on_frame(start), FrameOutcome::Playing);
        assert_eq!(transition.completion_deadline(), Some(start + ms(660)));

        let delays: Vec<_> = (0..3)
            .map(|i| transition.inline_style(i).unwrap().transition.unwrap().delay)
            .collect();
        assert_eq!(delays, vec![ms(0), ms(30), ms(60)]);

        // Item 0 has settled, item 2 is still moving.
        assert_eq!(transition.on_frame(start + ms(520)), FrameOutcome::Playing);
        assert!(transition.visual(0).transform.is_identity());
        assert!(!transition.visual(2).transform.is_identity());
        assert!(!transition.controls_enabled());

        assert_eq!(transition.on_frame(start + ms(659)), FrameOutcome::Playing);
        assert_eq!(transition.on_frame(start + ms(660)), FrameOutcome::Completed);
        assert!(transition.controls_enabled());
        assert!(!transition.is_animating());
        for index in 0..3 {
            assert!(transition.inline_style(index).is_none());
            assert_eq!(transition.visual(index), ItemVisual::SETTLED);
        }
    }

    #[test]
    fn requests_during_animation_are_ignored() {
        let mut host = FixedHost::new(3);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());
        transition.request(ViewMode::List, &mut host, &mut store);
        let start = Instant::now();
        transition.on_frame(start);

        let outcome = transition.request(ViewMode::Grid, &mut host, &mut store);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(host.mode, ViewMode::List);
        assert_eq!(host.applied, vec![ViewMode::List]);
        assert_eq!(store.get(VIEW_MODE_KEY).as_deref(), Some("list"));
    }

    #[test]
    fn empty_collection_only_toggles_mode() {
        let mut host = FixedHost::new(0);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        let outcome = transition.request(ViewMode::List, &mut host, &mut store);

        assert_eq!(outcome, Outcome::Applied { scroll_offset: 0.0 });
        assert_eq!(host.mode, ViewMode::List);
        assert_eq!(transition.mode(), ViewMode::List);
        assert!(transition.controls_enabled());
        assert!(!transition.is_animating());
        assert_eq!(transition.on_frame(Instant::now()), FrameOutcome::Idle);
    }

    #[test]
    fn same_mode_request_does_not_animate() {
        let mut host = FixedHost::new(2);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        let outcome = transition.request(ViewMode::Grid, &mut host, &mut store);

        assert!(matches!(outcome, Outcome::Applied { .. }));
        assert!(transition.inline_style(0).is_none());
        assert_eq!(store.get(VIEW_MODE_KEY).as_deref(), Some("grid"));
    }

    #[test]
    fn restore_defaults_to_grid() {
        let mut host = FixedHost::new(2);
        let store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        assert_eq!(transition.restore(&store, &mut host), ViewMode::Grid);
        assert_eq!(host.applied, vec![ViewMode::Grid]);
    }

    #[test]
    fn restore_applies_persisted_mode_instantly() {
        let mut host = FixedHost::new(2);
        let mut store = MemoryStore::new();
        store.set(VIEW_MODE_KEY, "list").unwrap();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        assert_eq!(transition.restore(&store, &mut host), ViewMode::List);
        assert_eq!(host.mode, ViewMode::List);
        assert!(transition.controls_enabled());
        assert!(!transition.is_animating());
        assert!(transition.inline_style(0).is_none());
    }

    #[test]
    fn restore_ignores_garbage() {
        let mut host = FixedHost::new(1);
        let mut store = MemoryStore::new();
        store.set(VIEW_MODE_KEY, "mosaic").unwrap();
        let mut transition = ViewTransition::new(TransitionTiming::default());

        assert_eq!(transition.restore(&store, &mut host), ViewMode::Grid);
    }

    #[test]
    fn captions_fade_in_after_offset() {
        let mut host = FixedHost::new(1);
        let mut store = MemoryStore::new();
        let timing = TransitionTiming::default();
        let mut transition = ViewTransition::new(timing);
        transition.request(ViewMode::List, &mut host, &mut store);

        let start = Instant::now();
        transition.on_frame(start);
        transition.on_frame(start + timing.caption_offset);
        assert_eq!(transition.visual(0).caption_opacity, 0.0);

        transition.on_frame(start + timing.caption_offset + timing.caption_fade);
        assert_eq!(transition.visual(0).caption_opacity, 1.0);
    }

    #[test]
    fn captions_fade_out_as_items_start_moving() {
        let mut host = FixedHost::new(1);
        let mut store = MemoryStore::new();
        let timing = TransitionTiming::default();
        let mut transition = ViewTransition::new(timing);
        transition.request(ViewMode::List, &mut host, &mut store);

        let start = Instant::now();
        transition.on_frame(start);
        assert_eq!(transition.visual(0).caption_opacity, 1.0);

        transition.on_frame(start + timing.caption_offset / 2);
        let halfway = transition.visual(0).caption_opacity;
        assert!(halfway > 0.0 && halfway < 1.0, "opacity {halfway}");

        transition.on_frame(start + timing.caption_offset);
        assert_eq!(transition.visual(0).caption_opacity, 0.0);
    }

    #[test]
    fn finish_clears_running_animation() {
        let mut host = FixedHost::new(2);
        let mut store = MemoryStore::new();
        let mut transition = ViewTransition::new(TransitionTiming::default());
        transition.request(ViewMode::List, &mut host, &mut store);

        transition.finish();

        assert!(transition.controls_enabled());
        assert!(transition.inline_style(1).is_none());
    }

    #[test]
    fn total_duration_for_three_items() {
        assert_eq!(TransitionTiming::default().total(3), ms(660));
        assert_eq!(TransitionTiming::default().total(0), ms(600));
    }

    #[test]
    fn transition_spec_waits_for_delay() {
        let spec = TransitionSpec {
            delay: ms(100),
            duration: ms(200),
            easing: CubicBezier::LINEAR,
        };
        assert_eq!(spec.progress(ms(50)), 0.0);
        assert!((spec.progress(ms(200)) - 0.5).abs() < 1e-3);
        assert_eq!(spec.progress(ms(400)), 1.0);
    }
}
