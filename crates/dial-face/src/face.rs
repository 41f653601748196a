use dial_engine::coords::Vec2;
use dial_engine::paint::{Color, Stroke};
use dial_engine::scene::{CircleStyle, DrawSurface, TextStyle, ZIndex};

use crate::angles::{compute_hand_angles, hand_endpoint, hour_label_geometry, tick_geometry, HandAngles};
use crate::error::{FaceError, Result};
use crate::primitives::{DynamicPrimitives, StaticPrimitives};
use crate::state::DisplayState;
use crate::style::FaceStyle;
use crate::time::{SystemClock, TimeOfDay, TimeSource, WallClock};

/// Paint layers, back to front.
mod layer {
    use super::ZIndex;

    pub const BEZEL: ZIndex = ZIndex(0);
    pub const TICKS: ZIndex = ZIndex(1);
    pub const LABELS: ZIndex = ZIndex(2);
    pub const DIGITAL: ZIndex = ZIndex(3);
    pub const HANDS: ZIndex = ZIndex(4);
    pub const CAP: ZIndex = ZIndex(5);
}

/// What one tick put on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: TimeOfDay,
    pub angles: HandAngles,
    /// Zero-padded `HH:MM:SS`, drawn even while the readout is hidden.
    pub digital_text: String,
}

/// An analog clock face drawn onto a [`DrawSurface`].
///
/// Static elements (60 ticks, 12 hour labels, bezel) are drawn once by
/// [`new`](Self::new). Dynamic elements (three hands, second-hand cap, digital
/// readout) are replaced by every [`tick`](Self::tick): each slot holds exactly
/// one live element and the previous one is removed before its successor is
/// drawn.
///
/// The face never counts ticks. Every tick reads the authoritative time, so
/// late or irregular ticks (e.g. after the host was suspended) do not drift.
///
/// All calls take `&mut self`; hosts that share a face across threads must
/// serialize access themselves.
///
/// # Example
/// ```rust
/// use dial_engine::scene::Scene;
/// use dial_face::{ClockFace, FaceStyle, ManualClock, TimeOfDay};
///
/// let clock = ManualClock::new(TimeOfDay::new(14, 30, 0).unwrap());
/// let mut face = ClockFace::new(Scene::new(), clock, FaceStyle::default());
///
/// assert_eq!(face.last_frame().unwrap().digital_text, "14:30:00");
/// face.set_hour_labels_visible(false).unwrap();
///
/// let scene = face.into_surface();
/// assert!(scene.is_empty());
/// ```
pub struct ClockFace<S: DrawSurface, C: WallClock = SystemClock> {
    surface: S,
    clock: C,
    style: FaceStyle,
    state: DisplayState,
    /// `None` once torn down.
    statics: Option<StaticPrimitives>,
    dynamics: DynamicPrimitives,
    last_frame: Option<Frame>,
}

impl<S: DrawSurface> ClockFace<S, SystemClock> {
    /// Face driven by the host's local clock, with the default style.
    pub fn with_system_clock(surface: S) -> Self {
        Self::new(surface, SystemClock, FaceStyle::default())
    }
}

impl<S: DrawSurface, C: WallClock> ClockFace<S, C> {
    /// Draws the static dial and renders frame 0 immediately, so the face is
    /// never shown half-built.
    ///
    /// Scheduling further ticks is up to the caller (see `dial_engine::time::Ticker`).
    pub fn new(mut surface: S, clock: C, style: FaceStyle) -> Self {
        if !style.hands_are_ordered() {
            log::warn!(
                "hand lengths are not nested (hour {} / minute {} / second {})",
                style.hour_hand_length,
                style.minute_hand_length,
                style.second_hand_length
            );
        }

        let statics = draw_static(&mut surface, &style);
        log::debug!("clock face: drew {} static primitives", statics.len());

        let mut face = Self {
            surface,
            clock,
            style,
            state: DisplayState::default(),
            statics: Some(statics),
            dynamics: DynamicPrimitives::default(),
            last_frame: None,
        };

        face.render_frame();
        face
    }

    /// Re-renders every dynamic element for the current time.
    ///
    /// Settings changed since the previous tick (time source, simulated time)
    /// take effect here.
    pub fn tick(&mut self) -> Result<Frame> {
        self.ensure_live("tick")?;
        Ok(self.render_frame())
    }

    /// Shows or hides the digital readout. Applies immediately; repeating the
    /// same value has no further effect.
    pub fn set_digital_clock_visible(&mut self, visible: bool) -> Result<()> {
        self.ensure_live("set_digital_clock_visible")?;

        if self.state.digital_clock_visible != visible {
            log::debug!("clock face: digital readout {}", shown(visible));
        }
        self.state.digital_clock_visible = visible;

        if let Some(text) = self.dynamics.digital_text.get() {
            self.surface.set_visible(text, visible);
        }
        Ok(())
    }

    /// Shows or hides all 12 hour labels as a group. Applies immediately and
    /// never recomputes label geometry.
    pub fn set_hour_labels_visible(&mut self, visible: bool) -> Result<()> {
        self.ensure_live("set_hour_labels_visible")?;

        if self.state.hour_labels_visible != visible {
            log::debug!("clock face: hour labels {}", shown(visible));
        }
        self.state.hour_labels_visible = visible;

        if let Some(statics) = &self.statics {
            statics.set_labels_visible(&mut self.surface, visible);
        }
        Ok(())
    }

    /// Selects the time source. Takes effect on the next tick; the frame on
    /// screen is left as is.
    pub fn set_time_source(&mut self, source: TimeSource) -> Result<()> {
        self.ensure_live("set_time_source")?;

        if self.state.time_source != source {
            log::debug!("clock face: time source -> {source:?}");
        }
        self.state.time_source = source;
        Ok(())
    }

    /// Stores the simulated time. Takes effect on the next tick while the
    /// simulated source is selected.
    pub fn set_simulated_time(&mut self, time: TimeOfDay) -> Result<()> {
        self.ensure_live("set_simulated_time")?;

        log::debug!("clock face: simulated time -> {time}");
        self.state.simulated_time = time;
        Ok(())
    }

    /// Removes every element the face drew and rejects all further calls.
    ///
    /// The face is inert from the first statement on, so no tick can run
    /// against released handles. Calling it again does nothing.
    pub fn tear_down(&mut self) {
        let Some(statics) = self.statics.take() else {
            return;
        };

        self.dynamics.release_all(&mut self.surface);
        statics.release(&mut self.surface);
        self.last_frame = None;

        log::info!("clock face torn down");
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.statics.is_none()
    }

    /// Tears the face down and hands the surface back.
    pub fn into_surface(mut self) -> S {
        self.tear_down();
        self.surface
    }

    #[inline]
    pub fn display_state(&self) -> &DisplayState {
        &self.state
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// The most recently rendered frame; `None` after teardown.
    #[inline]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Number of dynamic elements currently on the surface (5 while running,
    /// 0 after teardown).
    #[inline]
    pub fn live_dynamic_primitives(&self) -> usize {
        self.dynamics.live_count()
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, e.g. for serializing a [`Scene`](dial_engine::scene::Scene).
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn ensure_live(&self, op: &'static str) -> Result<()> {
        if self.is_torn_down() {
            log::warn!("clock face: `{op}` called after teardown");
            return Err(FaceError::TornDown { op });
        }
        Ok(())
    }

    fn render_frame(&mut self) -> Frame {
        let time = self.state.effective_time(&self.clock);
        let angles = compute_hand_angles(time);
        let digital_text = time.to_string();

        let style = &self.style;
        let surface = &mut self.surface;
        let dynamics = &mut self.dynamics;
        let center = style.center();

        let hands = [
            (&mut dynamics.hour_hand, angles.hour, style.hour_hand_length, style.hour_hand_width, style.color),
            (&mut dynamics.minute_hand, angles.minute, style.minute_hand_length, style.minute_hand_width, style.color),
            (&mut dynamics.second_hand, angles.second, style.second_hand_length, style.second_hand_width, style.second_hand_color),
        ];
        for (slot, angle, length, width, color) in hands {
            let tip = center + hand_endpoint(angle, length);
            slot.replace(surface, |s| s.draw_line(layer::HANDS, center, tip, Stroke::new(width, color)));
        }

        dynamics.second_cap.replace(surface, |s| {
            s.draw_circle(layer::CAP, center, style.second_cap_radius, CircleStyle::filled(style.second_hand_color))
        });

        let digital_style = text_style(style, style.digital_size, style.digital_color);
        let digital_at = center + Vec2::new(0.0, style.digital_offset);
        let text = dynamics.digital_text.replace(surface, |s| {
            s.draw_text(layer::DIGITAL, &digital_text, digital_at, &digital_style)
        });

        surface.set_visible(text, self.state.digital_clock_visible);
        if let Some(statics) = &self.statics {
            statics.set_labels_visible(surface, self.state.hour_labels_visible);
        }

        log::trace!("clock face: frame {digital_text}");

        let frame = Frame { time, angles, digital_text };
        self.last_frame = Some(frame.clone());
        frame
    }
}

fn draw_static<S: DrawSurface>(surface: &mut S, style: &FaceStyle) -> StaticPrimitives {
    let center = style.center();

    let ticks = tick_geometry(style.radius, style.short_tick_length, style.long_tick_length)
        .iter()
        .map(|tick| {
            let stroke = style.tick_stroke(tick.is_long, tick.is_quarter);
            surface.draw_line(layer::TICKS, center + tick.start, center + tick.end, stroke)
        })
        .collect();

    let label_style = text_style(style, style.label_size, style.color);
    let labels = hour_label_geometry(style.label_radius)
        .iter()
        .map(|label| surface.draw_text(layer::LABELS, &label.value.to_string(), center + label.position, &label_style))
        .collect();

    // Inset by half the stroke so the whole bezel stays inside the face box.
    let bezel = surface.draw_circle(
        layer::BEZEL,
        center,
        style.radius - style.bezel_width * 0.5,
        CircleStyle::outlined(Stroke::new(style.bezel_width, style.color)),
    );

    StaticPrimitives { ticks, labels, bezel }
}

fn text_style(style: &FaceStyle, size: f32, color: Color) -> TextStyle {
    let text = TextStyle::new(color, size);
    match &style.font_family {
        Some(family) => text.family(family.clone()),
        None => text,
    }
}

fn shown(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}

#[cfg(test)]
mod tests {
    use dial_engine::scene::{DrawCmd, Scene};

    use super::*;
    use crate::time::ManualClock;

    const STATIC_COUNT: usize = 60 + 12 + 1;
    const DYNAMIC_COUNT: usize = 5;

    fn t(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    fn face_at(time: TimeOfDay) -> (ClockFace<Scene, ManualClock>, ManualClock) {
        let clock = ManualClock::new(time);
        let face = ClockFace::new(Scene::new(), clock.clone(), FaceStyle::default());
        (face, clock)
    }

    fn center() -> Vec2 {
        FaceStyle::default().center()
    }

    /// Lines that start at the center are hands; ticks never do.
    fn hands(face: &mut ClockFace<Scene, ManualClock>) -> Vec<(Vec2, f32)> {
        face.surface_mut()
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(line) if line.from == center() => Some((line.to, line.stroke.width)),
                _ => None,
            })
            .collect()
    }

    /// (content, visible) of every text element.
    fn texts(face: &mut ClockFace<Scene, ManualClock>) -> Vec<(String, bool)> {
        face.surface_mut()
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(text) => Some((text.text.clone(), item.visible)),
                _ => None,
            })
            .collect()
    }

    fn digital(face: &mut ClockFace<Scene, ManualClock>) -> (String, bool) {
        let found: Vec<_> = texts(face).into_iter().filter(|(s, _)| s.contains(':')).collect();
        assert_eq!(found.len(), 1, "expected exactly one digital readout");
        found.into_iter().next().unwrap()
    }

    fn labels(face: &mut ClockFace<Scene, ManualClock>) -> Vec<(String, bool)> {
        texts(face).into_iter().filter(|(s, _)| !s.contains(':')).collect()
    }

    fn near(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_draws_static_dial_and_frame_zero() {
        let (face, _) = face_at(t(10, 10, 30));
        assert_eq!(face.surface().len(), STATIC_COUNT + DYNAMIC_COUNT);
        assert_eq!(face.live_dynamic_primitives(), DYNAMIC_COUNT);
        assert_eq!(face.last_frame().unwrap().time, t(10, 10, 30));
        assert_eq!(face.display_state(), &DisplayState::default());
    }

    #[test]
    fn static_dial_has_labels_ticks_and_bezel() {
        let (mut face, _) = face_at(TimeOfDay::MIDNIGHT);

        let values: Vec<String> = labels(&mut face).into_iter().map(|(s, _)| s).collect();
        assert_eq!(values, ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);

        let scene = face.surface_mut();
        let ticks = scene
            .iter_in_paint_order()
            .filter(|item| matches!(&item.cmd, DrawCmd::Line(l) if l.from != center()))
            .count();
        assert_eq!(ticks, 60);

        let red_ticks = scene
            .iter_in_paint_order()
            .filter(|item| {
                matches!(&item.cmd, DrawCmd::Line(l) if l.from != center() && l.stroke.color == Color::RED)
            })
            .count();
        assert_eq!(red_ticks, 4);

        let bezel = scene.iter_in_paint_order().next().unwrap();
        match &bezel.cmd {
            DrawCmd::Circle(c) => assert_eq!(c.radius, 99.0),
            other => panic!("bezel should be painted first, got {other:?}"),
        }
    }

    #[test]
    fn every_static_point_lies_inside_the_face() {
        let (mut face, _) = face_at(TimeOfDay::MIDNIGHT);
        let view_box = face.style().view_box();
        for item in face.surface_mut().iter_in_paint_order() {
            if let DrawCmd::Line(line) = &item.cmd {
                assert!(view_box.contains(line.from) && view_box.contains(line.to));
            }
        }
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn hands_point_at_three_oclock() {
        let (mut face, _) = face_at(t(3, 0, 0));
        let hands = hands(&mut face);
        assert_eq!(hands.len(), 3);

        let (hour_tip, hour_width) = hands[0];
        assert!(near(hour_tip, Vec2::new(140.0, 100.0)));
        assert_eq!(hour_width, 3.0);

        // Minute and second hands both at 12.
        assert!(near(hands[1].0, Vec2::new(100.0, 40.0)));
        assert!(near(hands[2].0, Vec2::new(100.0, 20.0)));
    }

    #[test]
    fn afternoon_digital_readout() {
        let (mut face, _) = face_at(t(14, 30, 0));
        assert_eq!(digital(&mut face), ("14:30:00".to_owned(), true));

        let frame = face.last_frame().unwrap();
        assert!((frame.angles.hour.degrees() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_ticks_never_accumulate_primitives() {
        let (mut face, clock) = face_at(t(11, 59, 0));

        // Two minutes straddling noon, one tick per second.
        let start = 11 * 3600 + 59 * 60;
        for secs in start..start + 120u32 {
            clock.set(t((secs / 3600 % 24) as u8, (secs / 60 % 60) as u8, (secs % 60) as u8));
            face.tick().unwrap();
            assert_eq!(face.live_dynamic_primitives(), DYNAMIC_COUNT);
            assert_eq!(face.surface().len(), STATIC_COUNT + DYNAMIC_COUNT);
            assert_eq!(hands(&mut face).len(), 3);
        }

        // Every tick released its five predecessors.
        assert_eq!(face.surface().stats().removed, 120 * DYNAMIC_COUNT as u64);
    }

    #[test]
    fn tick_rereads_clock_after_a_stall() {
        let (mut face, clock) = face_at(t(10, 0, 0));
        clock.set(t(10, 5, 42));

        let frame = face.tick().unwrap();
        assert_eq!(frame.digital_text, "10:05:42");
        assert_eq!(digital(&mut face).0, "10:05:42");
    }

    // ── time source ───────────────────────────────────────────────────────

    #[test]
    fn simulated_time_waits_for_next_tick() {
        let (mut face, _) = face_at(t(8, 0, 0));
        let view_box = face.style().view_box();
        let before = face.surface_mut().to_svg(view_box);

        face.set_time_source(TimeSource::Simulated).unwrap();
        face.set_simulated_time(t(21, 45, 10)).unwrap();

        let unchanged = face.surface_mut().to_svg(view_box);
        assert_eq!(before, unchanged);
        assert_eq!(face.last_frame().unwrap().time, t(8, 0, 0));

        face.tick().unwrap();
        assert_eq!(digital(&mut face).0, "21:45:10");
    }

    #[test]
    fn switching_back_to_real_uses_clock() {
        let (mut face, clock) = face_at(t(8, 0, 0));
        face.set_time_source(TimeSource::Simulated).unwrap();
        face.set_simulated_time(t(1, 2, 3)).unwrap();
        face.tick().unwrap();

        clock.set(t(8, 0, 1));
        face.set_time_source(TimeSource::Real).unwrap();
        assert_eq!(face.tick().unwrap().time, t(8, 0, 1));
    }

    // ── visibility ────────────────────────────────────────────────────────

    #[test]
    fn hiding_digital_applies_now_and_survives_ticks() {
        let (mut face, _) = face_at(t(9, 9, 9));

        face.set_digital_clock_visible(false).unwrap();
        assert!(!digital(&mut face).1);

        face.tick().unwrap();
        assert!(!digital(&mut face).1);
        assert!(!face.display_state().digital_clock_visible);

        face.set_digital_clock_visible(true).unwrap();
        assert!(digital(&mut face).1);
    }

    #[test]
    fn hour_labels_toggle_as_group() {
        let (mut face, _) = face_at(t(9, 9, 9));
        let created = face.surface().stats().created;

        face.set_hour_labels_visible(false).unwrap();
        assert!(labels(&mut face).iter().all(|(_, visible)| !visible));

        face.tick().unwrap();
        assert!(labels(&mut face).iter().all(|(_, visible)| !visible));

        face.set_hour_labels_visible(true).unwrap();
        assert!(labels(&mut face).iter().all(|(_, visible)| *visible));

        // Toggling never redraws labels: only the tick created new elements.
        assert_eq!(face.surface().stats().created, created + DYNAMIC_COUNT as u64);
    }

    #[test]
    fn label_toggle_is_idempotent() {
        let (mut once, _) = face_at(t(4, 20, 0));
        let (mut twice, _) = face_at(t(4, 20, 0));

        once.set_hour_labels_visible(true).unwrap();
        twice.set_hour_labels_visible(true).unwrap();
        twice.set_hour_labels_visible(true).unwrap();

        assert_eq!(once.display_state(), twice.display_state());
        assert_eq!(labels(&mut once), labels(&mut twice));

        let view_box = once.style().view_box();
        assert_eq!(
            once.surface_mut().to_svg(view_box),
            twice.surface_mut().to_svg(view_box)
        );
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn teardown_releases_everything() {
        let (mut face, _) = face_at(t(6, 0, 0));
        face.tick().unwrap();

        face.tear_down();
        assert!(face.is_torn_down());
        assert!(face.surface().is_empty());
        assert_eq!(face.live_dynamic_primitives(), 0);
        assert!(face.last_frame().is_none());

        let stats = face.surface().stats();
        assert_eq!(stats.created, stats.removed);
    }

    #[test]
    fn calls_after_teardown_are_rejected() {
        let (mut face, _) = face_at(t(6, 0, 0));
        face.tear_down();
        face.tear_down();

        assert_eq!(face.tick(), Err(FaceError::TornDown { op: "tick" }));
        assert!(face.set_digital_clock_visible(false).is_err());
        assert!(face.set_hour_labels_visible(false).is_err());
        assert!(face.set_time_source(TimeSource::Simulated).is_err());
        assert!(face.set_simulated_time(t(1, 1, 1)).is_err());

        // Rejected calls touch neither state nor surface.
        assert_eq!(face.display_state(), &DisplayState::default());
        assert_eq!(face.surface().stats().created, (STATIC_COUNT + DYNAMIC_COUNT) as u64);
    }

    #[test]
    fn into_surface_tears_down() {
        let (face, _) = face_at(t(6, 0, 0));
        let scene = face.into_surface();
        assert!(scene.is_empty());
    }
}
