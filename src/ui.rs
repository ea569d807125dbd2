//! Clock face rendering.
//!
//! This module provides:
//! - `draw_digital` and `draw_analog`, the two steady-state views
//! - Hand angle and endpoint geometry for the analog face
//! - Fixed-advance text centering shared with the startup animations
//!
//! Drawing works on any `DrawTarget<Color = BinaryColor>` and reads the
//! surface size from the target, so layouts follow the panel dimensions.
//! Draw results are discarded: drawing only touches the display buffer, which
//! cannot fail.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_6X10, FONT_9X15_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Baseline, Text},
};

use crate::clock::{weekday_name, DateTime};
use crate::config::{
    BRACKET_ARM, BRACKET_MARGIN, DOT_INSET, DOT_RADIUS, DOT_Y, FACE_RADIUS, HUB_RADIUS,
};

/// Degrees per radian, as used for every angle on the analog face.
pub const DEG_PER_RAD: f32 = 57.29577951;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextScale {
    Small,
    Large,
}

impl TextScale {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextScale::Small => &FONT_6X10,
            TextScale::Large => &FONT_9X15_BOLD,
        }
    }

    /// Fixed pixel advance per character.
    pub fn advance(self) -> u32 {
        let font = self.font();
        font.character_size.width + font.character_spacing
    }

    pub fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.font(), BinaryColor::On)
    }
}

/// Width estimate: character count times the fixed advance.
pub fn estimated_width(text: &str, scale: TextScale) -> u32 {
    text.chars().count() as u32 * scale.advance()
}

/// Left edge that centers `text` on a surface `surface_width` pixels wide.
/// Text wider than the surface starts at 0.
pub fn centered_x(surface_width: u32, text: &str, scale: TextScale) -> i32 {
    (surface_width.saturating_sub(estimated_width(text, scale)) / 2) as i32
}

// Draw `text` horizontally centered with its top edge at `y`
pub fn draw_centered_text<D>(disp: &mut D, text: &str, y: i32, scale: TextScale)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let width = disp.bounding_box().size.width;
    Text::with_baseline(
        text,
        Point::new(centered_x(width, text, scale), y),
        scale.style(),
        Baseline::Top,
    )
    .draw(disp)
    .ok();
}

// ------------------------- analog geometry -------------------------

pub fn hour_hand_angle(dt: &DateTime) -> f32 {
    (dt.hour % 12) as f32 * 30.0 + dt.minute as f32 * 0.5
}

pub fn minute_hand_angle(dt: &DateTime) -> f32 {
    (dt.minute % 60) as f32 * 6.0
}

pub fn second_hand_angle(dt: &DateTime) -> f32 {
    (dt.second % 60) as f32 * 6.0
}

/// Point `length` pixels from `center` at `degrees` clockwise from 12 o'clock.
/// Coordinates are truncated toward zero.
pub fn polar_point(center: Point, degrees: f32, length: f32) -> Point {
    let rad = degrees / DEG_PER_RAD;
    Point::new(
        (center.x as f32 + libm::sinf(rad) * length) as i32,
        (center.y as f32 - libm::cosf(rad) * length) as i32,
    )
}

// Tick marks at 12/3/6/9 are longer
fn tick_length(index: u8) -> i32 {
    if index % 3 == 0 {
        5
    } else {
        3
    }
}

fn line<D>(disp: &mut D, from: Point, to: Point)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(disp)
        .ok();
}

// Circle of radius `r` around `center` (diameter 2r + 1, like the panel libraries)
fn circle<D>(disp: &mut D, center: Point, r: u32, style: PrimitiveStyle<BinaryColor>)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(center, 2 * r + 1)
        .into_styled(style)
        .draw(disp)
        .ok();
}

// ------------------------- views -------------------------

/// Large centered time, separator, date, weekday and decorations.
pub fn draw_digital<D>(disp: &mut D, now: &DateTime)
where
    D: DrawTarget<Color = BinaryColor>,
{
    disp.clear(BinaryColor::Off).ok();
    let size = disp.bounding_box().size;
    let (w, h) = (size.width as i32, size.height as i32);

    draw_centered_text(disp, &now.time_text(), 5, TextScale::Large);

    // separator
    line(disp, Point::new(10, 25), Point::new(w - 10, 25));

    draw_centered_text(disp, &now.date_text(), 30, TextScale::Small);
    draw_centered_text(disp, weekday_name(now.weekday()), 42, TextScale::Small);

    // corner brackets, each an (corner, horizontal arm end, vertical arm end)
    let (m, a) = (BRACKET_MARGIN, BRACKET_ARM);
    let brackets = [
        (Point::new(m, m), Point::new(m + a, m), Point::new(m, m + a)),
        (Point::new(w - m, m), Point::new(w - m - a, m), Point::new(w - m, m + a)),
        (Point::new(m, h - m), Point::new(m + a, h - m), Point::new(m, h - m - a)),
        (
            Point::new(w - m, h - m),
            Point::new(w - m - a, h - m),
            Point::new(w - m, h - m - a),
        ),
    ];
    for (corner, horiz, vert) in brackets {
        line(disp, corner, horiz);
        line(disp, corner, vert);
    }

    let dot = PrimitiveStyle::with_fill(BinaryColor::On);
    circle(disp, Point::new(DOT_INSET, DOT_Y), DOT_RADIUS, dot);
    circle(disp, Point::new(w - DOT_INSET, DOT_Y), DOT_RADIUS, dot);
}

/// Round face with hour ticks and three hands, small time and date text.
pub fn draw_analog<D>(disp: &mut D, now: &DateTime)
where
    D: DrawTarget<Color = BinaryColor>,
{
    disp.clear(BinaryColor::Off).ok();
    let size = disp.bounding_box().size;
    let center = Point::new(size.width as i32 / 2, size.height as i32 / 2);
    let r = FACE_RADIUS;
    let rf = r as f32;

    // face
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    circle(disp, center, r, stroke);
    circle(disp, center, r + 1, stroke);
    circle(disp, center, HUB_RADIUS, PrimitiveStyle::with_fill(BinaryColor::On));

    // hour ticks, rim inwards
    for i in 0..12u8 {
        let deg = i as f32 * 30.0;
        let inner = rf - tick_length(i) as f32;
        line(disp, polar_point(center, deg, rf), polar_point(center, deg, inner));
    }

    // hands: hour, minute, second
    let hands = [
        (hour_hand_angle(now), rf - 12.0),
        (minute_hand_angle(now), rf - 4.0),
        (second_hand_angle(now), rf),
    ];
    for (deg, len) in hands {
        line(disp, center, polar_point(center, deg, len));
    }

    draw_centered_text(disp, &now.time_text(), size.height as i32 - 10, TextScale::Small);
    draw_centered_text(disp, &now.date_text(), 0, TextScale::Small);
}
