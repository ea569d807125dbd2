//! Blocking full-screen animations: the startup sequence and the mode transition.
//!
//! Every frame is drawn, presented, then held with the supplied delay. Nothing
//! here can be interrupted; the caller gets control back when the last frame
//! has been shown.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_hal::delay::DelayNs;

use crate::config::{ANIM_FRAME_MS, ANIM_STEP, TITLE_HOLD_MS, TITLE_TEXT};
use crate::display::Surface;
use crate::ui::{draw_centered_text, TextScale};

fn fill_rect<S: Surface>(s: &mut S, x: i32, y: i32, w: u32, h: u32) {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(s)
        .ok();
}

fn frame_rect<S: Surface>(s: &mut S, x: i32, y: i32, w: u32, h: u32) {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(s)
        .ok();
}

/// Solid block growing from the left edge.
pub fn sweep_in<S, D>(s: &mut S, delay: &mut D) -> Result<(), S::PresentError>
where
    S: Surface,
    D: DelayNs,
{
    let size = s.bounding_box().size;
    for x in (0..size.width).step_by(ANIM_STEP as usize) {
        s.clear(BinaryColor::Off).ok();
        fill_rect(s, 0, 0, x, size.height);
        s.present()?;
        delay.delay_ms(ANIM_FRAME_MS);
    }
    Ok(())
}

/// Solid block shrinking towards the right edge.
pub fn sweep_out<S, D>(s: &mut S, delay: &mut D) -> Result<(), S::PresentError>
where
    S: Surface,
    D: DelayNs,
{
    let size = s.bounding_box().size;
    for x in (0..size.width).step_by(ANIM_STEP as usize) {
        s.clear(BinaryColor::Off).ok();
        fill_rect(s, x as i32, 0, size.width - x, size.height);
        s.present()?;
        delay.delay_ms(ANIM_FRAME_MS);
    }
    Ok(())
}

/// Title in a double frame, held for `TITLE_HOLD_MS`.
pub fn title_card<S, D>(s: &mut S, delay: &mut D) -> Result<(), S::PresentError>
where
    S: Surface,
    D: DelayNs,
{
    let w = s.bounding_box().size.width;
    s.clear(BinaryColor::Off).ok();

    draw_centered_text(s, TITLE_TEXT, 20, TextScale::Large);
    frame_rect(s, 10, 15, w - 20, 30);
    frame_rect(s, 8, 13, w - 16, 34);

    s.present()?;
    delay.delay_ms(TITLE_HOLD_MS);
    s.clear(BinaryColor::Off).ok();
    Ok(())
}

/// One-time boot sequence.
pub fn play_startup<S, D>(s: &mut S, delay: &mut D) -> Result<(), S::PresentError>
where
    S: Surface,
    D: DelayNs,
{
    sweep_in(s, delay)?;
    sweep_out(s, delay)?;
    title_card(s, delay)
}

/// Band wiping down the screen, played when the face changes. Every frame is
/// the blank screen with its top rows inverted.
pub fn mode_transition<S, D>(s: &mut S, delay: &mut D) -> Result<(), S::PresentError>
where
    S: Surface,
    D: DelayNs,
{
    let size = s.bounding_box().size;
    for y in (0..size.height).step_by(ANIM_STEP as usize) {
        s.clear(BinaryColor::Off).ok();
        fill_rect(s, 0, 0, size.width, y);
        s.present()?;
        delay.delay_ms(ANIM_FRAME_MS);
    }
    s.clear(BinaryColor::Off).ok();
    Ok(())
}
