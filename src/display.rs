//! Display surface abstraction and panel bring-up.
//
// - `Surface` is the frame sink the renderer and animations write to.
// - `init_display` brings up the SSD1306 (buffered graphics mode) on a shared I2C bus.

use core::fmt::Debug;

use display_interface::DisplayError;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use embedded_hal::i2c::I2c;
use log::{info, warn};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::error::InitError;

/// The 128x64 panel as the firmware drives it.
pub type OledDisplay<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// A monochrome canvas that can be presented as a whole frame.
///
/// Drawing goes through `DrawTarget`; nothing is visible until `present()`.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    type PresentError: Debug;

    fn present(&mut self) -> Result<(), Self::PresentError>;
}

impl<I2C: I2c> Surface for OledDisplay<I2C> {
    type PresentError = DisplayError;

    fn present(&mut self) -> Result<(), DisplayError> {
        self.flush()
    }
}

/// Bring up the SSD1306. Any bus error during init means the panel is missing.
pub fn init_display<I2C: I2c>(i2c: I2C) -> Result<OledDisplay<I2C>, InitError> {
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|e| {
        warn!("SSD1306 init failed: {:?}", e);
        InitError::DisplayNotFound
    })?;
    info!("SSD1306 ready");
    Ok(display)
}
