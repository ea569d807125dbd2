//! OLED desk clock
//! ========================================
//! DS3231 RTC + SSD1306 128x64 on one I2C bus.
//! cargo run --release --features esp32s3
//! ========================================
//!
//! Plays the startup animation, then shows the time, alternating between the
//! digital and the analog face every 10 seconds.

#![no_std]
#![no_main]

esp_bootloader_esp_idf::esp_app_desc!();

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal_bus::i2c::RefCellDevice;
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    main,
    timer::systimer::{SystemTimer, Unit},
    Config,
};
use esp_println::{logger::init_logger, println};
use log::{info, warn, LevelFilter};

use oled_clock::{
    animation::{mode_transition, play_startup},
    clock::build_datetime,
    config::{FRAME_INTERVAL_MS, MODE_INTERVAL_MS},
    display::init_display,
    error::InitError,
    scheduler::{render_frame, ModeScheduler},
    time_source::{init_time_source, TimeSource},
    wiring::init_i2c_bus,
};

// Milliseconds since boot, truncated; the scheduler handles the wrap.
fn now_ms() -> u32 {
    let t = SystemTimer::unit_value(Unit::Unit0);
    (t.saturating_mul(1000) / SystemTimer::ticks_per_second()) as u32
}

fn halt(err: InitError) -> ! {
    println!("{}", err);
    loop {
        core::hint::spin_loop();
    }
}

#[main]
fn main() -> ! {
    let peripherals = esp_hal::init(Config::default());

    init_logger(LevelFilter::Info);

    let i2c = match init_i2c_bus(peripherals) {
        Ok(i2c) => i2c,
        Err(e) => {
            warn!("I2C config rejected: {:?}", e);
            halt(InitError::Bus)
        }
    };
    let bus = RefCell::new(i2c);

    let fallback = build_datetime();
    info!(
        "firmware built {} {}",
        fallback.date_text(),
        fallback.time_text()
    );

    let mut rtc = match init_time_source(RefCellDevice::new(&bus), &fallback) {
        Ok(rtc) => rtc,
        Err(e) => halt(e),
    };
    let mut display = match init_display(RefCellDevice::new(&bus)) {
        Ok(display) => display,
        Err(e) => halt(e),
    };

    let mut delay = Delay::new();
    if let Err(e) = play_startup(&mut display, &mut delay) {
        warn!("startup animation aborted: {:?}", e);
    }

    let mut scheduler = ModeScheduler::new(now_ms(), MODE_INTERVAL_MS);
    info!("clock running, mode {:?}", scheduler.mode());

    loop {
        if scheduler.poll(now_ms()).is_some() {
            if let Err(e) = mode_transition(&mut display, &mut delay) {
                warn!("transition failed: {:?}", e);
            }
        }

        match rtc.now() {
            Ok(now) if now.is_valid() => {
                if let Err(e) = render_frame(&mut display, scheduler.mode(), &now) {
                    warn!("frame dropped: {:?}", e);
                }
            }
            Ok(now) => warn!("RTC returned garbage: {:?}", now),
            Err(e) => warn!("RTC read failed: {:?}", e),
        }

        delay.delay_ms(FRAME_INTERVAL_MS);
    }
}
