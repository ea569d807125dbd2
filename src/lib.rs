#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod rtc_ds3231;
pub mod scheduler;
pub mod time_source;
pub mod ui;

#[cfg(feature = "firmware")]
pub mod wiring;

#[cfg(test)]
pub(crate) mod framebuffer;
