use std::env;

use chrono::Local;

fn main() {
    // Local wall-clock build time, as seconds since 1970-01-01 00:00 on that
    // clock. Seeds an RTC that lost power. SOURCE_DATE_EPOCH pins it for
    // reproducible builds.
    let secs = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or_else(|| Local::now().naive_local().and_utc().timestamp());
    println!("cargo:rustc-env=FIRMWARE_BUILD_LOCAL={}", secs);

    // esp-hal linker script, firmware only; host test builds link normally.
    if env::var_os("CARGO_FEATURE_FIRMWARE").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    }
}
