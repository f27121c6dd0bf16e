use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // scroll and carousel ticks are visible while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// The testimonials section is off in the default build.
/// Build with `--features testimonials` to render it.
pub fn testimonials_enabled() -> bool {
    cfg!(feature = "testimonials")
}
