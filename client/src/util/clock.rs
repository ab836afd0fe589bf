//! Display time for message rows.
//!
//! Only meaningful in a browser; SSR and native tests get `None` so server
//! markup stays deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current local time of day as `HH:MM`, or `None` outside the browser.
pub fn now_label() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(format_time(now.get_hours(), now.get_minutes()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Format hours and minutes as zero-padded `HH:MM`.
pub fn format_time(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}
